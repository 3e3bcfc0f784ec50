use std::future::{pending, ready};
use std::time::Duration;

use tokio::time::timeout;

use super::*;

fn failed() -> io::Result<()> {
    Err(io::Error::other("no signal handler"))
}

#[tokio::test]
async fn interrupt_stops_server() {
    let kind = first_signal(ready(Ok(())), pending()).await;
    assert_eq!(kind, Shutdown::Interrupt);
}

#[tokio::test]
async fn terminate_stops_server() {
    let kind = first_signal(pending(), ready(Ok(()))).await;
    assert_eq!(kind, Shutdown::Terminate);
}

#[tokio::test]
async fn failed_interrupt_listener_falls_back_to_terminate() {
    let terminate = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(())
    };
    let kind = first_signal(ready(failed()), terminate).await;
    assert_eq!(kind, Shutdown::Terminate);
}

#[tokio::test]
async fn failed_listeners_never_resolve() {
    let waited = timeout(Duration::from_millis(50), first_signal(ready(failed()), ready(failed()))).await;
    assert!(waited.is_err());
}
