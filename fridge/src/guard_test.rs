use super::*;

#[test]
fn missing_id_is_invalid_even_on_version_mismatch() {
    let guard = VersionGuard::new(1);
    assert_eq!(guard.check(&Hup { id: None, v: 1 }), Verdict::Invalid);
    assert_eq!(guard.check(&Hup { id: None, v: 9 }), Verdict::Invalid);
}

#[test]
fn matching_version_is_current() {
    let guard = VersionGuard::new(4);
    assert_eq!(guard.check(&Hup { id: Some(12), v: 4 }), Verdict::Current(12));
}

#[test]
fn mismatched_version_is_stale() {
    let guard = VersionGuard::new(1);
    assert_eq!(guard.check(&Hup { id: Some(3), v: 2 }), Verdict::Stale { server: 2 });
    assert_eq!(guard.check(&Hup { id: Some(3), v: 0 }), Verdict::Stale { server: 0 });
}

#[test]
fn id_zero_is_still_an_id() {
    let guard = VersionGuard::new(1);
    assert_eq!(guard.check(&Hup { id: Some(0), v: 1 }), Verdict::Current(0));
}

#[test]
fn recording_page_counts_reloads() {
    let page = RecordingPage::new();
    assert_eq!(page.reloads(), 0);
    page.reload();
    page.reload();
    assert_eq!(page.reloads(), 2);
}
