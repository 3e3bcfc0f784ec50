use fridge::guard::Page;
use web_sys::Window;

/// [`Page`] backed by `window.location`.
pub struct BrowserPage {
    window: Window,
}

impl BrowserPage {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Page for BrowserPage {
    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("page reload failed: {e:?}");
        }
    }
}
