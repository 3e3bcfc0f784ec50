//! Page bootstrap and event routing.
//!
//! [`App`] owns the engine, the DOM renderer, and the active document drag.
//! DOM callbacks hold a `Weak<App>`; the socket task holds the only strong
//! reference, which keeps the page wired for its whole lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use fridge::engine::EngineCore;
use fridge::geometry::{Point, TileDomId};
use fridge::session::Session;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent, Window};

use crate::config::ClientConfig;
use crate::dom::{DomRenderer, TileHooks};
use crate::drag::{self, DocumentDrag};
use crate::net::socket;
use crate::page::BrowserPage;

pub struct App {
    window: Window,
    document: Document,
    engine: RefCell<EngineCore>,
    renderer: RefCell<DomRenderer>,
    page: BrowserPage,
    drag: RefCell<Option<DocumentDrag>>,
}

impl App {
    fn new(window: Window, document: Document, session: Session, seed: u64) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Self>| {
            let press = weak.clone();
            let ended = weak.clone();
            let hooks = TileHooks {
                on_press: Rc::new(move |dom_id: &TileDomId, event: &MouseEvent| {
                    if let Some(app) = press.upgrade() {
                        app.press(dom_id, event);
                    }
                }),
                on_transition_end: Rc::new(move |dom_id: &TileDomId| {
                    if let Some(app) = ended.upgrade() {
                        app.engine.borrow().transition_finished(dom_id, &mut *app.renderer.borrow_mut());
                    }
                }),
            };
            Self {
                page: BrowserPage::new(window.clone()),
                renderer: RefCell::new(DomRenderer::new(document.clone(), hooks)),
                engine: RefCell::new(EngineCore::new(session, seed)),
                drag: RefCell::new(None),
                window,
                document,
            }
        })
    }

    /// Feed one inbound socket message to the engine.
    pub fn receive(&self, text: &str) {
        self.engine.borrow_mut().handle_text(text, &mut *self.renderer.borrow_mut(), &self.page);
    }

    fn press(self: &Rc<Self>, dom_id: &TileDomId, event: &MouseEvent) {
        let Some(element) = self.renderer.borrow().element(dom_id) else {
            return;
        };
        let sample = drag::press_sample(&element, event, &self.window);
        if let Err(e) = self.engine.borrow_mut().pointer_down(dom_id, &sample, &mut *self.renderer.borrow_mut()) {
            log::warn!("drag not started: {e}");
            return;
        }
        event.prevent_default();

        let on_move = {
            let app = Rc::downgrade(self);
            let id = dom_id.clone();
            move |pointer: Point| {
                if let Some(app) = app.upgrade() {
                    app.engine.borrow_mut().pointer_move(&id, pointer, &mut *app.renderer.borrow_mut());
                }
            }
        };
        let on_scroll = {
            let app = Rc::downgrade(self);
            let id = dom_id.clone();
            move || {
                if let Some(app) = app.upgrade() {
                    let scroll = drag::scroll_position(&app.window);
                    app.engine.borrow_mut().scroll(&id, scroll, &mut *app.renderer.borrow_mut());
                }
            }
        };
        let on_up = {
            let app = Rc::downgrade(self);
            let id = dom_id.clone();
            move || {
                if let Some(app) = app.upgrade() {
                    app.release(&id);
                }
            }
        };

        match DocumentDrag::attach(self.document.clone(), on_move, on_up, on_scroll) {
            Ok(listeners) => self.replace_drag(Some(listeners)),
            Err(e) => log::warn!("failed to register drag listeners: {e:?}"),
        }
    }

    fn release(&self, dom_id: &TileDomId) {
        self.replace_drag(None);
        if let Some(intent) = self.engine.borrow_mut().pointer_up(dom_id) {
            log::debug!("sent move {} -> ({}, {})", intent.id, intent.x, intent.y);
        }
    }

    /// Swap the active document drag. The previous one is detached now and
    /// dropped on a later tick, since this may run inside its own listener.
    fn replace_drag(&self, next: Option<DocumentDrag>) {
        let previous = self.drag.replace(next);
        if let Some(previous) = previous {
            previous.detach();
            wasm_bindgen_futures::spawn_local(async move { drop(previous) });
        }
    }
}

/// Browser entry point.
///
/// # Errors
///
/// Returns a JS error when the page has no window/document or the logger
/// cannot be installed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = document.get_element_by_id(fridge::consts::CANVAS_ELEMENT_ID);
    let config = ClientConfig::from_attributes(|name| canvas.as_ref().and_then(|c| c.get_attribute(name)))
        .unwrap_or_else(|e| {
            log::warn!("invalid fridge configuration, using defaults: {e}");
            ClientConfig::default()
        });

    let location = window.location();
    let url = config.socket_url(
        &location.protocol().unwrap_or_default(),
        &location.host().unwrap_or_else(|_| "localhost:3000".to_owned()),
    );

    let (outbound, rx) = socket::channel();
    let session = Session::with_config(config.protocol_version, Rc::new(outbound), config.session_config());
    let app = App::new(window, document, session, random_seed());

    log::info!("fridge client v{} connecting to {url}", config.protocol_version);
    socket::spawn_connection(url, rx, move |text| app.receive(text));
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}
