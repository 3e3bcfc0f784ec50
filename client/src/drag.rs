//! Document-scoped drag listeners and DOM measurement.
//!
//! Move, up and scroll listeners go on the document rather than the tile so
//! a drag keeps tracking after the pointer leaves the tile. They exist only
//! between a successful press and the matching release.

use fridge::geometry::{Point, Size};
use fridge::input::PressSample;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

/// Measure a press on `element`.
#[must_use]
pub fn press_sample(element: &HtmlElement, event: &MouseEvent, window: &Window) -> PressSample {
    let container = element
        .offset_parent()
        .map(|parent| Size::new(f64::from(parent.client_width()), f64::from(parent.client_height())));
    PressSample {
        pointer: pointer(event),
        element: Point::new(f64::from(element.offset_left()), f64::from(element.offset_top())),
        tile: Size::new(f64::from(element.offset_width()), f64::from(element.offset_height())),
        container,
        scroll: scroll_position(window),
    }
}

#[must_use]
pub fn pointer(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Viewport scroll offset. Reads that fail count as unscrolled.
#[must_use]
pub fn scroll_position(window: &Window) -> Point {
    Point::new(window.scroll_x().unwrap_or(0.0), window.scroll_y().unwrap_or(0.0))
}

/// Listeners registered on the document for one active drag.
pub struct DocumentDrag {
    document: Document,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_up: Closure<dyn FnMut(MouseEvent)>,
    on_scroll: Closure<dyn FnMut(Event)>,
}

impl DocumentDrag {
    /// Register move, up and scroll listeners on `document`.
    ///
    /// # Errors
    ///
    /// Returns the JS error if any listener cannot be added; listeners that
    /// were added are removed again when the value is dropped.
    pub fn attach(
        document: Document,
        on_move: impl Fn(Point) + 'static,
        on_up: impl Fn() + 'static,
        on_scroll: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let drag = Self {
            document,
            on_move: Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| on_move(pointer(&event))),
            on_up: Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| on_up()),
            on_scroll: Closure::<dyn FnMut(Event)>::new(move |_: Event| on_scroll()),
        };
        drag.document.add_event_listener_with_callback("mousemove", drag.on_move.as_ref().unchecked_ref())?;
        drag.document.add_event_listener_with_callback("mouseup", drag.on_up.as_ref().unchecked_ref())?;
        drag.document.add_event_listener_with_callback("scroll", drag.on_scroll.as_ref().unchecked_ref())?;
        Ok(drag)
    }

    /// Remove every listener. The closures stay alive until the value is
    /// dropped, so this is safe to call from inside one of them.
    pub fn detach(&self) {
        let pairs: [(&str, &JsValue); 3] = [
            ("mousemove", self.on_move.as_ref()),
            ("mouseup", self.on_up.as_ref()),
            ("scroll", self.on_scroll.as_ref()),
        ];
        for (name, callback) in pairs {
            if let Err(e) = self.document.remove_event_listener_with_callback(name, callback.unchecked_ref()) {
                log::warn!("failed to remove document {name} listener: {e:?}");
            }
        }
    }
}

impl Drop for DocumentDrag {
    fn drop(&mut self) {
        self.detach();
    }
}
