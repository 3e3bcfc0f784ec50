//! DOM rendering adapter.
//!
//! Tiles are absolutely positioned `<span>`s inside `#fridge`. Each tile
//! carries its own `mousedown` and `transitionend` listeners; both are
//! attached when the tile is created and detached when it is removed.

use std::collections::HashMap;
use std::rc::Rc;

use fridge::animator::Transition;
use fridge::consts::{CANVAS_ELEMENT_ID, COUNTER_ELEMENT_ID, TILE_CLASSES};
use fridge::geometry::{Point, TileDomId};
use fridge::render::Renderer;
use fridge::tile::Tile;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

/// Callbacks the renderer wires onto every tile it creates.
#[derive(Clone)]
pub struct TileHooks {
    pub on_press: Rc<dyn Fn(&TileDomId, &MouseEvent)>,
    pub on_transition_end: Rc<dyn Fn(&TileDomId)>,
}

struct TileListeners {
    element: HtmlElement,
    press: Closure<dyn FnMut(MouseEvent)>,
    transition_end: Closure<dyn FnMut(Event)>,
}

impl TileListeners {
    fn detach(&self) {
        let target: &web_sys::EventTarget = self.element.as_ref();
        if let Err(e) = target.remove_event_listener_with_callback("mousedown", self.press.as_ref().unchecked_ref()) {
            log::warn!("failed to detach mousedown: {e:?}");
        }
        if let Err(e) =
            target.remove_event_listener_with_callback("transitionend", self.transition_end.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach transitionend: {e:?}");
        }
    }
}

pub struct DomRenderer {
    document: Document,
    hooks: TileHooks,
    listeners: HashMap<TileDomId, TileListeners>,
}

impl DomRenderer {
    #[must_use]
    pub fn new(document: Document, hooks: TileHooks) -> Self {
        Self { document, hooks, listeners: HashMap::new() }
    }

    /// The rendered element for a tile, if any.
    #[must_use]
    pub fn element(&self, dom_id: &TileDomId) -> Option<HtmlElement> {
        self.document.get_element_by_id(dom_id.as_str())?.dyn_into::<HtmlElement>().ok()
    }

    fn canvas(&self) -> Option<web_sys::Element> {
        self.document.get_element_by_id(CANVAS_ELEMENT_ID)
    }

    fn build_tile(&self, tile: &Tile, dom_id: &TileDomId) -> Result<(HtmlElement, TileListeners), JsValue> {
        let element: HtmlElement = self.document.create_element("span")?.dyn_into().map_err(JsValue::from)?;
        element.set_id(dom_id.as_str());
        element.set_class_name(&TILE_CLASSES.join(" "));
        element.set_text_content(Some(&tile.text));
        let style = element.style();
        style.set_property("position", "absolute")?;
        set_offset(&element, tile.position)?;

        let on_press = Rc::clone(&self.hooks.on_press);
        let press_id = dom_id.clone();
        let press = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| on_press(&press_id, &event));

        let on_end = Rc::clone(&self.hooks.on_transition_end);
        let end_id = dom_id.clone();
        let transition_end = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_end(&end_id));

        element.add_event_listener_with_callback("mousedown", press.as_ref().unchecked_ref())?;
        element.add_event_listener_with_callback("transitionend", transition_end.as_ref().unchecked_ref())?;

        Ok((element.clone(), TileListeners { element, press, transition_end }))
    }
}

fn set_offset(element: &HtmlElement, position: Point) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("left", &format!("{}px", position.x))?;
    style.set_property("top", &format!("{}px", position.y))
}

impl Renderer for DomRenderer {
    fn has_canvas(&self) -> bool {
        self.canvas().is_some()
    }

    fn contains_tile(&self, dom_id: &TileDomId) -> bool {
        self.document.get_element_by_id(dom_id.as_str()).is_some()
    }

    fn create_tile(&mut self, tile: &Tile) {
        let Some(canvas) = self.canvas() else {
            return;
        };
        let dom_id = tile.dom_id();
        let built = self
            .build_tile(tile, &dom_id)
            .and_then(|(element, listeners)| canvas.append_child(&element).map(|_| listeners));
        match built {
            Ok(listeners) => {
                if let Some(stale) = self.listeners.insert(dom_id, listeners) {
                    stale.detach();
                }
            }
            Err(e) => log::warn!("failed to create tile {dom_id}: {e:?}"),
        }
    }

    fn remove_tile(&mut self, dom_id: &TileDomId) {
        if let Some(listeners) = self.listeners.remove(dom_id) {
            listeners.detach();
        }
        if let Some(element) = self.document.get_element_by_id(dom_id.as_str()) {
            element.remove();
        }
    }

    fn set_position(&mut self, dom_id: &TileDomId, position: Point) {
        if let Some(element) = self.element(dom_id) {
            if let Err(e) = set_offset(&element, position) {
                log::warn!("failed to move {dom_id}: {e:?}");
            }
        }
    }

    fn animate_position(&mut self, dom_id: &TileDomId, position: Point, transition: &Transition) {
        let Some(element) = self.element(dom_id) else {
            return;
        };
        let applied = element
            .style()
            .set_property("transition", &transition.css())
            .and_then(|()| set_offset(&element, position));
        if let Err(e) = applied {
            log::warn!("failed to animate {dom_id}: {e:?}");
        }
    }

    fn clear_transition(&mut self, dom_id: &TileDomId) {
        if let Some(element) = self.element(dom_id) {
            if let Err(e) = element.style().remove_property("transition") {
                log::warn!("failed to clear transition on {dom_id}: {e:?}");
            }
        }
    }

    fn set_counter(&mut self, count: u32) {
        if let Some(counter) = self.document.get_element_by_id(COUNTER_ELEMENT_ID) {
            counter.set_text_content(Some(&count.to_string()));
        }
    }
}
