//! Browser client for the fridge-poetry board.
//!
//! Binds the headless [`fridge`] engine to the page: a DOM rendering
//! adapter, document-scoped drag listeners, the websocket transport, and the
//! `#[wasm_bindgen(start)]` bootstrap. Configuration parsing and reconnect
//! timing build natively so they can be unit tested; everything touching the
//! browser sits behind the `browser` feature.

pub mod config;
pub mod net;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod drag;
#[cfg(feature = "browser")]
pub mod page;
