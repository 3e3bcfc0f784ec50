//! Drag and sync engine for the shared fridge-poetry board.
//!
//! This crate is compiled into the browser client and runs headless in
//! tests. It owns everything between raw input and the wire: turning pointer
//! and scroll samples into clamped tile motion, emitting move intents when a
//! drag completes, and replaying inbound move/word-set events through a
//! rendering adapter. The host layer only measures the DOM, forwards events,
//! and implements [`render::Renderer`], [`guard::Page`] and
//! [`session::Outbound`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`], the composition root and input surface |
//! | [`listener`] | Inbound event dispatch (move, reload, poets, hup, words) |
//! | [`session`] | Per-page session context and the outbound channel seam |
//! | [`geometry`] | Points, sizes, clamping, and tile DOM identifiers |
//! | [`input`] | Press samples and the drag state machine states |
//! | [`drag`] | Per-tile drag controller and scroll compensation |
//! | [`emitter`] | Move intent construction and publication |
//! | [`registry`] | Word-set reconciliation against rendered tiles |
//! | [`animator`] | Eased transitions for remote moves |
//! | [`guard`] | Protocol version check and the page reload seam |
//! | [`render`] | Rendering adapter trait and the in-memory renderer |
//! | [`tile`] | The tile model |
//! | [`consts`] | Shared constants (insets, ids, easing curves) |

pub mod animator;
pub mod consts;
pub mod drag;
pub mod emitter;
pub mod engine;
pub mod geometry;
pub mod guard;
pub mod input;
pub mod listener;
pub mod registry;
pub mod render;
pub mod session;
pub mod tile;
