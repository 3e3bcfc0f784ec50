//! Networking.
//!
//! `socket` owns the websocket lifecycle: the outbound queue the engine
//! writes to, the receive loop that feeds the engine, and reconnect timing.

pub mod socket;
