//! Board services: the word list, client fan-out, and liveness checks.

pub mod hup;
pub mod relay;
pub mod words;
