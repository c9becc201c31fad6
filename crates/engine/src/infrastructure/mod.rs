//! Infrastructure: port traits and their adapters.

pub mod clock;
pub mod observers;
pub mod ports;
