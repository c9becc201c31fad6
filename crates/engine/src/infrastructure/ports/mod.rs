//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Clock/Random (for testing)
//! - Collection observers (the rendering surface, logging)

mod observer;
mod testing;

pub use observer::{CatalogObserver, Notice, NoticeKind};
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use observer::MockCatalogObserver;
#[cfg(test)]
pub use testing::MockClockPort;
