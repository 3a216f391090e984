//! Recording and packaging of simulated events.
mod event_log;
mod trajectory;
pub use event_log::*;
pub use trajectory::*;
