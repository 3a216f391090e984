mod engine;
mod recovery;
mod simulation;
pub use engine::*;
pub use recovery::*;
pub use simulation::*;
