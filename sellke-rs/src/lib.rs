//! Exact simulation of the stochastic SIR epidemic with Sellke's threshold
//! construction.
//!
//! Every susceptible receives a unit exponential resistance threshold and is
//! infected once the cumulative infection pressure exceeds it. Sorting the
//! thresholds gives the final epidemic size in closed form
//! ([`final_size::final_size`]) and the very same draws drive an event-driven
//! reconstruction of the whole trajectory ([`sim::TrajectoryEngine`]).
pub mod config;
pub mod ensemble;
pub mod error;
pub mod final_size;
pub mod params;
pub mod prelude;
pub mod sampler;
pub mod sim;
pub mod trackers;
pub mod utils;

pub use crate::error::{Error, Result};

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const INF: Real = Real::INFINITY;
pub(crate) const NAN: Real = Real::NAN;
