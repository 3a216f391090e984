use getset::CopyGetters;
use serde::{Deserialize, Serialize};

// Default population of the reference scenario.
const SUSCEPTIBLE: usize = 990;
const INFECTIOUS: usize = 10;
const RECOVERED: usize = 0;

/// Initial compartment counts. The total size N is fixed for the whole
/// realization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
#[serde(default)]
pub struct Population {
    susceptible: usize,
    infectious: usize,
    recovered: usize,
}

impl Population {
    pub fn new(susceptible: usize, infectious: usize, recovered: usize) -> Self {
        Population {
            susceptible,
            infectious,
            recovered,
        }
    }

    /// Total population size N = S0 + I0 + R0.
    pub fn size(&self) -> usize {
        self.susceptible + self.infectious + self.recovered
    }
}

impl Default for Population {
    fn default() -> Self {
        Population::new(SUSCEPTIBLE, INFECTIOUS, RECOVERED)
    }
}
