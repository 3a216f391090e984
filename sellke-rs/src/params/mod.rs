//! Population and rate parameters for a single SIR realization.
//!
//! Parameters are validated once, when a [`SirParams`] is built. Everything
//! downstream (samplers, final size solver, trajectory engine) assumes valid
//! input and never re-checks it.
mod population;
mod rates;

pub use population::*;
pub use rates::*;

use crate::{error::Error, prelude::Real, Result};
use getset::CopyGetters;

/// Validated parameters of a stochastic SIR realization.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SirParams {
    population: Population,
    rates: Rates,

    /// Pairwise infection pressure coefficient, beta * c / N.
    lambda: Real,
}

impl SirParams {
    /// Validate population and rates and derive the pairwise infection
    /// pressure coefficient.
    pub fn new(population: Population, rates: Rates) -> Result<Self> {
        if population.size() == 0 {
            return Err(Error::InvalidParam("population must not be empty".into()));
        }
        rates.validate()?;
        let lambda = rates.beta() * rates.contacts() / population.size() as Real;
        Ok(SirParams {
            population,
            rates,
            lambda,
        })
    }

    /// Basic reproduction number of the underlying model.
    pub fn basic_reproduction_number(&self) -> Real {
        self.rates.basic_reproduction_number()
    }
}
