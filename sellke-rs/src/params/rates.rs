use crate::{error::Error, prelude::Real, Result};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

// Default rates of the reference scenario.
const BETA: Real = 0.05;
const CONTACTS: Real = 10.0;
const GAMMA: Real = 0.25;

/// Transmission and recovery rates.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
#[serde(default)]
pub struct Rates {
    /// Probability of transmission per contact.
    beta: Real,

    /// Contact rate per individual.
    contacts: Real,

    /// Recovery rate. The mean infectious period is 1 / gamma.
    gamma: Real,
}

impl Rates {
    pub fn new(beta: Real, contacts: Real, gamma: Real) -> Self {
        Rates {
            beta,
            contacts,
            gamma,
        }
    }

    /// Check that all rates are usable. A zero transmission rate is allowed,
    /// a zero recovery rate is not since the epidemic would never end.
    pub fn validate(&self) -> Result<()> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(Error::InvalidParam(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !self.contacts.is_finite() || self.contacts < 0.0 {
            return Err(Error::InvalidParam(format!(
                "contact rate must be finite and non-negative, got {}",
                self.contacts
            )));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "gamma must be finite and positive, got {}",
                self.gamma
            )));
        }
        Ok(())
    }

    pub fn basic_reproduction_number(&self) -> Real {
        self.beta * self.contacts / self.gamma
    }

    /// Mean infectious period.
    pub fn infectious_period(&self) -> Real {
        1.0 / self.gamma
    }
}

impl Default for Rates {
    fn default() -> Self {
        Rates::new(BETA, CONTACTS, GAMMA)
    }
}
