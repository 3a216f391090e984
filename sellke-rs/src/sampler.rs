//! Random draws consumed by a realization.
//!
//! A realization needs three sequences: the sorted resistance thresholds of
//! the susceptibles, the infectious periods of the initial infectives and the
//! infectious periods of the susceptibles, assigned by infection rank. They
//! are always drawn in this order from a single stream, so a seed fully
//! determines the realization.
use crate::{error::Error, params::SirParams, prelude::Real, Result};
use getset::Getters;
use log::trace;
use rand::Rng;
use rand_distr::{Distribution, Exp, Exp1};

/// Draw n unit exponential resistance thresholds, sorted in ascending order.
pub fn sample_thresholds(n: usize, rng: &mut impl Rng) -> Vec<Real> {
    let mut thresholds: Vec<Real> = (0..n).map(|_| rng.sample::<Real, _>(Exp1)).collect();
    thresholds.sort_by(|a, b| a.total_cmp(b));
    return thresholds;
}

/// Samples exponentially distributed infectious periods with mean 1 / gamma.
#[derive(Debug, Copy, Clone)]
pub struct InfectiousPeriodSampler {
    distrib: Exp<Real>,
}

impl InfectiousPeriodSampler {
    pub fn new(gamma: Real) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "gamma must be finite and positive, got {}",
                gamma
            )));
        }
        let distrib = Exp::new(gamma).map_err(|e| Error::InvalidParam(format!("{:?}", e)))?;
        Ok(InfectiousPeriodSampler { distrib })
    }

    /// Draw n infectious periods.
    pub fn sample(&self, n: usize, rng: &mut impl Rng) -> Vec<Real> {
        self.distrib.sample_iter(rng).take(n).collect()
    }
}

/// All draws of one realization. Immutable once created.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Draws {
    /// Resistance thresholds of susceptibles, ascending.
    thresholds: Vec<Real>,

    /// Infectious periods of the initial infectives.
    initial_periods: Vec<Real>,

    /// Infectious periods of susceptibles, indexed by infection rank. Drawn
    /// for every susceptible, infected or not.
    periods: Vec<Real>,
}

impl Draws {
    /// Draw thresholds, then initial infectious periods, then the infectious
    /// periods of all susceptibles.
    pub fn sample(params: &SirParams, rng: &mut impl Rng) -> Result<Self> {
        let pop = params.population();
        let sampler = InfectiousPeriodSampler::new(params.rates().gamma())?;

        let thresholds = sample_thresholds(pop.susceptible(), rng);
        let initial_periods = sampler.sample(pop.infectious(), rng);
        let periods = sampler.sample(pop.susceptible(), rng);
        trace!(
            "drew {} thresholds and {} infectious periods",
            thresholds.len(),
            initial_periods.len() + periods.len()
        );

        Ok(Draws {
            thresholds,
            initial_periods,
            periods,
        })
    }

    /// Build draws from explicit values, e.g. to replay a realization
    /// produced elsewhere.
    ///
    /// Thresholds must be sorted and have the same length as periods. All
    /// values must be finite and non-negative.
    pub fn from_parts(
        thresholds: Vec<Real>,
        initial_periods: Vec<Real>,
        periods: Vec<Real>,
    ) -> Result<Self> {
        if thresholds.len() != periods.len() {
            return Err(Error::DrawMismatch(format!(
                "{} thresholds but {} infectious periods",
                thresholds.len(),
                periods.len()
            )));
        }
        let all = thresholds.iter().chain(&initial_periods).chain(&periods);
        if let Some(x) = all.cloned().find(|x| !x.is_finite() || *x < 0.0) {
            return Err(Error::DrawMismatch(format!("invalid draw: {}", x)));
        }
        if thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::DrawMismatch("thresholds are not sorted".into()));
        }
        Ok(Draws {
            thresholds,
            initial_periods,
            periods,
        })
    }

    /// Number of susceptibles covered by these draws.
    pub fn susceptible(&self) -> usize {
        self.thresholds.len()
    }

    /// Number of initial infectives covered by these draws.
    pub fn infectious(&self) -> usize {
        self.initial_periods.len()
    }

    /// Fail if draws were not produced for the population in params.
    pub fn check(&self, params: &SirParams) -> Result<()> {
        let pop = params.population();
        if self.susceptible() != pop.susceptible() || self.infectious() != pop.infectious() {
            return Err(Error::DrawMismatch(format!(
                "draws cover S0 = {}, I0 = {}, population has S0 = {}, I0 = {}",
                self.susceptible(),
                self.infectious(),
                pop.susceptible(),
                pop.infectious()
            )));
        }
        Ok(())
    }
}
