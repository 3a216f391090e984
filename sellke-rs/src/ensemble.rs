//! Monte Carlo ensembles of independent realizations.
//!
//! Realizations share no mutable state: realization k owns a generator
//! seeded with `base_seed + k`, so results do not depend on how rayon
//! schedules the work.
use crate::{
    final_size::FinalSize,
    params::SirParams,
    prelude::Real,
    sim::{Outcome, Simulation},
    utils::{PointStats, PointStatsAcc, Stats},
    Result,
};
use getset::CopyGetters;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Ensemble {
    params: SirParams,
    base_seed: u64,
    size: usize,
}

impl Ensemble {
    pub fn new(params: SirParams, base_seed: u64, size: usize) -> Self {
        Ensemble {
            params,
            base_seed,
            size,
        }
    }

    /// Seed used by the k-th realization.
    pub fn seed_for(&self, k: usize) -> u64 {
        self.base_seed.wrapping_add(k as u64)
    }

    /// Simulation driver of the k-th realization.
    pub fn simulation(&self, k: usize) -> Simulation {
        Simulation::seeded(self.params, self.seed_for(k))
    }

    /// Final sizes of all realizations, without reconstructing trajectories.
    pub fn final_sizes(&self) -> Result<Vec<FinalSize>> {
        debug!("running {} realizations (final size only)", self.size);
        (0..self.size)
            .into_par_iter()
            .map(|k| self.simulation(k).final_size())
            .collect()
    }

    /// Full outcomes of all realizations.
    pub fn outcomes(&self) -> Result<Vec<Outcome>> {
        debug!("running {} realizations", self.size);
        (0..self.size)
            .into_par_iter()
            .map(|k| self.simulation(k).run())
            .collect()
    }

    /// Summarize the final size distribution. A realization is a major
    /// outbreak when more than `major_fraction` of the susceptibles got
    /// infected.
    pub fn summary(&self, major_fraction: Real) -> Result<FinalSizeSummary> {
        let sizes = self.final_sizes()?;
        Ok(FinalSizeSummary::from_final_sizes(&sizes, major_fraction))
    }
}

/// Statistics of the final size over an ensemble.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct FinalSizeSummary {
    final_size: PointStats,
    attack_rate: PointStats,

    /// Fraction of realizations classified as major outbreaks.
    major_outbreaks: Real,
}

impl FinalSizeSummary {
    pub fn from_final_sizes(sizes: &[FinalSize], major_fraction: Real) -> Self {
        let mut totals = PointStatsAcc::new();
        let mut rates = PointStatsAcc::new();
        let mut major = 0usize;

        for z in sizes {
            totals.add(z.total() as Real);
            rates.add(z.attack_rate());
            if z.attack_rate() > major_fraction {
                major += 1;
            }
        }

        let major_outbreaks = if sizes.is_empty() {
            0.0
        } else {
            major as Real / sizes.len() as Real
        };
        FinalSizeSummary {
            final_size: totals.stats(),
            attack_rate: rates.stats(),
            major_outbreaks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Population, Rates};

    fn params(beta: Real) -> SirParams {
        SirParams::new(Population::new(190, 10, 0), Rates::new(beta, 10.0, 0.25)).unwrap()
    }

    #[test]
    fn parallel_matches_sequential() {
        let ens = Ensemble::new(params(0.05), 99, 32);
        let sizes = ens.final_sizes().unwrap();
        assert_eq!(sizes.len(), 32);
        for (k, z) in sizes.iter().enumerate() {
            let mut sim = Simulation::seeded(params(0.05), 99 + k as u64);
            assert_eq!(&sim.final_size().unwrap(), z);
        }
    }

    #[test]
    fn outcomes_agree_with_final_sizes() {
        let ens = Ensemble::new(params(0.05), 7, 16);
        let sizes = ens.final_sizes().unwrap();
        let outcomes = ens.outcomes().unwrap();
        for (z, outcome) in sizes.iter().zip(&outcomes) {
            assert_eq!(z, outcome.final_size());
            assert_eq!(outcome.trajectory().ever_infected(0), Some(z.total()));
        }
    }

    #[test]
    fn no_transmission_summary() {
        let summary = Ensemble::new(params(0.0), 0, 10).summary(0.1).unwrap();
        assert_eq!(summary.final_size().size(), 10);
        assert_eq!(summary.final_size().mean(), 10.0);
        assert_eq!(summary.final_size().std(), 0.0);
        assert_eq!(summary.attack_rate().max(), 0.0);
        assert_eq!(summary.major_outbreaks(), 0.0);
    }

    #[test]
    fn summary_ranges() {
        let summary = Ensemble::new(params(0.05), 1, 50).summary(0.1).unwrap();
        assert!(summary.final_size().min() >= 10.0);
        assert!(summary.final_size().max() <= 200.0);
        assert!((0.0..=1.0).contains(&summary.major_outbreaks()));
    }

    #[test]
    fn seeds_wrap_around() {
        let ens = Ensemble::new(params(0.05), u64::MAX, 2);
        assert_eq!(ens.seed_for(1), 0);
    }
}
