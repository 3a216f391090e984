//! Closed form final size of a realization.
//!
//! With thresholds sorted, the k-th susceptible (by rank) is infected iff all
//! lower ranked ones were and its threshold does not exceed the pressure
//! accumulated so far, lambda * Y[k], where Y[k] is the infectious
//! person-time of the initial infectives plus the first k - 1 ranked
//! susceptibles. The epidemic stops at the first threshold that is not
//! reached.
use crate::{prelude::Real, sampler::Draws};
use getset::CopyGetters;

/// Number of individuals ever infected in a realization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct FinalSize {
    /// Initial infectives.
    initial: usize,

    /// Susceptibles infected during the epidemic.
    secondary: usize,

    /// Susceptibles that escaped infection.
    escaped: usize,
}

impl FinalSize {
    /// Total ever infected, Z = I0 + secondary infections.
    pub fn total(&self) -> usize {
        self.initial + self.secondary
    }

    /// Fraction of the initial susceptibles that got infected. Zero when
    /// there were no susceptibles.
    pub fn attack_rate(&self) -> Real {
        let susceptible = self.secondary + self.escaped;
        if susceptible == 0 {
            return 0.0;
        }
        self.secondary as Real / susceptible as Real
    }
}

/// Compute the final size from the draws of a realization.
pub fn final_size(draws: &Draws, lambda: Real) -> FinalSize {
    let initial = draws.infectious();
    let susceptible = draws.susceptible();
    let mut pressure: Real = draws.initial_periods().iter().sum();

    for (k, (&q, &t)) in draws.thresholds().iter().zip(draws.periods()).enumerate() {
        if q > lambda * pressure {
            return FinalSize {
                initial,
                secondary: k,
                escaped: susceptible - k,
            };
        }
        pressure += t;
    }

    FinalSize {
        initial,
        secondary: susceptible,
        escaped: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn draws(q: &[Real], t0: &[Real], t: &[Real]) -> Draws {
        Draws::from_parts(q.to_vec(), t0.to_vec(), t.to_vec()).unwrap()
    }

    #[test]
    fn stops_at_first_unreached_threshold() {
        // Y = [2, 3], lambda * Y = [2, 3]
        let z = final_size(&draws(&[0.5, 4.0], &[2.0], &[1.0, 1.0]), 1.0);
        assert_eq!(z.secondary(), 1);
        assert_eq!(z.escaped(), 1);
        assert_eq!(z.total(), 2);
        assert_approx_eq!(z.attack_rate(), 0.5);
    }

    #[test]
    fn everybody_infected() {
        let z = final_size(&draws(&[0.5, 1.0], &[2.0], &[1.0, 1.0]), 1.0);
        assert_eq!(z.total(), 3);
        assert_eq!(z.escaped(), 0);
    }

    #[test]
    fn no_susceptibles() {
        let z = final_size(&draws(&[], &[1.0, 2.0, 3.0], &[]), 1.0);
        assert_eq!(z.total(), 3);
        assert_eq!(z.attack_rate(), 0.0);
    }

    #[test]
    fn no_infection_pressure() {
        let z = final_size(&draws(&[1e-9, 0.5, 2.0], &[10.0], &[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(z.total(), 1);
        assert_eq!(z.secondary(), 0);
    }

    #[test]
    fn threshold_equal_to_pressure_is_reached() {
        let z = final_size(&draws(&[2.0, 10.0], &[2.0], &[1.0, 1.0]), 1.0);
        assert_eq!(z.secondary(), 1);
    }
}
