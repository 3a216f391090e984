use crate::{params::Population, prelude::Real};
use getset::Getters;

/// Raw (time, S, I) columns written by the trajectory engine, one entry per
/// state change. The first entry is the initial state at t = 0.
#[derive(Clone, Debug, Default, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct EventLog {
    times: Vec<Real>,
    susceptible: Vec<usize>,
    infectious: Vec<usize>,
}

impl EventLog {
    pub fn with_capacity(n: usize) -> Self {
        EventLog {
            times: Vec::with_capacity(n),
            susceptible: Vec::with_capacity(n),
            infectious: Vec::with_capacity(n),
        }
    }

    /// Log with room for the longest possible realization: the initial
    /// state, one recovery per initial infective and an infection plus a
    /// recovery per susceptible.
    pub fn for_population(pop: &Population) -> Self {
        Self::with_capacity(1 + pop.infectious() + 2 * pop.susceptible())
    }

    /// Append a row.
    pub fn record(&mut self, time: Real, susceptible: usize, infectious: usize) {
        self.times.push(time);
        self.susceptible.push(susceptible);
        self.infectious.push(infectious);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Return the i-th row.
    pub fn row(&self, i: usize) -> Option<(Real, usize, usize)> {
        Some((
            *self.times.get(i)?,
            *self.susceptible.get(i)?,
            *self.infectious.get(i)?,
        ))
    }

    /// Iterate over (time, S, I) rows.
    pub fn iter(&self) -> impl Iterator<Item = (Real, usize, usize)> + '_ {
        self.times
            .iter()
            .zip(&self.susceptible)
            .zip(&self.infectious)
            .map(|((&t, &s), &i)| (t, s, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_rows() {
        let mut log = EventLog::for_population(&Population::new(2, 1, 0));
        assert!(log.is_empty());
        assert!(log.times().capacity() >= 6);

        log.record(0.0, 2, 1);
        log.record(0.5, 1, 2);
        assert_eq!(log.len(), 2);
        assert_eq!(log.row(1), Some((0.5, 1, 2)));
        assert_eq!(log.row(2), None);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec![(0.0, 2, 1), (0.5, 1, 2)]);
    }
}
