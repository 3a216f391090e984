use crate::{prelude::Real, INF, NAN};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Online accumulation of summary statistics.
pub trait Stats {
    fn add(&mut self, x: Real);
    fn add_many<I>(&mut self, xs: I)
    where
        I: IntoIterator<Item = Real>,
    {
        for x in xs {
            self.add(x);
        }
    }
    fn size(&self) -> usize;
    fn total(&self) -> Real;
    fn min(&self) -> Real;
    fn max(&self) -> Real;
    fn var(&self) -> Real;
    fn std(&self) -> Real {
        self.var().sqrt()
    }
    fn mean(&self) -> Real {
        self.total() / self.size() as Real
    }
    fn stats(&self) -> PointStats {
        PointStats {
            mean: self.mean(),
            std: self.std(),
            min: self.min(),
            max: self.max(),
            size: self.size(),
        }
    }
}

/// Accumulates the first two raw moments and the range of a sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointStatsAcc {
    n: usize,
    m1: Real,
    m2: Real,
    min: Real,
    max: Real,
}

impl PointStatsAcc {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stats for PointStatsAcc {
    fn add(&mut self, x: Real) {
        self.n += 1;
        self.m1 += x;
        self.m2 += x * x;
        self.min = Real::min(x, self.min);
        self.max = Real::max(x, self.max);
    }

    fn mean(&self) -> Real {
        if self.n == 0 {
            return NAN;
        }
        self.m1 / self.n as Real
    }

    fn total(&self) -> Real {
        return self.m1;
    }

    fn var(&self) -> Real {
        if self.n == 0 {
            return NAN;
        }
        let m = self.mean();
        // Rounding may push a zero variance slightly below zero.
        return (self.m2 / self.n as Real - m * m).max(0.0);
    }

    fn min(&self) -> Real {
        self.min
    }
    fn max(&self) -> Real {
        self.max
    }
    fn size(&self) -> usize {
        self.n
    }
}

impl Default for PointStatsAcc {
    fn default() -> Self {
        PointStatsAcc {
            n: 0,
            m1: 0.,
            m2: 0.,
            min: INF,
            max: -INF,
        }
    }
}

/// Summary of a sample.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters, Deserialize, Serialize)]
#[getset(get_copy = "pub")]
pub struct PointStats {
    mean: Real,
    std: Real,
    min: Real,
    max: Real,
    size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn simple_stats() {
        let mut acc = PointStatsAcc::new();
        acc.add(0.);
        acc.add_many(vec![1., 2., 3., 4.]);
        let st = acc.stats();
        assert_eq!(st.size(), 5);
        assert_approx_eq!(st.mean(), 2.0, 0.001);
        assert_approx_eq!(st.std(), 1.4142, 0.001);
        assert_eq!(st.min(), 0.0);
        assert_eq!(st.max(), 4.0);
    }

    #[test]
    fn constant_sample_has_zero_std() {
        let mut acc = PointStatsAcc::new();
        acc.add_many(std::iter::repeat(0.1).take(1000));
        assert!(acc.std() < 1e-6);
    }

    #[test]
    fn empty_sample_has_no_spread() {
        let acc = PointStatsAcc::new();
        assert!(acc.var().is_nan());
        assert!(acc.std().is_nan());
        assert!(acc.stats().mean().is_nan());
        assert_eq!(acc.size(), 0);
    }
}
