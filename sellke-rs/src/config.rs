//! Configuration of the `sellke` command line runner.
//!
//! Read from a TOML file. Every key is optional and defaults to the reference
//! scenario: 990 susceptibles, 10 infectives, beta = 0.05, c = 10,
//! gamma = 0.25 and seed 1234.
//!
//! ```toml
//! seed = 1234
//! realizations = 1000
//! output = "trajectory.csv"
//!
//! [population]
//! susceptible = 990
//! infectious = 10
//!
//! [rates]
//! beta = 0.05
//! contacts = 10.0
//! gamma = 0.25
//! ```
use crate::{
    ensemble::Ensemble,
    params::{Population, Rates, SirParams},
    prelude::Real,
    sim::Simulation,
    Result,
};
use getset::{CopyGetters, Getters};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const SEED: u64 = 1234;
const MAJOR_OUTBREAK_FRACTION: Real = 0.1;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, CopyGetters)]
#[serde(default)]
pub struct Config {
    /// Seed of the main realization. Drawn from system entropy when absent.
    #[getset(get_copy = "pub")]
    seed: Option<u64>,

    /// Number of extra realizations used to summarize the final size
    /// distribution. Zero disables the ensemble.
    #[getset(get_copy = "pub")]
    realizations: usize,

    /// Attack rate above which a realization counts as a major outbreak.
    #[getset(get_copy = "pub")]
    major_outbreak_fraction: Real,

    /// CSV file for the trajectory. Written to stdout when absent.
    #[getset(get = "pub")]
    output: Option<String>,

    /// Dump the configuration and log debug messages, such as the summary
    /// of each trajectory reconstruction.
    #[getset(get_copy = "pub")]
    verbose: bool,

    #[getset(get_copy = "pub")]
    population: Population,

    #[getset(get_copy = "pub")]
    rates: Rates,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: Some(SEED),
            realizations: 0,
            major_outbreak_fraction: MAJOR_OUTBREAK_FRACTION,
            output: None,
            verbose: false,
            population: Population::default(),
            rates: Rates::default(),
        }
    }
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml(&data)
    }

    /// Maximum log level of the runner.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Validated simulation parameters.
    pub fn params(&self) -> Result<SirParams> {
        SirParams::new(self.population, self.rates)
    }

    /// Simulation driver for the main realization.
    pub fn simulation(&self) -> Result<Simulation> {
        let params = self.params()?;
        Ok(match self.seed {
            Some(seed) => Simulation::seeded(params, seed),
            None => Simulation::new(params),
        })
    }

    /// Ensemble of realizations, if enabled. Realization seeds start right
    /// after the seed of the main realization.
    pub fn ensemble(&self) -> Result<Option<Ensemble>> {
        if self.realizations == 0 {
            return Ok(None);
        }
        let base_seed = self.seed.unwrap_or_else(rand::random::<u64>).wrapping_add(1);
        Ok(Some(Ensemble::new(
            self.params()?,
            base_seed,
            self.realizations,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_is_reference_scenario() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        let params = cfg.params().unwrap();
        assert_eq!(params.population().size(), 1000);
        assert_eq!(cfg.seed(), Some(1234));
        assert!(cfg.ensemble().unwrap().is_none());
        assert_eq!(cfg.log_level(), LevelFilter::Info);
    }

    #[test]
    fn verbose_enables_debug_messages() {
        let cfg = Config::from_toml("verbose = true").unwrap();
        assert_eq!(cfg.log_level(), LevelFilter::Debug);
        assert!(log::STATIC_MAX_LEVEL >= LevelFilter::Debug);
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let cfg = Config::from_toml(
            r#"
            realizations = 8
            output = "out.csv"

            [population]
            susceptible = 95
            infectious = 5

            [rates]
            gamma = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.population(), Population::new(95, 5, 0));
        assert_eq!(cfg.rates(), Rates::new(0.05, 10.0, 0.5));
        assert_eq!(cfg.output().as_deref(), Some("out.csv"));

        let ens = cfg.ensemble().unwrap().unwrap();
        assert_eq!(ens.size(), 8);
        assert_eq!(ens.base_seed(), 1235);
    }

    #[test]
    fn invalid_rates_are_rejected() {
        let cfg = Config::from_toml("[rates]\ngamma = 0.0\n").unwrap();
        assert!(matches!(cfg.simulation(), Err(Error::InvalidParam(_))));
    }

    #[test]
    fn malformed_file() {
        assert!(matches!(
            Config::from_toml("seed = \"abc\""),
            Err(Error::Config(_))
        ));
    }
}
