use crate::Real;

/// Errors raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parameters rejected at entry (non-positive recovery rate, empty
    /// population, non-finite values...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A set of draws that does not fit the population it is used with.
    #[error("draws do not match population: {0}")]
    DrawMismatch(String),

    /// The recovery queue ran dry while there are still infectious
    /// individuals.
    #[error("recovery queue is empty with {infectious} infectious at t = {time}")]
    EmptyRecoveryQueue { time: Real, infectious: usize },

    /// An assembled row does not add up to the population size.
    #[error("row {row} has S + I = {count}, exceeding population of {population}")]
    Conservation {
        row: usize,
        count: usize,
        population: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
