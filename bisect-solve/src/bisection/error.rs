use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during bisection solving.
///
/// Reaching the iteration cap is not an error; it is reported through
/// [`Status::MaxIters`](super::Status::MaxIters) on an otherwise valid solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "function does not change sign between xmin and xmax: \
         f({xmin})={f_xmin}, f({xmax})={f_xmax}"
    )]
    NoSignChange {
        xmin: f64,
        xmax: f64,
        f_xmin: f64,
        f_xmax: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}
