use thiserror::Error;

/// Configuration for the bisection solver.
///
/// The tolerance is a relative approximate error expressed in percent,
/// so the default of `1e-4` means successive estimates agree to 0.0001 %.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub tolerance: f64,
    pub max_iters: usize,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iters: 50,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            max_iters,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the convergence tolerance in percent.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of bisection iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Validates the tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite,
    /// or if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}
