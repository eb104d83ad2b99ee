//! Bisection root finding on a bracketed interval.
//!
//! # Algorithm
//!
//! Given `f` and a bracket `[xmin, xmax]` across which `f` changes sign, the
//! solver repeatedly evaluates `f` at the midpoint and keeps the half of the
//! bracket that still contains the sign change.
//!
//! Convergence is judged by the relative approximate error between successive
//! estimates, in percent:
//!
//! ```text
//! rel_error = |(x_new - x_old) / (x_new + 1e-20)| * 100
//! ```
//!
//! The first estimate is compared against `xmin`. The small constant keeps the
//! ratio finite when the estimate is exactly zero. Iteration stops once the
//! error is at or below [`Config::tolerance`] or after [`Config::max_iters`]
//! steps. A midpoint where `f` is exactly zero sets the error to zero, which
//! ends the loop at its next check.
//!
//! # Edge cases
//!
//! - If `f(xmin)` and `f(xmax)` share a strict sign, no root is guaranteed and
//!   the solver returns [`Error::NoSignChange`] without iterating.
//! - If `f` is exactly zero at an endpoint, that endpoint is returned with
//!   zero iterations, zero error and [`Status::ExactEndpoint`].
//! - Reaching the iteration cap is not an error. The last estimate is
//!   returned with [`Status::MaxIters`] and the observer receives
//!   [`Event::MaxItersReached`].
//!
//! # Observer Events
//!
//! - [`Event::Iteration`] after every bisection step
//! - [`Event::MaxItersReached`] when the cap ends the search early
//!
//! Observers can return [`Action::StopEarly`] from an iteration event to halt.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use crate::{function::Function, observe::Observer};

use bracket::{Bracket, Narrowing, Sign};

/// Keeps the relative error finite when an estimate is exactly zero.
const SMALL: f64 = 1e-20;

/// Relative error (percent) before the first iteration.
const INITIAL_REL_ERROR: f64 = 1000.0;

/// Finds a root of `f` in `bracket = [xmin, xmax]` using bisection.
///
/// The observer receives an [`Event`] after every step and a warning event if
/// the iteration cap is reached. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f` does not
/// change sign across the bracket, if `f` fails, or if `f` returns a
/// non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let [xmin, xmax] = bracket;
    for value in bracket {
        if !value.is_finite() {
            return Err(Error::NonFiniteBracket { value });
        }
    }

    let f_xmin = evaluate(f, xmin)?;
    let f_xmax = evaluate(f, xmax)?;
    let xmin_sign = Sign::of(f_xmin);
    let xmax_sign = Sign::of(f_xmax);

    if xmin_sign.product(xmax_sign) == Sign::Positive {
        return Err(Error::NoSignChange {
            xmin,
            xmax,
            f_xmin,
            f_xmax,
        });
    }
    if xmin_sign == Sign::Zero {
        return Ok(Solution::exact_endpoint(xmin));
    }
    if xmax_sign == Sign::Zero {
        return Ok(Solution::exact_endpoint(xmax));
    }

    let mut bracket = Bracket::new(xmin, xmax);
    let mut estimate = xmin;
    let mut rel_error = INITIAL_REL_ERROR;
    let mut iters = 0;
    let mut stopped = false;

    while rel_error > config.tolerance && iters < config.max_iters {
        iters += 1;

        let previous = estimate;
        let searched = bracket.as_array();
        estimate = bracket.midpoint();
        rel_error = relative_error(estimate, previous);

        let lower_value = evaluate(f, bracket.lower())?;
        let value = evaluate(f, estimate)?;
        let narrowing = bracket.narrow(estimate, Sign::of(lower_value), Sign::of(value));
        if narrowing == Narrowing::ExactRoot {
            rel_error = 0.0;
        }

        let event = Event::Iteration {
            iter: iters,
            estimate,
            value,
            bracket: &searched,
            rel_error,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            stopped = true;
            break;
        }
    }

    let value = evaluate(f, estimate)?;

    let status = if stopped {
        Status::StoppedByObserver
    } else if rel_error > config.tolerance {
        let warning = Event::MaxItersReached {
            iters,
            rel_error,
            tolerance: config.tolerance,
        };
        // No action applies once the search is over.
        let _ = observer.observe(&warning);
        Status::MaxIters
    } else {
        Status::Converged
    };

    Ok(Solution {
        status,
        root: estimate,
        value,
        rel_error,
        iters,
    })
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
/// Check [`Solution::status`] to tell a converged result from one cut off
/// by the iteration cap.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f` does not
/// change sign across the bracket, if `f` fails, or if `f` returns a
/// non-finite value.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

/// Evaluates `f` at `x`, rejecting failures and non-finite values.
fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f.call(x).map_err(|e| Error::Function(Box::new(e)))?;
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }
    Ok(value)
}

/// Relative approximate error between successive estimates, in percent.
fn relative_error(current: f64, previous: f64) -> f64 {
    ((current - previous) / (current + SMALL)).abs() * 100.0
}
