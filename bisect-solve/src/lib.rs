//! Bracketed bisection root finding for scalar functions.
//!
//! Pass a closure (or any [`Function`]) together with a bracket `[xmin, xmax]`
//! across which it changes sign:
//!
//! ```
//! use bisect_solve::bisection::{self, Config, Status};
//!
//! let f = |x: f64| x * x - 4.0;
//! let solution = bisection::solve_unobserved(&f, [0.0, 5.0], &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.root - 2.0).abs() < 1e-5);
//! # Ok::<(), bisection::Error>(())
//! ```
//!
//! Extra parameters are bound by capturing them in the closure, and closure
//! arguments need an explicit `f64` annotation.
//!
//! Diagnostics such as the iteration cap warning are delivered to an
//! [`Observer`] rather than printed.

pub mod bisection;
mod function;
mod observe;

pub use function::Function;
pub use observe::Observer;
