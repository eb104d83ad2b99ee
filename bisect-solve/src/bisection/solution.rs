/// How the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// One of the bracket endpoints is an exact root.
    ///
    /// No iterations were performed and the error is reported as zero.
    ExactEndpoint,

    /// The relative error fell to or below the tolerance,
    /// or a midpoint landed exactly on a root.
    Converged,

    /// Reached the iteration limit without meeting the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub root: f64,

    /// Function value at the root estimate.
    pub value: f64,

    /// Relative approximate error in percent.
    pub rel_error: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the solution satisfies the tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, Status::ExactEndpoint | Status::Converged)
    }

    /// Returns `(root, value, rel_error, iters)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, f64, f64, usize) {
        (self.root, self.value, self.rel_error, self.iters)
    }

    /// Solution for a bracket endpoint where the function is exactly zero.
    pub(super) fn exact_endpoint(root: f64) -> Self {
        Self {
            status: Status::ExactEndpoint,
            root,
            value: 0.0,
            rel_error: 0.0,
            iters: 0,
        }
    }
}
