/// Events emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A bisection step completed.
    Iteration {
        /// Iteration counter (1-based).
        iter: usize,

        /// Midpoint estimate computed in this step.
        estimate: f64,

        /// Function value at the estimate.
        value: f64,

        /// Bracket `[lower, upper]` the estimate was taken from.
        bracket: &'a [f64; 2],

        /// Relative approximate error in percent after this step.
        rel_error: f64,
    },

    /// The iteration cap was reached before the tolerance was met.
    ///
    /// This is a warning: the solver still returns its last estimate,
    /// but the tolerance criterion may not hold.
    MaxItersReached {
        /// Iterations performed.
        iters: usize,

        /// Relative approximate error in percent at exit.
        rel_error: f64,

        /// The tolerance that was not met.
        tolerance: f64,
    },
}

impl Event<'_> {
    /// Returns the iteration count associated with this event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Iteration { iter, .. } => *iter,
            Self::MaxItersReached { iters, .. } => *iters,
        }
    }

    /// Returns the relative approximate error carried by this event.
    #[must_use]
    pub fn rel_error(&self) -> f64 {
        match self {
            Self::Iteration { rel_error, .. } | Self::MaxItersReached { rel_error, .. } => {
                *rel_error
            }
        }
    }

    /// Returns true if this event is the iteration cap warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::MaxItersReached { .. })
    }
}
