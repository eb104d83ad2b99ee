/// Actions an observer can take during bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the current estimate.
    ///
    /// The function is still evaluated at the estimate before returning,
    /// and the solution is marked [`Status::StoppedByObserver`].
    ///
    /// Ignored when returned for [`Event::MaxItersReached`].
    ///
    /// [`Status::StoppedByObserver`]: super::Status::StoppedByObserver
    /// [`Event::MaxItersReached`]: super::Event::MaxItersReached
    StopEarly,
}
