/// Control actions supported by the iteration drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the result so far.
    StopEarly,
}

/// Indicates how an iteration driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested iterations.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}
