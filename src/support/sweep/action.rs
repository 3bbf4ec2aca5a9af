/// Actions an observer can take during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep and return the points collected so far.
    ///
    /// A successful evaluation that triggers the stop is kept.
    StopEarly,

    /// Drop the current point and continue with the next input.
    ///
    /// For [`Event::ModelFailed`](super::Event::ModelFailed) this recovers
    /// from the failure instead of ending the sweep with an error.
    Skip,
}
