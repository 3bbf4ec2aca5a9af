use twine_core::Snapshot;

/// Indicates whether a sweep visited every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every input was evaluated.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a sweep.
#[derive(Debug, Clone)]
pub struct Sweep<I, O> {
    /// Final sweep status.
    pub status: Status,

    /// Collected input/output pairs, in input order.
    pub points: Vec<Snapshot<I, O>>,

    /// Positions of inputs dropped by the observer, in input order.
    pub skipped: Vec<usize>,
}

impl<I, O> Sweep<I, O> {
    pub(super) fn completed(points: Vec<Snapshot<I, O>>, skipped: Vec<usize>) -> Self {
        Self {
            status: Status::Completed,
            points,
            skipped,
        }
    }

    pub(super) fn stopped(points: Vec<Snapshot<I, O>>, skipped: Vec<usize>) -> Self {
        Self {
            status: Status::StoppedByObserver,
            points,
            skipped,
        }
    }

    /// Returns an iterator over the collected outputs.
    pub fn outputs(&self) -> impl Iterator<Item = &O> {
        self.points.iter().map(|snapshot| &snapshot.output)
    }
}
