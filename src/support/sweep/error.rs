use thiserror::Error;

/// A model evaluation failed during a sweep.
#[derive(Debug, Error)]
#[error("model failed at sweep point {index}")]
pub struct SweepError<E> {
    /// Position of the failing input in the sweep.
    pub index: usize,

    /// The model error.
    pub source: E,
}

impl<E> SweepError<E> {
    pub(super) fn new(index: usize, source: E) -> Self {
        Self { index, source }
    }
}
