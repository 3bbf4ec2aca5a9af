use twine_core::Model;

/// Events emitted by a sweep, one per input.
pub enum Event<'a, M>
where
    M: Model,
{
    /// Successful evaluation of a sweep point.
    Evaluated {
        /// Position of the input in the sweep.
        index: usize,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// Position of the input in the sweep.
        index: usize,

        /// The model input that failed.
        input: &'a M::Input,

        /// The model error.
        error: &'a M::Error,
    },
}

impl<'a, M> Event<'a, M>
where
    M: Model,
{
    /// Returns the position of the input in the sweep.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Evaluated { index, .. } | Self::ModelFailed { index, .. } => *index,
        }
    }

    /// Returns the input that was evaluated (or attempted).
    #[must_use]
    pub fn input(&self) -> &'a M::Input {
        match self {
            Self::Evaluated { input, .. } | Self::ModelFailed { input, .. } => *input,
        }
    }
}
