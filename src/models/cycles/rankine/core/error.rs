use thiserror::Error;
use uom::si::f64::Pressure;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating a Rankine cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankineError {
    /// The boiler pressure is not a positive number.
    #[error("boiler pressure must be positive: P={pressure:?}")]
    BoilerPressure {
        pressure: Pressure,
        #[source]
        source: ConstraintError,
    },

    /// The boiler pressure is outside the range the correlations cover.
    #[error("boiler pressure {pressure:?} outside supported range [{min:?}, {max:?}]")]
    BoilerPressureOutOfRange {
        pressure: Pressure,
        min: Pressure,
        max: Pressure,
    },

    /// The boiler pressure does not exceed the condenser pressure.
    #[error("boiler pressure {pressure:?} must exceed condenser pressure {condenser:?}")]
    BelowCondenserPressure {
        pressure: Pressure,
        condenser: Pressure,
    },

    /// A derived quantity needed as a divisor is zero or not finite.
    #[error("cycle is not computable: {context}")]
    NotComputable { context: String },
}
