use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating an Otto cycle.
///
/// Every input check runs before any state point is computed, so an error
/// never comes with partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OttoError {
    /// The intake temperature is not a positive absolute temperature.
    #[error("intake temperature T1 must be positive: T1={t1:?}")]
    IntakeTemperature {
        t1: ThermodynamicTemperature,
        #[source]
        source: ConstraintError,
    },

    /// The intake pressure is not positive.
    #[error("intake pressure P1 must be positive: P1={p1:?}")]
    IntakePressure {
        p1: Pressure,
        #[source]
        source: ConstraintError,
    },

    /// The compression ratio does not exceed one.
    #[error("compression ratio must exceed 1: r={r}")]
    CompressionRatio {
        r: f64,
        #[source]
        source: ConstraintError,
    },

    /// The ratio of specific heats does not exceed one.
    #[error("ratio of specific heats must exceed 1: gamma={gamma}")]
    HeatCapacityRatio {
        gamma: f64,
        #[source]
        source: ConstraintError,
    },

    /// The peak temperature does not exceed the end-of-compression temperature,
    /// so combustion would add no heat (or remove it).
    #[error("peak temperature T3 must exceed compressed temperature T2: T2={t2:?}, T3={t3:?}")]
    PeakTemperature {
        t2: ThermodynamicTemperature,
        t3: ThermodynamicTemperature,
    },

    /// A derived quantity needed as a divisor is zero or not finite.
    #[error("cycle is not computable: {context}")]
    NotComputable { context: String },
}
