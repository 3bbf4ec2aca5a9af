//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state in its specific
//! volume form, `p·v = R·T`.

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::SpecificGasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub fn pressure(
    temperature: ThermodynamicTemperature,
    specific_volume: SpecificVolume,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    gas_constant * temperature / specific_volume
}

/// Computes specific volume using the ideal gas equation of state.
#[must_use]
pub fn specific_volume(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> SpecificVolume {
    gas_constant * temperature / pressure
}
