//! Approximate Rankine cycle calculation.
//!
//! The loop is pump (1→2), boiler (2→3), turbine (3→4) and condenser (4→1).
//! No steam tables are consulted. Every enthalpy comes from a fixed
//! correlation in [`RankineParameters`]:
//!
//! - `h1`: constant condensate enthalpy
//! - `h2 = h1 + v_liquid · (P − P_condenser)`
//! - `h3`: linear vapor enthalpy in `P` plus a superheat correction
//! - `h4 = h3 − drop_fraction · (h3 − h1)`

mod error;
mod parameters;
mod results;

pub use error::RankineError;
pub use parameters::{RankineParameters, RankineParametersError};
pub use results::RankineResults;

use uom::{
    ConstZero,
    si::{
        available_energy::joule_per_kilogram,
        f64::{Pressure, Ratio},
        pressure::pascal,
        ratio::ratio,
    },
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{SpecificEnergy, TemperatureDifference},
};

/// Evaluates the cycle at the given boiler pressure.
///
/// `parameters` must already have passed [`RankineParameters::validate`].
pub(super) fn evaluate(
    parameters: &RankineParameters,
    boiler_pressure: Pressure,
) -> Result<RankineResults, RankineError> {
    StrictlyPositive::check(&boiler_pressure.get::<pascal>()).map_err(|source| {
        RankineError::BoilerPressure {
            pressure: boiler_pressure,
            source,
        }
    })?;

    let condenser = parameters.condenser_pressure;
    if boiler_pressure <= condenser {
        return Err(RankineError::BelowCondenserPressure {
            pressure: boiler_pressure,
            condenser,
        });
    }

    let (min, max) = (
        parameters.min_boiler_pressure,
        parameters.max_boiler_pressure,
    );
    if boiler_pressure < min || boiler_pressure > max {
        return Err(RankineError::BoilerPressureOutOfRange {
            pressure: boiler_pressure,
            min,
            max,
        });
    }

    // Pump
    let h1 = parameters.condensate_enthalpy;
    let pump_work: SpecificEnergy =
        parameters.liquid_specific_volume * (boiler_pressure - condenser);
    let h2 = h1 + pump_work;

    // Boiler
    let h_g = parameters.vapor_enthalpy_reference
        + parameters.vapor_enthalpy_slope * (boiler_pressure - parameters.vapor_reference_pressure);
    let superheat: SpecificEnergy = parameters.liquid_cp
        * parameters
            .superheat_temperature
            .minus(parameters.saturation_reference_temperature);
    let h3 = h_g + superheat * parameters.superheat_scale;

    // Turbine
    let h4 = h3 - (h3 - h1) * parameters.turbine_drop_fraction;

    let turbine_work = h3 - h4;
    let net_work = turbine_work - pump_work;
    let heat_added = h3 - h2;

    if !(heat_added > SpecificEnergy::ZERO) || !heat_added.is_finite() {
        return Err(RankineError::NotComputable {
            context: format!("heat added must be positive and finite, got {heat_added:?}"),
        });
    }

    let efficiency = net_work.get::<joule_per_kilogram>() / heat_added.get::<joule_per_kilogram>();
    let exhaust_quality = (h4 - h1).get::<joule_per_kilogram>()
        / parameters
            .latent_heat_reference
            .get::<joule_per_kilogram>();

    Ok(RankineResults {
        boiler_pressure,
        h1,
        h2,
        h3,
        h4,
        turbine_work,
        pump_work,
        net_work,
        heat_added,
        efficiency: Ratio::new::<ratio>(efficiency),
        net_power: net_work * parameters.mass_flow_rate,
        exhaust_quality: Ratio::new::<ratio>(exhaust_quality),
    })
}
