use thiserror::Error;
use uom::si::{
    available_energy::{joule_per_kilogram, kilojoule_per_kilogram},
    f64::{MassRate, Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    pressure::{kilopascal, pascal},
    specific_heat_capacity::{joule_per_kilogram_kelvin, kilojoule_per_kilogram_kelvin},
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive, UnitIntervalOpen},
    units::SpecificEnthalpy,
};

/// Error returned when a [`RankineParameters`] constant is out of bounds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankineParametersError {
    /// Steam mass flow rate is not strictly positive.
    #[error("invalid mass flow rate: {mass_flow_rate:?}")]
    MassFlowRate { mass_flow_rate: MassRate },

    /// Condenser pressure is not strictly positive.
    #[error("invalid condenser pressure: {condenser_pressure:?}")]
    CondenserPressure { condenser_pressure: Pressure },

    /// Turbine inlet temperature is not strictly positive.
    #[error("invalid superheat temperature: {superheat_temperature:?}")]
    SuperheatTemperature {
        superheat_temperature: ThermodynamicTemperature,
    },

    /// Liquid heat capacity is not strictly positive.
    #[error("invalid liquid cp: {liquid_cp:?}")]
    LiquidCp { liquid_cp: SpecificHeatCapacity },

    /// Condensate enthalpy is not finite.
    #[error("condensate enthalpy must be finite: {condensate_enthalpy:?}")]
    CondensateEnthalpy {
        condensate_enthalpy: SpecificEnthalpy,
    },

    /// Reference vapor enthalpy is not finite.
    #[error("vapor enthalpy reference must be finite: {vapor_enthalpy_reference:?}")]
    VaporEnthalpyReference {
        vapor_enthalpy_reference: SpecificEnthalpy,
    },

    /// Vapor enthalpy slope is not finite.
    #[error("vapor enthalpy slope must be finite: {vapor_enthalpy_slope:?}")]
    VaporEnthalpySlope {
        vapor_enthalpy_slope: SpecificVolume,
    },

    /// Pumped liquid specific volume is not strictly positive.
    #[error("invalid liquid specific volume: {liquid_specific_volume:?}")]
    LiquidSpecificVolume {
        liquid_specific_volume: SpecificVolume,
    },

    /// Vapor correlation reference pressure is not strictly positive.
    #[error("invalid vapor reference pressure: {vapor_reference_pressure:?}")]
    VaporReferencePressure { vapor_reference_pressure: Pressure },

    /// Saturation reference temperature is not strictly positive.
    #[error("invalid saturation reference temperature: {saturation_reference_temperature:?}")]
    SaturationReferenceTemperature {
        saturation_reference_temperature: ThermodynamicTemperature,
    },

    /// Superheat scale is not strictly positive and finite.
    #[error("superheat scale must be positive and finite: {superheat_scale}")]
    SuperheatScale { superheat_scale: f64 },

    /// Turbine drop fraction lies outside `(0, 1)`.
    #[error("turbine drop fraction must lie in (0, 1): {turbine_drop_fraction}")]
    TurbineDropFraction { turbine_drop_fraction: f64 },

    /// Latent heat reference is not strictly positive.
    #[error("invalid latent heat reference: {latent_heat_reference:?}")]
    LatentHeatReference {
        latent_heat_reference: SpecificEnthalpy,
    },

    /// Boiler range is inverted or does not sit above the condenser pressure.
    #[error(
        "boiler pressure range must be ordered and above the condenser: min={min:?}, max={max:?}, condenser={condenser:?}"
    )]
    BoilerPressureRange {
        min: Pressure,
        max: Pressure,
        condenser: Pressure,
    },
}

/// Empirical constants of the approximate Rankine cycle.
///
/// The defaults describe a small steam plant with a 50 kPa condenser,
/// 400 °C turbine inlet and 48 kg/s of steam. The vapor enthalpy
/// correlation is linear in boiler pressure around a 3 MPa reference point:
///
/// ```text
/// h_g = vapor_enthalpy_reference + vapor_enthalpy_slope · (P − vapor_reference_pressure)
/// h_3 = h_g + superheat_scale · liquid_cp · (superheat_temperature − saturation_reference_temperature)
/// ```
///
/// These are curve-fit values, not steam table data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankineParameters {
    pub mass_flow_rate: MassRate,
    pub condenser_pressure: Pressure,
    pub superheat_temperature: ThermodynamicTemperature,
    pub liquid_cp: SpecificHeatCapacity,

    /// Enthalpy of saturated liquid leaving the condenser, `h1`.
    pub condensate_enthalpy: SpecificEnthalpy,

    /// Specific volume of the pumped liquid, taken as constant.
    pub liquid_specific_volume: SpecificVolume,

    pub vapor_enthalpy_reference: SpecificEnthalpy,
    pub vapor_reference_pressure: Pressure,

    /// Slope of vapor enthalpy with boiler pressure; (kJ/kg)/kPa is m³/kg.
    pub vapor_enthalpy_slope: SpecificVolume,

    pub saturation_reference_temperature: ThermodynamicTemperature,
    pub superheat_scale: f64,

    /// Share of the `h3 − h1` span the turbine extracts as work.
    pub turbine_drop_fraction: f64,

    /// Latent heat of vaporization at 100 °C, used for exhaust quality.
    pub latent_heat_reference: SpecificEnthalpy,

    pub min_boiler_pressure: Pressure,
    pub max_boiler_pressure: Pressure,
}

impl Default for RankineParameters {
    fn default() -> Self {
        Self {
            mass_flow_rate: MassRate::new::<kilogram_per_second>(48.0),
            condenser_pressure: Pressure::new::<kilopascal>(50.0),
            superheat_temperature: ThermodynamicTemperature::new::<kelvin>(673.15),
            liquid_cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
            condensate_enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(340.0),
            liquid_specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(0.001),
            vapor_enthalpy_reference: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2800.0),
            vapor_reference_pressure: Pressure::new::<kilopascal>(3000.0),
            vapor_enthalpy_slope: SpecificVolume::new::<cubic_meter_per_kilogram>(0.01),
            saturation_reference_temperature: ThermodynamicTemperature::new::<kelvin>(473.15),
            superheat_scale: 0.1,
            turbine_drop_fraction: 0.25,
            latent_heat_reference: SpecificEnthalpy::new::<kilojoule_per_kilogram>(2257.0),
            min_boiler_pressure: Pressure::new::<kilopascal>(1000.0),
            max_boiler_pressure: Pressure::new::<kilopascal>(10_000.0),
        }
    }
}

impl RankineParameters {
    /// Returns a copy with the given mass flow rate.
    #[must_use]
    pub fn with_mass_flow_rate(mut self, mass_flow_rate: MassRate) -> Self {
        self.mass_flow_rate = mass_flow_rate;
        self
    }

    /// Returns a copy with the given condenser pressure.
    #[must_use]
    pub fn with_condenser_pressure(mut self, condenser_pressure: Pressure) -> Self {
        self.condenser_pressure = condenser_pressure;
        self
    }

    /// Returns a copy with the given turbine inlet temperature.
    #[must_use]
    pub fn with_superheat_temperature(
        mut self,
        superheat_temperature: ThermodynamicTemperature,
    ) -> Self {
        self.superheat_temperature = superheat_temperature;
        self
    }

    /// Returns a copy with the given boiler pressure range.
    #[must_use]
    pub fn with_boiler_pressure_range(mut self, min: Pressure, max: Pressure) -> Self {
        self.min_boiler_pressure = min;
        self.max_boiler_pressure = max;
        self
    }

    /// Checks every constant against its physical bound.
    ///
    /// Reference enthalpies and the vapor slope may be any finite value.
    /// Everything else must be strictly positive, the drop fraction must lie
    /// in the open unit interval and the boiler range must sit above the
    /// condenser pressure.
    pub(crate) fn validate(&self) -> Result<(), RankineParametersError> {
        if StrictlyPositive::check(&self.mass_flow_rate.get::<kilogram_per_second>()).is_err() {
            return Err(RankineParametersError::MassFlowRate {
                mass_flow_rate: self.mass_flow_rate,
            });
        }

        let condenser = self.condenser_pressure;
        if StrictlyPositive::check(&condenser.get::<pascal>()).is_err() {
            return Err(RankineParametersError::CondenserPressure {
                condenser_pressure: condenser,
            });
        }

        if StrictlyPositive::check(&self.superheat_temperature.get::<kelvin>()).is_err() {
            return Err(RankineParametersError::SuperheatTemperature {
                superheat_temperature: self.superheat_temperature,
            });
        }

        if StrictlyPositive::check(&self.liquid_cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(RankineParametersError::LiquidCp {
                liquid_cp: self.liquid_cp,
            });
        }

        if !self.condensate_enthalpy.is_finite() {
            return Err(RankineParametersError::CondensateEnthalpy {
                condensate_enthalpy: self.condensate_enthalpy,
            });
        }

        if !self.vapor_enthalpy_reference.is_finite() {
            return Err(RankineParametersError::VaporEnthalpyReference {
                vapor_enthalpy_reference: self.vapor_enthalpy_reference,
            });
        }

        if !self.vapor_enthalpy_slope.is_finite() {
            return Err(RankineParametersError::VaporEnthalpySlope {
                vapor_enthalpy_slope: self.vapor_enthalpy_slope,
            });
        }

        if StrictlyPositive::check(
            &self
                .liquid_specific_volume
                .get::<cubic_meter_per_kilogram>(),
        )
        .is_err()
        {
            return Err(RankineParametersError::LiquidSpecificVolume {
                liquid_specific_volume: self.liquid_specific_volume,
            });
        }

        if StrictlyPositive::check(&self.vapor_reference_pressure.get::<pascal>()).is_err() {
            return Err(RankineParametersError::VaporReferencePressure {
                vapor_reference_pressure: self.vapor_reference_pressure,
            });
        }

        if StrictlyPositive::check(&self.saturation_reference_temperature.get::<kelvin>()).is_err()
        {
            return Err(RankineParametersError::SaturationReferenceTemperature {
                saturation_reference_temperature: self.saturation_reference_temperature,
            });
        }

        if StrictlyPositive::check(&self.superheat_scale).is_err()
            || !self.superheat_scale.is_finite()
        {
            return Err(RankineParametersError::SuperheatScale {
                superheat_scale: self.superheat_scale,
            });
        }

        if UnitIntervalOpen::check(&self.turbine_drop_fraction).is_err() {
            return Err(RankineParametersError::TurbineDropFraction {
                turbine_drop_fraction: self.turbine_drop_fraction,
            });
        }

        if StrictlyPositive::check(&self.latent_heat_reference.get::<joule_per_kilogram>())
            .is_err()
        {
            return Err(RankineParametersError::LatentHeatReference {
                latent_heat_reference: self.latent_heat_reference,
            });
        }

        let (min, max) = (self.min_boiler_pressure, self.max_boiler_pressure);
        if !(min > condenser && max >= min) {
            return Err(RankineParametersError::BoilerPressureRange {
                min,
                max,
                condenser,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RankineParameters::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_flow() {
        let params = RankineParameters::default()
            .with_mass_flow_rate(MassRate::new::<kilogram_per_second>(0.0));
        assert!(matches!(
            params.validate(),
            Err(RankineParametersError::MassFlowRate { .. })
        ));
    }

    #[test]
    fn rejects_drop_fraction_outside_unit_interval() {
        for fraction in [0.0, 1.0, 1.5, f64::NAN] {
            let params = RankineParameters {
                turbine_drop_fraction: fraction,
                ..RankineParameters::default()
            };
            assert!(matches!(
                params.validate(),
                Err(RankineParametersError::TurbineDropFraction { .. })
            ));
        }
    }

    #[test]
    fn rejects_boiler_range_at_or_below_condenser() {
        let params = RankineParameters::default().with_boiler_pressure_range(
            Pressure::new::<kilopascal>(50.0),
            Pressure::new::<kilopascal>(5000.0),
        );
        assert!(matches!(
            params.validate(),
            Err(RankineParametersError::BoilerPressureRange { .. })
        ));

        let inverted = RankineParameters::default().with_boiler_pressure_range(
            Pressure::new::<kilopascal>(8000.0),
            Pressure::new::<kilopascal>(2000.0),
        );
        assert!(matches!(
            inverted.validate(),
            Err(RankineParametersError::BoilerPressureRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_reference_enthalpy() {
        let params = RankineParameters {
            vapor_enthalpy_reference: SpecificEnthalpy::new::<kilojoule_per_kilogram>(f64::NAN),
            ..RankineParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RankineParametersError::VaporEnthalpyReference { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_superheat_scale() {
        let params = RankineParameters {
            superheat_scale: f64::INFINITY,
            ..RankineParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RankineParametersError::SuperheatScale { .. })
        ));
    }
}
