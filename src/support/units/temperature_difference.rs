use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] yields
/// another absolute temperature, which is the wrong quantity for heat terms
/// like `cv·(T3 − T2)`. [`minus`](Self::minus) returns a
/// [`TemperatureInterval`] instead.
///
/// See [#380](https://github.com/iliekturtles/uom/issues/380) for background.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::units::SpecificEnergy;
    use uom::si::available_energy::kilojoule_per_kilogram;

    #[test]
    fn superheat_above_saturation() {
        let t_high = ThermodynamicTemperature::new::<degree_celsius>(400.0);
        let t_sat = ThermodynamicTemperature::new::<abs_kelvin>(473.15);

        assert_relative_eq!(t_high.minus(t_sat).get::<delta_kelvin>(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(t_sat.minus(t_high).get::<delta_kelvin>(), -200.0, epsilon = 1e-9);
    }

    #[test]
    fn heat_from_interval() {
        let cv = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(717.5);
        let t2 = ThermodynamicTemperature::new::<abs_kelvin>(600.0);
        let t3 = ThermodynamicTemperature::new::<abs_kelvin>(2400.0);

        let q: SpecificEnergy = cv * t3.minus(t2);
        assert_relative_eq!(q.get::<kilojoule_per_kilogram>(), 1291.5, max_relative = 1e-12);
    }
}
