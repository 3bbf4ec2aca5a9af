//! Isentropic relations for a calorically perfect gas.
//!
//! For a reversible adiabatic process between specific volumes `v_a` and
//! `v_b` with volume ratio `r = v_a / v_b`:
//!
//! - `T_b = T_a · r^(γ−1)`
//! - `p_b = p_a · r^γ`
//!
//! Compression uses `r > 1`; expansion over the same volumes is the inverse,
//! equivalent to `1/r`. The functions here take the volume ratio as
//! `v_before / v_after` and perform no validation.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Temperature after an isentropic change with volume ratio `v_before / v_after`.
#[must_use]
pub fn temperature(
    temperature: ThermodynamicTemperature,
    volume_ratio: f64,
    gamma: f64,
) -> ThermodynamicTemperature {
    temperature * volume_ratio.powf(gamma - 1.0)
}

/// Pressure after an isentropic change with volume ratio `v_before / v_after`.
#[must_use]
pub fn pressure(pressure: Pressure, volume_ratio: f64, gamma: f64) -> Pressure {
    pressure * volume_ratio.powf(gamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

    #[test]
    fn compression_raises_temperature_and_pressure() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let p = Pressure::new::<pascal>(101_325.0);

        let t_2 = temperature(t, 6.0, 1.4);
        let p_2 = pressure(p, 6.0, 1.4);

        assert_relative_eq!(t_2.get::<kelvin>(), 300.0 * 6.0_f64.powf(0.4));
        assert_relative_eq!(p_2.get::<pascal>(), 101_325.0 * 6.0_f64.powf(1.4));
    }

    #[test]
    fn expansion_undoes_compression() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let p = Pressure::new::<pascal>(101_325.0);

        let t_back = temperature(temperature(t, 8.0, 1.3), 1.0 / 8.0, 1.3);
        let p_back = pressure(pressure(p, 8.0, 1.3), 1.0 / 8.0, 1.3);

        assert_relative_eq!(t_back.get::<kelvin>(), 300.0, max_relative = 1e-12);
        assert_relative_eq!(p_back.get::<pascal>(), 101_325.0, max_relative = 1e-12);
    }

    #[test]
    fn unit_volume_ratio_is_identity() {
        let t = ThermodynamicTemperature::new::<kelvin>(2400.0);
        assert_eq!(temperature(t, 1.0, 1.4), t);
    }
}
