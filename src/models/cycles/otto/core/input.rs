use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Boundary conditions of an air-standard Otto cycle.
///
/// The default is a naturally aspirated engine at sea level:
/// 300 K and 101 325 Pa at intake, compression ratio 6, a peak
/// post-combustion temperature of 2400 K and `γ = 1.4`.
///
/// Values are not checked until the cycle is evaluated.
///
/// # Example
///
/// ```
/// use twine_cycles::models::cycles::otto::OttoInput;
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
///
/// let input = OttoInput::default()
///     .with_compression_ratio(10.0)
///     .with_peak_temperature(ThermodynamicTemperature::new::<kelvin>(2200.0));
///
/// assert_eq!(input.compression_ratio, 10.0);
/// assert_eq!(input.gamma, 1.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OttoInput {
    /// Intake temperature, `T1`.
    pub intake_temperature: ThermodynamicTemperature,

    /// Intake pressure, `P1`.
    pub intake_pressure: Pressure,

    /// Compression ratio `r = v1 / v2`; must exceed one.
    pub compression_ratio: f64,

    /// Peak temperature after constant-volume heat addition, `T3`.
    ///
    /// Must exceed the end-of-compression temperature `T2`.
    pub peak_temperature: ThermodynamicTemperature,

    /// Ratio of specific heats `γ = cp / cv`; must exceed one.
    pub gamma: f64,
}

impl Default for OttoInput {
    fn default() -> Self {
        Self {
            intake_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            intake_pressure: Pressure::new::<pascal>(101_325.0),
            compression_ratio: 6.0,
            peak_temperature: ThermodynamicTemperature::new::<kelvin>(2400.0),
            gamma: 1.4,
        }
    }
}

impl OttoInput {
    /// Returns a copy with the given intake temperature.
    #[must_use]
    pub fn with_intake_temperature(self, intake_temperature: ThermodynamicTemperature) -> Self {
        Self {
            intake_temperature,
            ..self
        }
    }

    /// Returns a copy with the given intake pressure.
    #[must_use]
    pub fn with_intake_pressure(self, intake_pressure: Pressure) -> Self {
        Self {
            intake_pressure,
            ..self
        }
    }

    /// Returns a copy with the given compression ratio.
    #[must_use]
    pub fn with_compression_ratio(self, compression_ratio: f64) -> Self {
        Self {
            compression_ratio,
            ..self
        }
    }

    /// Returns a copy with the given peak temperature.
    #[must_use]
    pub fn with_peak_temperature(self, peak_temperature: ThermodynamicTemperature) -> Self {
        Self {
            peak_temperature,
            ..self
        }
    }

    /// Returns a copy with the given ratio of specific heats.
    #[must_use]
    pub fn with_gamma(self, gamma: f64) -> Self {
        Self { gamma, ..self }
    }
}
