//! Air-standard Otto cycle model.
//!
//! [`OttoCycle`] evaluates the ideal constant-volume cycle of a
//! spark-ignition engine. The working gas is set once at construction
//! through its specific gas constant. Everything else arrives per call in
//! an [`OttoInput`].
//!
//! # Example
//!
//! ```
//! use twine_cycles::models::cycles::otto::{OttoCycle, OttoInput};
//! use twine_core::Model;
//! use uom::si::{pressure::bar, ratio::percent};
//!
//! let engine = OttoCycle::air();
//! let results = engine.call(&OttoInput::default().with_compression_ratio(8.0)).unwrap();
//!
//! assert!((results.eta.get::<percent>() - 56.47).abs() < 0.01);
//! assert!(results.mep.get::<bar>() > 9.0);
//! ```

mod core;

pub use self::core::{OttoError, OttoInput, OttoResults, OttoState, ideal_efficiency};

use twine_core::Model;
use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    units::SpecificGasConstant,
};

/// Ideal Otto cycle for a calorically perfect gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OttoCycle {
    gas_constant: SpecificGasConstant,
}

impl OttoCycle {
    /// Specific gas constant of dry air used by [`OttoCycle::air`], J/(kg·K).
    pub const AIR_GAS_CONSTANT: f64 = 287.0;

    /// Creates a cycle whose working gas is air.
    #[must_use]
    pub fn air() -> Self {
        Self {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
                Self::AIR_GAS_CONSTANT,
            ),
        }
    }

    /// Creates a cycle for a gas with the given specific gas constant.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the gas constant is not strictly positive.
    pub fn new(gas_constant: SpecificGasConstant) -> Result<Self, ConstraintError> {
        let gas_constant = StrictlyPositive::new(gas_constant.get::<joule_per_kilogram_kelvin>())?;
        Ok(Self {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
                gas_constant.into_inner(),
            ),
        })
    }

    /// Returns the specific gas constant of the working gas.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }

    /// Evaluates the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`OttoError`] if the input is outside the physical domain of
    /// the cycle. See the variants for the individual checks.
    pub fn evaluate(&self, input: &OttoInput) -> Result<OttoResults, OttoError> {
        core::evaluate(self.gas_constant, input)
    }
}

impl Default for OttoCycle {
    fn default() -> Self {
        Self::air()
    }
}

impl Model for OttoCycle {
    type Input = OttoInput;
    type Output = OttoResults;
    type Error = OttoError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    #[test]
    fn model_call_matches_evaluate() {
        let cycle = OttoCycle::default();
        let input = OttoInput::default().with_compression_ratio(10.0);

        assert_eq!(cycle.call(&input), cycle.evaluate(&input));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cycle = OttoCycle::air();
        let input = OttoInput::default();

        let first = cycle.call(&input).unwrap();
        let second = cycle.call(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn gas_constant_must_be_positive() {
        let zero = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(0.0);
        assert_eq!(OttoCycle::new(zero), Err(ConstraintError::Zero));

        let helium = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(2077.0);
        let cycle = OttoCycle::new(helium).unwrap();
        assert_relative_eq!(
            cycle.gas_constant().get::<joule_per_kilogram_kelvin>(),
            2077.0
        );
    }

    #[test]
    fn efficiency_is_independent_of_gas_constant() {
        let input = OttoInput::default().with_gamma(1.67);
        let helium = OttoCycle::new(SpecificGasConstant::new::<joule_per_kilogram_kelvin>(2077.0))
            .unwrap()
            .evaluate(&input)
            .unwrap();
        let air = OttoCycle::air().evaluate(&input).unwrap();

        assert_relative_eq!(
            helium.eta.get::<ratio>(),
            air.eta.get::<ratio>(),
            epsilon = 1e-12
        );
        assert!(helium.w_net > air.w_net);
    }

    #[test]
    fn report_uses_engine_units() {
        let report = OttoCycle::air()
            .evaluate(&OttoInput::default())
            .unwrap()
            .to_string();

        assert!(report.starts_with("Compression ratio (r): 6\n"));
        assert!(report.contains("T1 = 300.00 K,  P1 = 1.013 bar"));
        assert!(report.contains("T3 = 2400.00 K,  P3 = 48.636 bar"));
        assert!(report.contains("Thermal efficiency (energy): 51.16 %"));
        assert!(report.contains("Theoretical efficiency: 51.16 %"));
        assert!(report.ends_with("Mean effective pressure (MEP): 9.257 bar"));
    }
}
