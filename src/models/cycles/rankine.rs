//! Approximate Rankine cycle model.
//!
//! [`RankineCycle`] maps a boiler pressure to the state enthalpies and the
//! performance of a simple steam power plant. The empirical constants live
//! in [`RankineParameters`] and are checked once, when the cycle is built.
//!
//! The correlations are deliberately crude. They are kept as fitted
//! constants, so results differ from a steam-table calculation. In
//! particular, with the default constants net power rises with boiler
//! pressure while efficiency falls slightly.
//!
//! # Example
//!
//! ```
//! use twine_cycles::models::cycles::rankine::RankineCycle;
//! use uom::si::{f64::Pressure, power::megawatt, pressure::kilopascal, ratio::percent};
//!
//! let plant = RankineCycle::default();
//! let results = plant.evaluate(Pressure::new::<kilopascal>(3000.0)).unwrap();
//!
//! assert!((results.efficiency.get::<percent>() - 24.91).abs() < 0.01);
//! assert!((results.net_power.get::<megawatt>() - 30.38).abs() < 0.01);
//! ```

mod core;

pub use self::core::{RankineError, RankineParameters, RankineParametersError, RankineResults};

use twine_core::Model;
use uom::si::f64::Pressure;

/// Approximate Rankine cycle with validated constants.
///
/// The default uses [`RankineParameters::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankineCycle {
    parameters: RankineParameters,
}

impl RankineCycle {
    /// Creates a cycle from a parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`RankineParametersError`] naming the first constant that is
    /// out of its physical bounds.
    pub fn new(parameters: RankineParameters) -> Result<Self, RankineParametersError> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    /// Returns the parameters this cycle was built with.
    #[must_use]
    pub fn parameters(&self) -> &RankineParameters {
        &self.parameters
    }

    /// Evaluates the cycle at the given boiler pressure.
    ///
    /// # Errors
    ///
    /// Returns [`RankineError`] if the pressure is not positive, does not
    /// exceed the condenser pressure, lies outside the configured boiler
    /// range, or yields a non-positive heat input.
    pub fn evaluate(&self, boiler_pressure: Pressure) -> Result<RankineResults, RankineError> {
        core::evaluate(&self.parameters, boiler_pressure)
    }
}

impl Model for RankineCycle {
    type Input = Pressure;
    type Output = RankineResults;
    type Error = RankineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(*input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::MassRate, mass_rate::kilogram_per_second, power::megawatt, pressure::kilopascal,
    };

    #[test]
    fn model_call_matches_evaluate() {
        let plant = RankineCycle::default();
        let p = Pressure::new::<kilopascal>(4000.0);

        assert_eq!(plant.call(&p), plant.evaluate(p));
    }

    #[test]
    fn new_rejects_invalid_parameters() {
        let params = RankineParameters::default()
            .with_mass_flow_rate(MassRate::new::<kilogram_per_second>(-1.0));
        assert!(matches!(
            RankineCycle::new(params),
            Err(RankineParametersError::MassFlowRate { .. })
        ));
    }

    #[test]
    fn power_scales_with_mass_flow() {
        let p = Pressure::new::<kilopascal>(3000.0);
        let base = RankineCycle::default().evaluate(p).unwrap();

        let doubled = RankineCycle::new(
            RankineParameters::default()
                .with_mass_flow_rate(MassRate::new::<kilogram_per_second>(96.0)),
        )
        .unwrap()
        .evaluate(p)
        .unwrap();

        assert_relative_eq!(
            doubled.net_power.get::<megawatt>(),
            2.0 * base.net_power.get::<megawatt>(),
            max_relative = 1e-12
        );
        assert_eq!(doubled.efficiency, base.efficiency);
    }

    #[test]
    fn report_uses_plant_units() {
        let report = RankineCycle::default()
            .evaluate(Pressure::new::<kilopascal>(3000.0))
            .unwrap()
            .to_string();

        assert_eq!(
            report,
            "For Boiler Pressure = 3.0 MPa:\n  Thermal Efficiency = 24.91%\n  Net Power Output = 30.38 MW"
        );
    }
}
