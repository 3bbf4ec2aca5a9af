//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities (SI, `f64`).
//! This module adds the aliases and helpers the cycle models need that
//! [`uom`] does not provide directly.
//!
//! ## Specific energy terms
//!
//! Enthalpies, heat transfers and work per unit mass all share the
//! dimension J/kg. [`SpecificEnthalpy`] names state properties and
//! [`SpecificEnergy`] names process quantities (`q_in`, `w_net`, ...), so
//! signatures say which one they mean.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait subtracts one absolute temperature
//! from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_cycles::support::units::TemperatureDifference;
//!
//! let t3 = ThermodynamicTemperature::new::<kelvin>(2400.0);
//! let t2 = ThermodynamicTemperature::new::<kelvin>(614.3);
//! let heating = t3.minus(t2);
//! // heating is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnergy, SpecificEnthalpy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
