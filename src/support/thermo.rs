//! Thermodynamic relations shared by the cycle models.
//!
//! - [`ideal_gas_eos`]: the ideal gas equation of state, `p·v = R·T`.
//! - [`isentropic`]: closed-form isentropic relations for a calorically
//!   perfect gas with ratio of specific heats `γ`.

pub mod ideal_gas_eos;
pub mod isentropic;
