//! # Twine Cycles
//!
//! Ideal thermodynamic power cycle models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Two cycles are provided:
//!
//! - [`OttoCycle`](models::cycles::otto::OttoCycle): the air-standard Otto
//!   cycle of a spark-ignition engine.
//! - [`RankineCycle`](models::cycles::rankine::RankineCycle): an approximate
//!   Rankine cycle of a steam power plant, built on empirical enthalpy
//!   correlations rather than steam tables.
//!
//! Both are closed-form: each evaluation maps one input to a complete set of
//! state points and performance metrics, with no iteration and no hidden state.
//!
//! ## Crate layout
//!
//! - [`models`]: Cycle models implementing [`twine_core::Model`].
//! - [`support`]: Supporting utilities used by models (constraints, units, sweeps).
//!
//! ## Example
//!
//! ```
//! use twine_cycles::models::cycles::otto::{OttoCycle, OttoInput};
//! use uom::si::ratio::percent;
//!
//! let results = OttoCycle::air().evaluate(&OttoInput::default()).unwrap();
//! assert!((results.eta_theory.get::<percent>() - 51.16).abs() < 0.01);
//! ```

pub mod models;
pub mod support;
