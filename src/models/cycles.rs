//! Ideal power cycle models.
//!
//! - [`otto`]: air-standard Otto cycle (spark-ignition engine).
//! - [`rankine`]: approximate Rankine cycle (steam power plant).
//!
//! Each evaluation is a single pass through a fixed four-point process
//! sequence. Inputs are validated before any state is computed, so a cycle
//! either yields a complete, consistent set of state points or an error.

pub mod otto;
pub mod rankine;
