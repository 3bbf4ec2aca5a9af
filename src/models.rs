//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the cycle calculation lives. The model type exposes that
//! calculation twice: as an inherent `evaluate` method, and as a
//! [`twine_core::Model`] implementation whose `call` is a thin adapter over
//! `evaluate`. The adapter is what lets a cycle be driven by
//! [`support::sweep`](crate::support::sweep) or any other Twine tooling.

pub mod cycles;
