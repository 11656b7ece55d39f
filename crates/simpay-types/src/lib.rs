//! Shared types, error type and the options adapter trait for Simple Pay.
//!
//! Adapter crates depend on this crate only, so storage backends compile
//! independently of the settings registry.

pub mod error;
pub mod options_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
