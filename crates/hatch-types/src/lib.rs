//! Foundation types for hatch.
//!
//! This crate contains the host-agnostic core types shared by all hatch
//! crates: input events, transcript entries, and error types.

pub mod error;
pub mod input;
pub mod transcript;
