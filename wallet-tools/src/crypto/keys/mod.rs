//! Key derivation and management
//!
//! This module provides functionality for deriving and managing keys for
//! the two supported chain families.

pub mod evm;
pub mod cosmos;
mod derivation;

pub use derivation::*;
