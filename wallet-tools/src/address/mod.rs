//! Address utilities

pub mod convert;

pub use convert::*;
