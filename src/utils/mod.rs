//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation

pub mod code_generator;
