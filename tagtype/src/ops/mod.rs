//! Core operations.
//!
//! This module contains the business logic for tagtype commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod config;
pub mod generate;

pub use check::check;
pub use config::ConfigOverrides;
pub use generate::{GenerateOptions, generate};
