//! Core utilities and types for the tagtype declaration generator.
//!
//! This crate provides the host-environment collaborators used across
//! the tagtype workspace: lexical path operations, case conversion and
//! the writer that persists generated artifacts.

mod file;
mod paths;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Path utilities
pub use paths::{PathError, PathOps, PosixPaths};
// String utilities
pub use utils::{strip_ts_extension, to_pascal_case};
