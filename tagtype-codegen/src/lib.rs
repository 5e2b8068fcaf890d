//! Shared code generation utilities for tagtype.
//!
//! This crate provides the language-agnostic primitives that the
//! declaration generator (`tagtype-codegen-dts`) renders through.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
