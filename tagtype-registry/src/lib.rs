//! Component registry and build configuration for tagtype.
//!
//! The registry is the hand-off point from metadata extraction: a JSON map
//! from source-file identity to the component declared there (or `null`).
//! The build configuration is read from `tagtype.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod component;
mod config;
mod error;
mod registry;

pub use component::{
    AttributeType, ComponentDescriptor, LocationKind, MemberDescriptor, MemberKind, TypeReference,
};
pub use config::{BuildConfig, BuildConfigFile, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use registry::ComponentRegistry;
