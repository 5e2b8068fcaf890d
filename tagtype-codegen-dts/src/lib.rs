//! TypeScript declaration generator for tagtype.
//!
//! Turns a [`ComponentRegistry`](tagtype_registry::ComponentRegistry) into
//! a single `components.d.ts` document that types every custom element
//! for the DOM and JSX.
//!
//! # Usage
//!
//! ```ignore
//! use tagtype_codegen_dts::Generator;
//! use tagtype_registry::{BuildConfigFile, ComponentRegistry};
//!
//! let config = BuildConfigFile::open("tagtype.toml")?.into_config();
//! let registry = ComponentRegistry::from_file(&config.registry)?;
//!
//! let generated = Generator::new(&config, &registry).generate()?;
//! let (path, content) = generated.into_parts();
//! ```
//!
//! # Generated Output
//!
//! - a header comment
//! - one side-effect import per configured collection
//! - one import per source file that declares a referenced type
//! - a `declare global` block per component, in registry order

mod declaration;
mod declaration_file;
mod error;
mod generator;
mod resolver;
mod rewrite;

pub mod ast;

pub use declaration::{AttributeEntry, DeclarationBlock};
pub use declaration_file::DeclarationFile;
pub use error::GenerateError;
pub use generator::{GeneratedTypes, GenerationSummary, Generator, OUTPUT_FILE_NAME};
pub use resolver::{
    ImportBinding, ImportGroup, ReferenceResolver, ResolvedComponent, ResolverContext,
    module_specifier, relative_specifier,
};
pub use rewrite::rewrite_identifiers;
