//! TypeScript declaration AST builders.
//!
//! These provide a high-level API for constructing declaration syntax,
//! which is then rendered via [`CodeBuilder`](tagtype_codegen::CodeBuilder).

mod imports;
mod interface;
mod namespace;
mod var;

pub use imports::{Import, ImportSpecifier};
pub use interface::{Interface, InterfaceField};
pub use namespace::Namespace;
pub use var::VarDecl;

/// Whether `name` can be written as a bare property key.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
