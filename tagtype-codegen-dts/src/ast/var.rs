//! Ambient `var` declarations with an object type.

use tagtype_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `var Name: { ... };` declarations.
///
/// Used for the constructor side of an element: the global value that
/// carries the element's `prototype` and `new ()` signature.
#[derive(Debug, Clone)]
pub struct VarDecl {
    name: String,
    members: Vec<String>,
}

impl VarDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a property member (`name: ty;`).
    pub fn property(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.members
            .push(format!("{}: {};", name.into(), ty.into()));
        self
    }

    /// Add a zero-argument construct signature (`new (): ty;`).
    pub fn construct_signature(mut self, ty: impl Into<String>) -> Self {
        self.members.push(format!("new (): {};", ty.into()));
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for VarDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.members.iter().map(CodeFragment::line).collect();
        vec![CodeFragment::block(
            format!("var {}: {{", self.name),
            body,
            Some("};".to_string()),
        )]
    }
}
