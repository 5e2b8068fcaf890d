//! TypeScript interface builder.

use tagtype_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::is_identifier;

/// A property signature in a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn render(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        if is_identifier(&self.name) {
            format!("{}{}: {};", self.name, optional, self.ty)
        } else {
            format!("\"{}\"{}: {};", self.name, optional, self.ty)
        }
    }
}

/// Builder for TypeScript interfaces.
///
/// Property keys that are not identifiers (e.g. tag names) are quoted.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Vec<String>,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            fields: Vec::new(),
            exported: false,
        }
    }

    /// Add a base interface.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends.push(base.into());
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Mark the interface with `export`.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[InterfaceField] {
        &self.fields
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        if self.extends.is_empty() {
            format!("{}interface {}", export, self.name)
        } else {
            format!(
                "{}interface {} extends {}",
                export,
                self.name,
                self.extends.join(", ")
            )
        }
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("{} {{}}", self.header()))];
        }

        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(field.render()))
            .collect();
        vec![CodeFragment::braced(format!("{} {{", self.header()), body)]
    }
}
