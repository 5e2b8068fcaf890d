//! Namespace and `declare global` scopes.

use tagtype_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A scope holding nested declarations: `namespace X { ... }` or
/// `declare global { ... }`.
#[derive(Debug, Clone)]
pub struct Namespace {
    header: String,
    items: Vec<Vec<CodeFragment>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            header: format!("namespace {} {{", name.into()),
            items: Vec::new(),
        }
    }

    /// The global augmentation scope.
    pub fn global() -> Self {
        Self {
            header: "declare global {".to_string(),
            items: Vec::new(),
        }
    }

    /// Add a declaration to the scope.
    pub fn item(mut self, node: impl Renderable) -> Self {
        self.items.push(node.to_fragments());
        self
    }

    /// Build the namespace as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.items.iter().flatten().cloned().collect();
        vec![CodeFragment::braced(self.header.clone(), body)]
    }
}
