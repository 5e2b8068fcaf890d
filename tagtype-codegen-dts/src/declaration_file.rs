//! Section layout of the generated declaration document.

use tagtype_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a declaration document.
///
/// Sections render in a fixed order: header comment, collection imports,
/// type imports, then declaration blocks. Non-empty sections are separated
/// by one blank line, as are consecutive blocks.
#[derive(Debug, Default)]
pub struct DeclarationFile {
    header: Vec<String>,
    collections: Vec<Import>,
    imports: Vec<Import>,
    blocks: Vec<Vec<CodeFragment>>,
}

impl DeclarationFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lines of the leading `/** ... */` comment.
    pub fn header(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Add a side-effect import for an extension collection.
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collections.push(Import::new(name));
        self
    }

    /// Add a type import.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add type imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a declaration block.
    pub fn block(mut self, node: impl Renderable) -> Self {
        self.blocks.push(node.to_fragments());
        self
    }

    /// Render with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        for section in self.sections() {
            if !builder.is_empty() {
                builder.push_blank();
            }
            for fragment in section {
                builder.apply_fragment(fragment);
            }
        }
        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.collections.is_empty()
            && self.imports.is_empty()
            && self.blocks.is_empty()
    }

    fn sections(&self) -> Vec<Vec<CodeFragment>> {
        let mut sections = Vec::new();
        if !self.header.is_empty() {
            sections.push(vec![CodeFragment::doc_block(self.header.clone())]);
        }
        // Collections are separated from each other as well.
        for collection in &self.collections {
            sections.push(collection.to_fragments());
        }
        if !self.imports.is_empty() {
            sections.push(self.imports.iter().flat_map(Renderable::to_fragments).collect());
        }
        sections.extend(self.blocks.iter().cloned());
        sections
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::Interface;

    #[test]
    fn test_empty_file() {
        let file = DeclarationFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_section_order() {
        let file = DeclarationFile::new()
            .block(Interface::new("B"))
            .import(Import::new("./types").named("User").multiline())
            .collection("@ui/core")
            .collection("@ui/icons")
            .header(["Generated."]);

        assert_eq!(
            file.render(),
            r#"/**
 * Generated.
 */

import '@ui/core';

import '@ui/icons';

import {
  User,
} from './types';

interface B {}
"#
        );
    }

    #[test]
    fn test_imports_are_not_separated() {
        let file = DeclarationFile::new()
            .imports([
                Import::new("./a").named("A"),
                Import::new("./b").named("B"),
            ])
            .block(Interface::new("X"))
            .block(Interface::new("Y"));

        assert_eq!(
            file.render(),
            "import { A } from './a';\nimport { B } from './b';\n\ninterface X {}\n\ninterface Y {}\n"
        );
    }
}
