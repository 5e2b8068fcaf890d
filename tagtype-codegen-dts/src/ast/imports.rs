//! TypeScript import builder.

use tagtype_codegen::{CodeBuilder, CodeFragment, Renderable};

/// One `name` or `name as alias` entry of a named import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportSpecifier {
    fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} as {}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

/// Builder for TypeScript import statements.
///
/// Without named specifiers the import is a side-effect import
/// (`import 'module';`).
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<ImportSpecifier>,
    multiline: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            multiline: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(ImportSpecifier {
            name: name.into(),
            alias: None,
        });
        self
    }

    /// Import a named export under a local alias.
    ///
    /// The `as` clause is dropped when the alias equals the name.
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        let name = name.into();
        let alias = alias.into();
        let alias = (alias != name).then_some(alias);
        self.named.push(ImportSpecifier { name, alias });
        self
    }

    /// Put each specifier on its own line, with trailing commas.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn specifiers(&self) -> &[ImportSpecifier] {
        &self.named
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.named.is_empty() {
            return vec![CodeFragment::line(format!("import '{}';", self.from))];
        }

        if self.multiline {
            let body = self
                .named
                .iter()
                .map(|spec| CodeFragment::line(format!("{},", spec.render())))
                .collect();
            return vec![CodeFragment::block(
                "import {",
                body,
                Some(format!("}} from '{}';", self.from)),
            )];
        }

        let specs: Vec<String> = self.named.iter().map(ImportSpecifier::render).collect();
        vec![CodeFragment::line(format!(
            "import {{ {} }} from '{}';",
            specs.join(", "),
            self.from
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("./utils").named("foo").named("bar").build();
        assert_eq!(i, "import { foo, bar } from './utils';\n");
    }

    #[test]
    fn test_alias_dropped_when_identical() {
        let i = Import::new("./cmp").named_as("MyCmp", "MyCmp").build();
        assert_eq!(i, "import { MyCmp } from './cmp';\n");
    }

    #[test]
    fn test_aliased_import() {
        let i = Import::new("./cmp").named_as("Impl", "MyCmp").build();
        assert_eq!(i, "import { Impl as MyCmp } from './cmp';\n");
    }

    #[test]
    fn test_multiline_import() {
        let i = Import::new("./types")
            .named("User")
            .named_as("Theme", "Theme2")
            .multiline()
            .build();
        assert_eq!(
            i,
            "import {\n  User,\n  Theme as Theme2,\n} from './types';\n"
        );
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("@ui/core").build();
        assert_eq!(i, "import '@ui/core';\n");
    }
}
