//! Component registry loading and ordered traversal.

use std::{collections::HashMap, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ComponentDescriptor, Error, Result, error::SourceContext};

/// Mapping from source-file identity to the component declared in it.
///
/// Files that were scanned but declare no component map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    entries: IndexMap<String, Option<ComponentDescriptor>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result of scanning `file`.
    pub fn insert(&mut self, file: impl Into<String>, component: Option<ComponentDescriptor>) {
        self.entries.insert(file.into(), component);
    }

    /// Present components ordered by source-file identity.
    ///
    /// The order is independent of insertion order, which keeps generated
    /// output stable across runs.
    pub fn ordered(&self) -> Vec<&ComponentDescriptor> {
        let mut present: Vec<(&str, &ComponentDescriptor)> = self
            .entries
            .iter()
            .filter_map(|(file, cmp)| cmp.as_ref().map(|cmp| (file.as_str(), cmp)))
            .collect();
        present.sort_by(|a, b| a.0.cmp(b.0));
        present.into_iter().map(|(_, cmp)| cmp).collect()
    }

    /// Number of scanned files, including those without a component.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files that declare a component.
    pub fn component_count(&self) -> usize {
        self.entries.values().filter(|cmp| cmp.is_some()).count()
    }

    /// Load a registry from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a registry from JSON with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let registry: Self = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        registry.validate(&ctx)?;
        tracing::debug!(
            files = registry.len(),
            components = registry.component_count(),
            "loaded component registry from {}",
            filename
        );
        Ok(registry)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (file, cmp) in &self.entries {
            let Some(cmp) = cmp else { continue };
            if let Some(first) = seen.insert(cmp.tag_name.as_str(), file.as_str()) {
                return Err(ctx.duplicate_tag_error(&cmp.tag_name, first, file.as_str()));
            }
        }
        Ok(())
    }
}

impl FromStr for ComponentRegistry {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "components.json")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn component(tag: &str, path: &str) -> ComponentDescriptor {
        ComponentDescriptor {
            tag_name: tag.to_string(),
            class_name: "Cmp".to_string(),
            members: IndexMap::new(),
            source_path: path.into(),
        }
    }

    #[test]
    fn test_ordered_sorts_by_file_identity() {
        let mut registry = ComponentRegistry::new();
        registry.insert("/src/c.tsx", Some(component("c-el", "/src/c.tsx")));
        registry.insert("/src/a.tsx", Some(component("a-el", "/src/a.tsx")));
        registry.insert("/src/b.tsx", Some(component("b-el", "/src/b.tsx")));

        let tags: Vec<_> = registry.ordered().iter().map(|c| c.tag_name.as_str()).collect();
        assert_eq!(tags, vec!["a-el", "b-el", "c-el"]);
    }

    #[test]
    fn test_ordered_skips_absent_entries() {
        let mut registry = ComponentRegistry::new();
        registry.insert("/src/util.ts", None);
        registry.insert("/src/a.tsx", Some(component("a-el", "/src/a.tsx")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.component_count(), 1);
        assert_eq!(registry.ordered().len(), 1);
    }

    #[test]
    fn test_parse_with_null_entries() {
        let registry: ComponentRegistry = r#"{
            "/src/b.tsx": {
                "tagName": "b-el",
                "className": "BEl",
                "sourcePath": "/src/b.tsx"
            },
            "/src/helpers.ts": null
        }"#
        .parse()
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ordered()[0].class_name, "BEl");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "{ \"a\": nope }".parse::<ComponentRegistry>().unwrap_err();
        match *err {
            Error::Registry { span, .. } => assert!(span.is_some()),
            other => panic!("expected registry parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let err = r#"{
            "/src/a.tsx": { "tagName": "x-el", "className": "A", "sourcePath": "/src/a.tsx" },
            "/src/b.tsx": { "tagName": "x-el", "className": "B", "sourcePath": "/src/b.tsx" }
        }"#
        .parse::<ComponentRegistry>()
        .unwrap_err();

        match *err {
            Error::DuplicateTagName {
                tag,
                first_component,
                second_component,
                ..
            } => {
                assert_eq!(tag, "x-el");
                assert_eq!(first_component, "/src/a.tsx");
                assert_eq!(second_component, "/src/b.tsx");
            }
            other => panic!("expected duplicate tag error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = ComponentRegistry::from_file(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("components.json");
        fs::write(&path, "{}").unwrap();

        let registry = ComponentRegistry::from_file(&path).unwrap();
        assert!(registry.is_empty());
    }
}
