//! Cross-file type reference resolution.
//!
//! Every component is generated into one shared declaration file, so the
//! types its attributes mention must be imported exactly once and under
//! names that do not clash. [`ReferenceResolver`] walks components in
//! registry order and accumulates the import groups in a
//! [`ResolverContext`] owned by a single generation run.

use std::collections::{HashMap, HashSet};

use camino::Utf8Path;
use indexmap::IndexMap;
use tagtype_core::{PathOps, strip_ts_extension};
use tagtype_registry::{ComponentDescriptor, LocationKind, TypeReference};
use tracing::debug;

use crate::GenerateError;

/// A symbol imported into the shared declaration scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Name the symbol is exported under in its source file.
    pub local_name: String,
    /// Name the symbol is bound to in the generated file.
    pub bound_name: String,
}

impl ImportBinding {
    /// Whether a collision forced a different bound name.
    pub fn is_renamed(&self) -> bool {
        self.local_name != self.bound_name
    }
}

/// Bindings imported from one source file, in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportGroup {
    bindings: Vec<ImportBinding>,
}

impl ImportGroup {
    pub fn bindings(&self) -> &[ImportBinding] {
        &self.bindings
    }

    fn find(&self, local_name: &str) -> Option<&ImportBinding> {
        self.bindings.iter().find(|b| b.local_name == local_name)
    }
}

/// Run-scoped accumulator of import groups and name usage.
///
/// Groups are keyed by canonical source (an absolute path without its
/// TypeScript extension, or a bare package specifier) and iterate in
/// creation order.
#[derive(Debug, Clone, Default)]
pub struct ResolverContext {
    name_counter: HashMap<String, u32>,
    bound_names: HashSet<String>,
    groups: IndexMap<String, ImportGroup>,
}

impl ResolverContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` exported from `source`, returning the name to use for it.
    ///
    /// A name already imported from the same source reuses its binding.
    /// Otherwise the first use of a name keeps it as is and later uses
    /// from other sources are suffixed `2`, `3`, and so on.
    pub fn bind(&mut self, source: &str, name: &str) -> String {
        if let Some(existing) = self.groups.get(source).and_then(|g| g.find(name)) {
            return existing.bound_name.clone();
        }

        let bound_name = self.next_bound_name(name);
        if bound_name != name {
            debug!(symbol = name, bound = %bound_name, source, "renamed colliding import");
        }
        self.groups
            .entry(source.to_string())
            .or_default()
            .bindings
            .push(ImportBinding {
                local_name: name.to_string(),
                bound_name: bound_name.clone(),
            });
        bound_name
    }

    /// Mark `name` as taken by a declaration outside any import group.
    ///
    /// Later bindings of the same name are suffixed.
    pub fn reserve(&mut self, name: &str) {
        self.bound_names.insert(name.to_string());
    }

    fn next_bound_name(&mut self, name: &str) -> String {
        let counter = self.name_counter.entry(name.to_string()).or_insert(0);
        let mut candidate = name.to_string();
        if *counter == 0 && !self.bound_names.contains(name) {
            *counter = 1;
        } else {
            // A suffixed name can itself be a real symbol bound earlier.
            loop {
                *counter = (*counter).max(1) + 1;
                candidate = format!("{}{}", name, counter);
                if !self.bound_names.contains(&candidate) {
                    break;
                }
            }
        }
        self.bound_names.insert(candidate.clone());
        candidate
    }

    /// Import groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &ImportGroup)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the group for a canonical source.
    pub fn group(&self, source: &str) -> Option<&ImportGroup> {
        self.groups.get(source)
    }

    /// Total number of bindings across all groups.
    pub fn binding_count(&self) -> usize {
        self.groups.values().map(|g| g.bindings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Per-member substitutions produced for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedComponent {
    members: HashMap<String, HashMap<String, String>>,
}

impl ResolvedComponent {
    /// `name -> bound_name` map for an attribute member.
    pub fn bindings_for(&self, member: &str) -> Option<&HashMap<String, String>> {
        self.members.get(member)
    }
}

/// Resolves the type references of components against a shared context.
///
/// Components must be fed in registry order so renames are reproducible.
pub struct ReferenceResolver<'a> {
    paths: &'a dyn PathOps,
    context: ResolverContext,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(paths: &'a dyn PathOps) -> Self {
        Self {
            paths,
            context: ResolverContext::new(),
        }
    }

    /// Reserve a name declared by the generated file itself.
    pub fn reserve(&mut self, name: &str) {
        self.context.reserve(name);
    }

    /// Resolve every reference made by the component's attribute members.
    pub fn resolve_component(
        &mut self,
        cmp: &ComponentDescriptor,
    ) -> Result<ResolvedComponent, GenerateError> {
        let mut resolved = ResolvedComponent::default();

        for (member, descriptor) in cmp.observable_members() {
            let Some(attribute_type) = &descriptor.attribute_type else {
                continue;
            };

            let bindings = resolved.members.entry(member.to_string()).or_default();
            for reference in &attribute_type.type_references {
                let Some(source) = self.source_of(cmp, member, reference)? else {
                    continue;
                };
                let bound = self.context.bind(&source, &reference.name);
                bindings.insert(reference.name.clone(), bound);
            }
        }

        Ok(resolved)
    }

    /// Canonical source of a reference, or `None` for ambient types.
    fn source_of(
        &self,
        cmp: &ComponentDescriptor,
        member: &str,
        reference: &TypeReference,
    ) -> Result<Option<String>, GenerateError> {
        let source = match &reference.location {
            LocationKind::Global => return Ok(None),
            LocationKind::Local => strip_ts_extension(cmp.source_path.as_str()).to_string(),
            LocationKind::Import => {
                let path = reference.path.as_deref().ok_or_else(|| {
                    GenerateError::MissingImportPath {
                        name: reference.name.clone(),
                        member: member.to_string(),
                        component: cmp.tag_name.clone(),
                    }
                })?;
                if path.starts_with('.') {
                    let dir = self.paths.dirname(&cmp.source_path);
                    let resolved = self.paths.resolve(&dir, path)?;
                    strip_ts_extension(resolved.as_str()).to_string()
                } else {
                    path.to_string()
                }
            }
            LocationKind::Unknown(kind) => {
                return Err(GenerateError::UnknownLocationKind {
                    kind: kind.clone(),
                    member: member.to_string(),
                    component: cmp.tag_name.clone(),
                });
            }
        };
        Ok(Some(source))
    }

    pub fn context(&self) -> &ResolverContext {
        &self.context
    }

    /// Finish the run and hand back the accumulated import groups.
    pub fn finish(self) -> ResolverContext {
        self.context
    }
}

/// Module specifier for a canonical source as seen from `src_dir`.
///
/// Absolute paths become `./`-relative with the TypeScript extension
/// stripped; bare package specifiers pass through unchanged.
pub fn module_specifier(
    paths: &dyn PathOps,
    src_dir: &Utf8Path,
    source: &str,
) -> Result<String, GenerateError> {
    if !paths.is_absolute(source) {
        return Ok(source.to_string());
    }
    relative_specifier(paths, src_dir, Utf8Path::new(source))
}

/// Relative module specifier for a file, which must be absolute.
pub fn relative_specifier(
    paths: &dyn PathOps,
    src_dir: &Utf8Path,
    file: &Utf8Path,
) -> Result<String, GenerateError> {
    let relative = paths.relative(src_dir, file)?;
    let relative = strip_ts_extension(relative.as_str());
    if relative.starts_with("../") {
        Ok(relative.to_string())
    } else {
        Ok(format!("./{}", relative))
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use tagtype_core::PosixPaths;
    use tagtype_registry::{AttributeType, MemberDescriptor, MemberKind};

    use super::*;

    fn reference(name: &str, location: LocationKind, path: Option<&str>) -> TypeReference {
        TypeReference {
            name: name.to_string(),
            location,
            path: path.map(str::to_string),
        }
    }

    fn component(
        tag: &str,
        path: &str,
        members: Vec<(&str, MemberKind, &str, Vec<TypeReference>)>,
    ) -> ComponentDescriptor {
        let members: IndexMap<_, _> = members
            .into_iter()
            .map(|(name, kind, text, refs)| {
                (
                    name.to_string(),
                    MemberDescriptor {
                        member_kind: kind,
                        attribute_type: Some(AttributeType {
                            text: text.to_string(),
                            type_references: refs,
                        }),
                    },
                )
            })
            .collect();
        ComponentDescriptor {
            tag_name: tag.to_string(),
            class_name: "Cmp".to_string(),
            members,
            source_path: path.into(),
        }
    }

    #[test]
    fn test_bind_first_use_unsuffixed_then_counted() {
        let mut ctx = ResolverContext::new();
        assert_eq!(ctx.bind("/a.ts", "Foo"), "Foo");
        assert_eq!(ctx.bind("/b.ts", "Foo"), "Foo2");
        assert_eq!(ctx.bind("/c.ts", "Foo"), "Foo3");
        assert_eq!(ctx.bind("/a.ts", "Bar"), "Bar");
    }

    #[test]
    fn test_bind_reuses_within_same_source() {
        let mut ctx = ResolverContext::new();
        assert_eq!(ctx.bind("/a.ts", "Foo"), "Foo");
        assert_eq!(ctx.bind("/b.ts", "Foo"), "Foo2");
        assert_eq!(ctx.bind("/b.ts", "Foo"), "Foo2");

        assert_eq!(ctx.group("/b.ts").unwrap().bindings().len(), 1);
        assert_eq!(ctx.binding_count(), 2);
    }

    #[test]
    fn test_bind_skips_names_taken_by_real_symbols() {
        let mut ctx = ResolverContext::new();
        assert_eq!(ctx.bind("/a.ts", "Foo2"), "Foo2");
        assert_eq!(ctx.bind("/a.ts", "Foo"), "Foo");
        assert_eq!(ctx.bind("/b.ts", "Foo"), "Foo3");
        assert_eq!(ctx.bind("/c.ts", "Foo2"), "Foo22");
    }

    #[test]
    fn test_reserved_names_are_suffixed() {
        let mut ctx = ResolverContext::new();
        ctx.reserve("UserCard");
        assert_eq!(ctx.bind("/app/src/models/user-card", "UserCard"), "UserCard2");
        assert_eq!(ctx.bind("/app/src/other", "UserCard"), "UserCard3");
        assert!(!ctx.is_empty());
        assert_eq!(ctx.binding_count(), 2);
    }

    #[test]
    fn test_groups_keep_creation_order() {
        let mut ctx = ResolverContext::new();
        ctx.bind("/z.ts", "Z");
        ctx.bind("/a.ts", "A");
        let sources: Vec<_> = ctx.groups().map(|(s, _)| s).collect();
        assert_eq!(sources, vec!["/z.ts", "/a.ts"]);
    }

    #[test]
    fn test_global_references_are_not_imported() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/x.tsx",
            vec![(
                "el",
                MemberKind::Prop,
                "HTMLElement",
                vec![reference("HTMLElement", LocationKind::Global, None)],
            )],
        );

        let resolved = resolver.resolve_component(&cmp).unwrap();

        assert!(resolver.context().is_empty());
        assert!(resolved.bindings_for("el").unwrap().is_empty());
    }

    #[test]
    fn test_relative_import_resolved_against_component_dir() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/cmp/x.tsx",
            vec![(
                "user",
                MemberKind::Prop,
                "User",
                vec![reference("User", LocationKind::Import, Some("../types/user"))],
            )],
        );

        resolver.resolve_component(&cmp).unwrap();

        assert!(resolver.context().group("/app/src/types/user").is_some());
    }

    #[test]
    fn test_bare_import_kept_verbatim() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/x.tsx",
            vec![(
                "theme",
                MemberKind::PropMutable,
                "Theme",
                vec![reference("Theme", LocationKind::Import, Some("@ui/theme"))],
            )],
        );

        resolver.resolve_component(&cmp).unwrap();

        assert!(resolver.context().group("@ui/theme").is_some());
    }

    #[test]
    fn test_local_reference_uses_own_file() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/x.tsx",
            vec![(
                "mode",
                MemberKind::Prop,
                "Mode",
                vec![reference("Mode", LocationKind::Local, None)],
            )],
        );

        let resolved = resolver.resolve_component(&cmp).unwrap();

        let group = resolver.context().group("/app/src/x").unwrap();
        assert_eq!(group.bindings()[0].local_name, "Mode");
        assert_eq!(resolved.bindings_for("mode").unwrap()["Mode"], "Mode");
    }

    #[test]
    fn test_local_and_relative_import_share_group() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let a = component(
            "x-a",
            "/app/src/a.tsx",
            vec![(
                "mode",
                MemberKind::Prop,
                "Mode",
                vec![reference("Mode", LocationKind::Import, Some("./b"))],
            )],
        );
        let b = component(
            "x-b",
            "/app/src/b.tsx",
            vec![(
                "mode",
                MemberKind::Prop,
                "Mode",
                vec![reference("Mode", LocationKind::Local, None)],
            )],
        );

        resolver.resolve_component(&a).unwrap();
        let resolved = resolver.resolve_component(&b).unwrap();

        let context = resolver.finish();
        assert_eq!(context.groups().count(), 1);
        assert_eq!(context.binding_count(), 1);
        assert_eq!(resolved.bindings_for("mode").unwrap()["Mode"], "Mode");
    }

    #[test]
    fn test_non_attribute_members_ignored() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/x.tsx",
            vec![(
                "internal",
                MemberKind::State,
                "Secret",
                vec![reference("Secret", LocationKind::Import, Some("./secret"))],
            )],
        );

        let resolved = resolver.resolve_component(&cmp).unwrap();

        assert!(resolver.finish().is_empty());
        assert!(resolved.bindings_for("internal").is_none());
    }

    #[test]
    fn test_unknown_location_names_member_and_component() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/x.tsx",
            vec![(
                "value",
                MemberKind::Prop,
                "Thing",
                vec![reference(
                    "Thing",
                    LocationKind::Unknown("ambient".to_string()),
                    None,
                )],
            )],
        );

        let err = resolver.resolve_component(&cmp).unwrap_err();

        match err {
            GenerateError::UnknownLocationKind {
                kind,
                member,
                component,
            } => {
                assert_eq!(kind, "ambient");
                assert_eq!(member, "value");
                assert_eq!(component, "x-el");
            }
            other => panic!("expected UnknownLocationKind, got {other:?}"),
        }
    }

    #[test]
    fn test_import_without_path_is_rejected() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "/app/src/x.tsx",
            vec![(
                "value",
                MemberKind::Prop,
                "Thing",
                vec![reference("Thing", LocationKind::Import, None)],
            )],
        );

        let err = resolver.resolve_component(&cmp).unwrap_err();
        assert!(matches!(err, GenerateError::MissingImportPath { .. }));
    }

    #[test]
    fn test_relative_import_from_relative_component_path_fails() {
        let paths = PosixPaths;
        let mut resolver = ReferenceResolver::new(&paths);
        let cmp = component(
            "x-el",
            "src/x.tsx",
            vec![(
                "value",
                MemberKind::Prop,
                "Thing",
                vec![reference("Thing", LocationKind::Import, Some("./thing"))],
            )],
        );

        let err = resolver.resolve_component(&cmp).unwrap_err();
        assert!(matches!(err, GenerateError::Path(_)));
    }

    #[test]
    fn test_module_specifier() {
        let paths = PosixPaths;
        let src = Utf8Path::new("/app/src");
        assert_eq!(
            module_specifier(&paths, src, "/app/src/types/user.ts").unwrap(),
            "./types/user"
        );
        assert_eq!(
            module_specifier(&paths, src, "/app/src/cmp/x.tsx").unwrap(),
            "./cmp/x"
        );
        assert_eq!(
            module_specifier(&paths, src, "/app/shared/types").unwrap(),
            "../shared/types"
        );
        assert_eq!(
            module_specifier(&paths, src, "@ui/theme").unwrap(),
            "@ui/theme"
        );
    }

    #[test]
    fn test_relative_specifier_requires_absolute_file() {
        let paths = PosixPaths;
        let src = Utf8Path::new("/app/src");
        assert_eq!(
            relative_specifier(&paths, src, Utf8Path::new("/app/src/x.tsx")).unwrap(),
            "./x"
        );
        assert!(relative_specifier(&paths, src, Utf8Path::new("src/x.tsx")).is_err());
    }
}
