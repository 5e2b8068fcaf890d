//! Assembles the shared `components.d.ts` document.

use camino::Utf8PathBuf;
use tagtype_core::{PathOps, PosixPaths, to_pascal_case};
use tagtype_registry::{BuildConfig, ComponentRegistry};
use tracing::{debug, info};

use crate::{
    GenerateError,
    ast::Import,
    declaration::DeclarationBlock,
    declaration_file::DeclarationFile,
    resolver::{ReferenceResolver, ResolverContext, module_specifier, relative_specifier},
};

/// File name of the generated document inside the source root.
pub const OUTPUT_FILE_NAME: &str = "components.d.ts";

const HEADER: [&str; 3] = [
    "This is an autogenerated file created by tagtype.",
    "It contains typing information for all components that exist in this project",
    "and imports for the extension collections configured in tagtype.toml.",
];

/// Counts describing one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub components: usize,
    pub collections: usize,
    pub import_groups: usize,
    pub bindings: usize,
    /// Bindings whose name was suffixed to avoid a collision.
    pub renamed: usize,
}

/// The generated document and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTypes {
    pub path: Utf8PathBuf,
    pub content: String,
    pub summary: GenerationSummary,
}

impl GeneratedTypes {
    /// Split into `(path, content)`.
    pub fn into_parts(self) -> (Utf8PathBuf, String) {
        (self.path, self.content)
    }
}

/// Declaration generator for a component registry.
///
/// Each call to [`generate`](Self::generate) is an independent run with its
/// own resolver context, so repeated calls produce identical output.
pub struct Generator<'a> {
    config: &'a BuildConfig,
    registry: &'a ComponentRegistry,
    paths: &'a dyn PathOps,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a BuildConfig, registry: &'a ComponentRegistry) -> Self {
        Self {
            config,
            registry,
            paths: &PosixPaths,
        }
    }

    /// Use different path operations.
    pub fn with_paths(mut self, paths: &'a dyn PathOps) -> Self {
        self.paths = paths;
        self
    }

    /// Run generation. Nothing is produced if any component fails.
    pub fn generate(&self) -> Result<GeneratedTypes, GenerateError> {
        let src_dir = &self.config.src_dir;
        let components = self.registry.ordered();
        let mut resolver = ReferenceResolver::new(self.paths);
        // Component classes are imported into the same scope as type imports.
        for cmp in &components {
            resolver.reserve(&to_pascal_case(&cmp.tag_name));
        }

        let mut blocks = Vec::new();
        for cmp in components {
            debug!(tag = %cmp.tag_name, source = %cmp.source_path, "synthesizing component");
            let resolved = resolver.resolve_component(cmp)?;
            let class_module = relative_specifier(self.paths, src_dir, &cmp.source_path)?;
            blocks.push(DeclarationBlock::synthesize(cmp, &resolved, class_module)?);
        }

        let context = resolver.finish();
        let imports = self.imports(&context)?;

        let file = self
            .config
            .collections
            .iter()
            .fold(DeclarationFile::new().header(HEADER), |file, name| {
                file.collection(name)
            })
            .imports(imports);
        let file = blocks.iter().fold(file, |file, block| file.block(block));

        let summary = GenerationSummary {
            components: blocks.len(),
            collections: self.config.collections.len(),
            import_groups: context.groups().count(),
            bindings: context.binding_count(),
            renamed: context
                .groups()
                .flat_map(|(_, group)| group.bindings())
                .filter(|binding| binding.is_renamed())
                .count(),
        };
        info!(
            components = summary.components,
            import_groups = summary.import_groups,
            renamed = summary.renamed,
            "generated component declarations"
        );

        Ok(GeneratedTypes {
            path: self.paths.join(src_dir, OUTPUT_FILE_NAME),
            content: file.render(),
            summary,
        })
    }

    /// One multiline import per group, in group creation order.
    fn imports(&self, context: &ResolverContext) -> Result<Vec<Import>, GenerateError> {
        context
            .groups()
            .map(|(source, group)| -> Result<Import, GenerateError> {
                let module = module_specifier(self.paths, &self.config.src_dir, source)?;
                Ok(group
                    .bindings()
                    .iter()
                    .fold(Import::new(module).multiline(), |import, binding| {
                        import.named_as(&binding.local_name, &binding.bound_name)
                    }))
            })
            .collect()
    }
}
