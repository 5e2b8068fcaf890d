//! Generate operation - declarations from the component registry.

use eyre::{Context, Result};
use tagtype_codegen_dts::Generator;
use tagtype_core::File;
use tagtype_registry::{BuildConfig, ComponentRegistry};
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is written unless every component generates successfully.
pub fn generate(
    config: &BuildConfig,
    registry: &ComponentRegistry,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generated = Generator::new(config, registry)
        .generate()
        .wrap_err("Failed to generate declarations")?;
    let summary = generated.summary;
    let (path, content) = generated.into_parts();

    let result = if opts.dry_run {
        GenerationResult::Preview(content)
    } else {
        let status = File::new(path.as_std_path(), content)
            .write()
            .wrap_err("Failed to write declarations")?;
        info!(path = %path, ?status, "persisted declarations");
        GenerationResult::Written(status)
    };

    Ok(GenerateReport {
        path,
        summary,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::Utf8PathBuf;
    use tagtype_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const REGISTRY: &str = r#"{
      "/project/src/x-el.tsx": {
        "tagName": "x-el",
        "className": "XEl",
        "sourcePath": "SRC/x-el.tsx",
        "members": {}
      }
    }"#;

    fn project() -> (TempDir, BuildConfig, ComponentRegistry) {
        let dir = TempDir::new().unwrap();
        let src_dir = Utf8PathBuf::from_path_buf(dir.path().join("src")).unwrap();
        let registry = REGISTRY.replace("SRC", src_dir.as_str()).parse().unwrap();
        let config = BuildConfig {
            src_dir,
            ..BuildConfig::default()
        };
        (dir, config, registry)
    }

    #[test]
    fn test_writes_declarations() {
        let (dir, config, registry) = project();

        let report = generate(&config, &registry, GenerateOptions { dry_run: false }).unwrap();

        let written = fs::read_to_string(dir.path().join("src/components.d.ts")).unwrap();
        assert!(written.contains("import { XEl } from './x-el';"));
        assert!(matches!(
            report.result,
            GenerationResult::Written(WriteResult::Written)
        ));
    }

    #[test]
    fn test_second_run_leaves_file_unchanged() {
        let (_dir, config, registry) = project();

        generate(&config, &registry, GenerateOptions { dry_run: false }).unwrap();
        let report = generate(&config, &registry, GenerateOptions { dry_run: false }).unwrap();

        assert!(matches!(
            report.result,
            GenerationResult::Written(WriteResult::Unchanged)
        ));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (dir, config, registry) = project();

        let report = generate(&config, &registry, GenerateOptions { dry_run: true }).unwrap();

        assert!(!dir.path().join("src/components.d.ts").exists());
        match report.result {
            GenerationResult::Preview(content) => assert!(content.contains("\"x-el\"")),
            other => panic!("expected preview, got {other:?}"),
        }
    }
}
