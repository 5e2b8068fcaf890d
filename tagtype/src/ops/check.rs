//! Check operation - validate a project without writing anything.

use std::path::Path;

use tagtype_codegen_dts::{GenerateError, Generator};
use tagtype_registry::{BuildConfig, ComponentRegistry};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs a full generation in memory so reference errors surface here too.
pub fn check(
    config_path: &Path,
    config: &BuildConfig,
    registry: &ComponentRegistry,
) -> Result<CheckReport, GenerateError> {
    let generated = Generator::new(config, registry).generate()?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        registry_path: config.registry.clone(),
        output_path: generated.path,
        file_count: registry.len(),
        tags: registry
            .ordered()
            .into_iter()
            .map(|cmp| cmp.tag_name.clone())
            .collect(),
        collections: config.collections.clone(),
        import_groups: generated.summary.import_groups,
    })
}
