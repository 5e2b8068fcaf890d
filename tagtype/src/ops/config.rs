//! Command-line overrides for the build configuration.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{Context, Result, eyre};
use tagtype_registry::BuildConfig;

/// Values given on the command line that replace configured ones.
///
/// Relative paths are taken relative to the working directory, not to
/// `tagtype.toml`.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub src_dir: Option<Utf8PathBuf>,
    pub registry: Option<Utf8PathBuf>,
    /// Replaces the configured list when non-empty.
    pub collections: Vec<String>,
}

impl ConfigOverrides {
    /// Apply the overrides, anchoring relative paths at the working directory.
    pub fn apply(self, config: BuildConfig) -> Result<BuildConfig> {
        if self.src_dir.is_none() && self.registry.is_none() && self.collections.is_empty() {
            return Ok(config);
        }
        let cwd = current_dir()?;
        Ok(self.apply_in(config, &cwd))
    }

    fn apply_in(self, mut config: BuildConfig, cwd: &Utf8Path) -> BuildConfig {
        if let Some(src_dir) = self.src_dir {
            config.src_dir = cwd.join(src_dir);
        }
        if let Some(registry) = self.registry {
            config.registry = cwd.join(registry);
        }
        if !self.collections.is_empty() {
            config.collections = self.collections;
        }
        config
    }
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().wrap_err("failed to read the working directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|path| eyre!("working directory '{}' is not valid UTF-8", path.display()))
}
