//! Build configuration (`tagtype.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "tagtype.toml";

/// Options recognised by the declaration generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project source root; import paths and the output path derive from it.
    #[serde(default = "default_src_dir")]
    pub src_dir: Utf8PathBuf,

    /// Extension collections, each emitted as a side-effect import.
    #[serde(default)]
    pub collections: Vec<String>,

    /// Component registry produced by metadata extraction.
    #[serde(default = "default_registry")]
    pub registry: Utf8PathBuf,
}

fn default_src_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("src")
}

fn default_registry() -> Utf8PathBuf {
    Utf8PathBuf::from("components.json")
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            collections: Vec::new(),
            registry: default_registry(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigDocument {
    #[serde(default)]
    build: BuildConfig,
}

impl BuildConfig {
    /// Parse a configuration with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let doc: ConfigDocument = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        Ok(doc.build)
    }

    /// Make relative paths absolute against `base`.
    pub fn anchored(mut self, base: &Utf8Path) -> Self {
        if self.src_dir.is_relative() {
            self.src_dir = base.join(&self.src_dir);
        }
        if self.registry.is_relative() {
            self.registry = base.join(&self.registry);
        }
        self
    }
}

impl FromStr for BuildConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

/// A `tagtype.toml` file with both raw content and parsed configuration.
///
/// Relative paths inside the file are anchored at the file's directory.
pub struct BuildConfigFile {
    path: PathBuf,
    content: String,
    config: BuildConfig,
}

impl BuildConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = BuildConfig::from_str_with_filename(&content, &path.display().to_string())?;
        let config = config.anchored(&base_dir(&path)?);

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Use defaults anchored at `dir` when no configuration file exists.
    pub fn defaults_in(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let anchor = absolute_utf8(dir)?;
        Ok(Self {
            path: dir.join(CONFIG_FILE_NAME),
            content: String::new(),
            config: BuildConfig::default().anchored(&anchor),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Take the parsed configuration, consuming the file.
    pub fn into_config(self) -> BuildConfig {
        self.config
    }
}

fn base_dir(config_path: &Path) -> Result<Utf8PathBuf> {
    let dir = config_path.parent().unwrap_or_else(|| Path::new(""));
    absolute_utf8(dir)
}

fn absolute_utf8(dir: &Path) -> Result<Utf8PathBuf> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let absolute = std::path::absolute(dir).map_err(|e| {
        Box::new(Error::Io {
            path: dir.to_path_buf(),
            source: e,
        })
    })?;
    Utf8PathBuf::from_path_buf(absolute).map_err(|path| Box::new(Error::NonUtf8Path { path }))
}
