//! Check command report data structures.

use std::path::PathBuf;

use camino::Utf8PathBuf;

use super::{
    output::{Output, Report},
    plural,
};

/// Report data from checking a project.
#[derive(Debug)]
pub struct CheckReport {
    /// Configuration file, which may not exist when defaults are used.
    pub config_path: PathBuf,
    pub registry_path: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
    /// Scanned files, including those without a component.
    pub file_count: usize,
    /// Tag names in registry order.
    pub tags: Vec<String>,
    pub collections: Vec<String>,
    pub import_groups: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("{} is valid", self.registry_path));
        out.newline();

        out.key_value_indented("config", &self.config_path.display().to_string());
        out.key_value_indented("output", self.output_path.as_str());
        out.key_value_indented(
            "files",
            &format!(
                "{} scanned, {} with component{}",
                self.file_count,
                self.tags.len(),
                plural(self.tags.len())
            ),
        );
        out.key_value_indented("import sources", &self.import_groups.to_string());

        if !self.collections.is_empty() {
            out.newline();
            out.section(&format!("Collections ({})", self.collections.len()));
            for collection in &self.collections {
                out.list_item(collection);
            }
        }

        if !self.tags.is_empty() {
            out.newline();
            out.section(&format!("Components ({})", self.tags.len()));
            for tag in &self.tags {
                out.list_item(&format!("<{}>", tag));
            }
        }
    }
}
