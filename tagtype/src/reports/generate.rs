//! Generate command report data structures.

use camino::Utf8PathBuf;
use tagtype_codegen_dts::GenerationSummary;
use tagtype_core::WriteResult;

use super::{
    output::{Output, Report},
    plural,
};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the declarations belong.
    pub path: Utf8PathBuf,
    pub summary: GenerationSummary,
    pub result: GenerationResult,
}

/// Result of declaration generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was persisted (or already up to date).
    Written(WriteResult),
    /// Dry-run preview with the generated content.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(status) => self.render_written(out, *status),
            GenerationResult::Preview(content) => self.render_preview(out, content),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, status: WriteResult) {
        let key = match status {
            WriteResult::Written => "Generated",
            WriteResult::Unchanged => "Unchanged",
        };
        out.key_value(key, self.path.as_str());
        out.newline();
        self.render_summary(out);
    }

    fn render_preview(&self, out: &mut dyn Output, content: &str) {
        out.divider(self.path.as_str());
        out.preformatted(content);
        out.divider("Summary");
        self.render_summary(out);
    }

    fn render_summary(&self, out: &mut dyn Output) {
        let s = &self.summary;
        out.key_value_indented("components", &s.components.to_string());
        out.key_value_indented("collections", &s.collections.to_string());
        out.key_value_indented(
            "imports",
            &format!(
                "{} from {} source{}",
                s.bindings,
                s.import_groups,
                plural(s.import_groups)
            ),
        );
        if s.renamed > 0 {
            out.key_value_indented("renamed", &s.renamed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            path: "/app/src/components.d.ts".into(),
            summary: GenerationSummary {
                components: 2,
                collections: 1,
                import_groups: 3,
                bindings: 4,
                renamed: 1,
            },
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(WriteResult::Written)).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Generated: /app/src/components.d.ts",
                "",
                "  components: 2",
                "  collections: 1",
                "  imports: 4 from 3 sources",
                "  renamed: 1",
            ]
        );
    }

    #[test]
    fn test_render_unchanged() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(WriteResult::Unchanged)).render(&mut out);

        assert_eq!(out.lines[0], "Unchanged: /app/src/components.d.ts");
    }

    #[test]
    fn test_render_preview() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Preview("declare global {}".to_string())).render(&mut out);

        assert_eq!(out.lines[0], "── /app/src/components.d.ts ──");
        assert_eq!(out.lines[1], "declare global {}");
        assert_eq!(out.lines[2], "── Summary ──");
    }
}
