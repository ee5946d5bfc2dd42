// ============================================================
// Layer 2: OutlineUseCase
// ============================================================
// Reads an existing report back and renders its outline either
// as an indented heading tree or as JSON.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::outline::Outline;
use crate::domain::traits::OutlineSource;

/// Reads a document through `S` and formats what it found.
pub struct OutlineUseCase<S: OutlineSource> {
    source: S,
}

impl<S: OutlineSource> OutlineUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Headings and tables of the document at `path`
    pub fn read(&self, path: &Path) -> Result<Outline> {
        tracing::info!("Reading outline of '{}'", path.display());
        Ok(self.source.outline(path)?)
    }

    /// Two spaces of indent per heading level, then one line per
    /// table and a chapter count.
    pub fn to_text(outline: &Outline) -> String {
        let mut out = String::new();
        for h in &outline.headings {
            out.push_str(&"  ".repeat(h.level as usize));
            out.push_str(&h.text);
            out.push('\n');
        }
        for (i, t) in outline.tables.iter().enumerate() {
            let header = t.header().map(|h| h.join(" | ")).unwrap_or_default();
            out.push_str(&format!(
                "table {}: [{}] {} columns, {} data rows\n",
                i + 1,
                header,
                t.columns(),
                t.data_rows().len()
            ));
        }
        out.push_str(&format!("{} chapters\n", outline.chapters().len()));
        out
    }

    pub fn to_json(outline: &Outline) -> Result<String> {
        serde_json::to_string_pretty(outline).context("Cannot serialise outline")
    }
}
