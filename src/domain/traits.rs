// ============================================================
// Layer 3: Core Traits
// ============================================================
// The application layer talks to output formats only through
// these traits, so a use case can be driven by the real .docx
// implementations or by test doubles.
//
// Implementations:
//   - DocxWriter        → ReportWriter  (render/docx_writer.rs)
//   - DocxOutlineReader → OutlineSource (infra/reader.rs)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::outline::Outline;
use crate::domain::report::Report;
use crate::error::ReportResult;

// ─── ReportWriter ─────────────────────────────────────────────────────────────
/// Serializes a report to a file, replacing whatever is there.
pub trait ReportWriter {
    fn write(&self, report: &Report, path: &Path) -> ReportResult<()>;
}

// ─── OutlineSource ────────────────────────────────────────────────────────────
/// Reads the heading/table outline of an existing document.
pub trait OutlineSource {
    fn outline(&self, path: &Path) -> ReportResult<Outline>;
}
