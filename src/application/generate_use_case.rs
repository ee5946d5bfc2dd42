// ============================================================
// Layer 2: GenerateUseCase
// ============================================================
// Produces the documentation file, start to finish:
//
//   Step 1: Resolve the output path          (Layer 6 - infra)
//   Step 2: Build the report for today        (Layer 4 - content)
//   Step 3: Render and write the .docx        (Layer 5 - render)
//
// The writer is a generic ReportWriter so tests can drive the
// workflow with a writer that fails on purpose.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::content::build_report;
use crate::domain::traits::ReportWriter;
use crate::infra::output_path::OutputTarget;

// ─── Generate Configuration ──────────────────────────────────────────────────
// Fixed by default; the CLI never changes it. Library callers and
// tests may point `output_dir` somewhere other than the Desktop.
/// File name, folder and page-header text for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub file_name:   String,
    pub desktop_dir: String,
    pub header_text: String,
    /// Overrides `<home>/<desktop_dir>` when set
    pub output_dir:  Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            file_name:   "Documentacao_CineAurora.docx".to_string(),
            desktop_dir: "Desktop".to_string(),
            header_text: "Documentação Técnica - Cine Aurora".to_string(),
            output_dir:  None,
        }
    }
}

impl GenerateConfig {
    fn target(&self) -> Result<OutputTarget> {
        Ok(match &self.output_dir {
            Some(dir) => OutputTarget::in_dir(dir, &self.file_name),
            None => OutputTarget::desktop(&self.desktop_dir, &self.file_name)?,
        })
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
/// Resolves the output path, builds the report and hands it to `W`.
/// The CLI uses a DocxWriter; tests swap in writers that fail.
pub struct GenerateUseCase<W: ReportWriter> {
    config: GenerateConfig,
    writer: W,
}

impl<W: ReportWriter> GenerateUseCase<W> {
    /// Wire a configuration to the writer that will save the report
    pub fn new(config: GenerateConfig, writer: W) -> Self {
        Self { config, writer }
    }

    /// Generate the report stamped with today's local date
    pub fn execute(&self) -> Result<PathBuf> {
        self.execute_on(Local::now().date_naive())
    }

    /// Generate the report stamped with `date` and return where it went
    pub fn execute_on(&self, date: NaiveDate) -> Result<PathBuf> {
        // ── Step 1: Where does the file go? ─────────────────────────────────
        let target = self.config.target()?;
        if target.exists() {
            tracing::warn!("Overwriting existing '{}'", target.path().display());
        }

        // ── Step 2: Assemble the literal content ────────────────────────────
        let report = build_report(&self.config.header_text, date)?;
        tracing::info!(
            "Built report: {} chapters, {} tables",
            report.chapter_titles().len(),
            report.tables().count()
        );

        // ── Step 3: Render and save ─────────────────────────────────────────
        self.writer.write(&report, target.path())?;
        tracing::info!("Saved report to '{}'", target.path().display());

        Ok(target.path().to_path_buf())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CHAPTERS;
    use crate::domain::outline::Outline;
    use crate::domain::report::Report;
    use crate::domain::traits::OutlineSource;
    use crate::error::{ReportError, ReportResult};
    use crate::infra::reader::DocxOutlineReader;
    use crate::render::docx_writer::DocxWriter;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn config_in(dir: &Path) -> GenerateConfig {
        GenerateConfig {
            output_dir: Some(dir.to_path_buf()),
            ..GenerateConfig::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
    }

    fn generate_and_read(dir: &Path) -> (PathBuf, Outline) {
        let use_case = GenerateUseCase::new(config_in(dir), DocxWriter::default());
        let path = use_case.execute_on(date()).unwrap();
        let outline = DocxOutlineReader::new().outline(&path).unwrap();
        (path, outline)
    }

    #[test]
    fn test_default_config_targets_desktop() {
        let config = GenerateConfig::default();
        assert_eq!(config.file_name, "Documentacao_CineAurora.docx");
        assert_eq!(config.desktop_dir, "Desktop");
        assert_eq!(config.header_text, "Documentação Técnica - Cine Aurora");
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_generates_file_at_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = generate_and_read(dir.path());

        assert_eq!(path, dir.path().join("Documentacao_CineAurora.docx"));
        assert!(path.is_file());
    }

    #[test]
    fn test_read_back_has_six_chapters_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let (_, outline) = generate_and_read(dir.path());

        assert_eq!(outline.chapters(), CHAPTERS.to_vec());
    }

    #[test]
    fn test_read_back_title_and_subheadings() {
        let dir = tempfile::tempdir().unwrap();
        let (_, outline) = generate_and_read(dir.path());

        let first = &outline.headings[0];
        assert_eq!((first.level, first.text.as_str()), (0, "Documentação Técnica"));
        assert!(outline
            .headings
            .iter()
            .any(|h| h.level == 3 && h.text == "Desempenho"));
    }

    #[test]
    fn test_read_back_tables() {
        let dir = tempfile::tempdir().unwrap();
        let (_, outline) = generate_and_read(dir.path());

        assert_eq!(outline.tables.len(), 3);

        // Dados da Instância, Descrição Técnica
        for table in &outline.tables[..2] {
            assert_eq!(table.columns(), 2);
            assert_eq!(table.header().unwrap(), ["Item", "Detalhe"]);
        }
        assert_eq!(outline.tables[0].data_rows().len(), 6);
        assert_eq!(outline.tables[1].data_rows().len(), 5);

        let perf = &outline.tables[2];
        assert_eq!(perf.columns(), 3);
        assert_eq!(perf.data_rows().len(), 2);
        assert_eq!(&perf.data_rows()[0][1..], &["1.1s", "3.7s"]);
        assert_eq!(&perf.data_rows()[1][1..], &["1.3s", "4.5s"]);
    }

    #[test]
    fn test_rerun_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Documentacao_CineAurora.docx");
        std::fs::write(&path, vec![b'x'; 1_000_000]).unwrap();

        let (first, outline) = generate_and_read(dir.path());
        let size = std::fs::metadata(&first).unwrap().len();
        assert!(size < 1_000_000, "stale bytes were kept");
        assert_eq!(outline.chapters().len(), 6);

        // A second run replaces the first instead of failing
        let (second, outline) = generate_and_read(dir.path());
        assert_eq!(first, second);
        assert_eq!(outline.chapters().len(), 6);
        assert_eq!(outline.tables.len(), 3);
    }

    #[test]
    fn test_missing_directory_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Desktop");
        let use_case = GenerateUseCase::new(config_in(&missing), DocxWriter::default());

        let err = use_case.execute_on(date()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::WriteFailure { .. })
        ));
        assert!(!missing.exists());
    }

    struct FailingWriter;

    impl ReportWriter for FailingWriter {
        fn write(&self, _report: &Report, path: &Path) -> ReportResult<()> {
            Err(ReportError::Package {
                path: path.to_path_buf(),
                reason: "disk full".to_string(),
            })
        }
    }

    #[test]
    fn test_writer_error_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = GenerateUseCase::new(config_in(dir.path()), FailingWriter);

        let err = use_case.execute_on(date()).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
