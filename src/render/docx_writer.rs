// ============================================================
// Layer 5: .docx Writer
// ============================================================
// Walks a Report front to back and builds the matching docx-rs
// tree, then packs it into the zip container on disk.
//
// Block → docx-rs mapping:
//   Heading    → Paragraph with style Title / HeadingN
//   Paragraph  → Paragraph with optional style, one Run; each
//                '\n' in the text becomes a line break
//   Table      → Table with grid borders, header row first
//   PageBreak  → Paragraph holding a single page break
//
// The output file is created with File::create, which truncates
// an existing file, so re-running replaces the previous report.
//
// Reference: docx-rs crate documentation

use std::{fs::File, path::Path};

use docx_rs::{
    AlignmentType, BreakType, Docx, Header, IndentLevel, NumberingId, Paragraph, Run,
    RunFonts, Table, TableCell, TableRow,
};
use serde::{Deserialize, Serialize};

use crate::domain::block::{Alignment, Block, ParagraphStyle, TableBlock, TextBlock};
use crate::domain::report::Report;
use crate::domain::section::Section;
use crate::domain::traits::ReportWriter;
use crate::error::{ReportError, ReportResult};
use crate::render::styles::{self, LIST_NUMBERING_ID};

/// Text width of an A4/Letter page with default margins, in twips
const TEXT_WIDTH_TWIPS: usize = 9000;

/// Document-wide run defaults written into styles.xml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub font_family: String,
    /// Half-points, so 22 is 11 pt
    pub font_size_half_points: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size_half_points: 22,
        }
    }
}

/// Renders a Report with docx-rs and saves it as a .docx file.
/// Stateless apart from its RenderConfig, so one writer can save
/// any number of reports.
pub struct DocxWriter {
    config: RenderConfig,
}

impl DocxWriter {
    /// Create a writer with explicit fonts; `default()` gives Calibri 11 pt
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Build the docx-rs document for `report` without touching disk
    pub fn render(&self, report: &Report) -> Docx {
        let fonts = RunFonts::new()
            .ascii(&self.config.font_family)
            .hi_ansi(&self.config.font_family)
            .cs(&self.config.font_family);

        let header = Header::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(&report.header_text))
                .align(AlignmentType::Center),
        );

        let mut docx = styles::register(Docx::new())
            .default_fonts(fonts)
            .default_size(self.config.font_size_half_points)
            .header(header);

        for block in report.blocks() {
            docx = match block {
                Block::Heading(section) => docx.add_paragraph(heading(section)),
                Block::Paragraph(text) => docx.add_paragraph(paragraph(text)),
                Block::Table(table) => docx.add_table(grid_table(table)),
                Block::PageBreak => docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                ),
            };
        }

        tracing::debug!("Rendered {} blocks", report.blocks().len());
        docx
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl ReportWriter for DocxWriter {
    fn write(&self, report: &Report, path: &Path) -> ReportResult<()> {
        let docx = self.render(report);

        let file = File::create(path).map_err(|source| ReportError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;

        docx.build()
            .pack(file)
            .map_err(|e| ReportError::Package {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Packed document into '{}'", path.display());
        Ok(())
    }
}

fn align(p: Paragraph, alignment: Alignment) -> Paragraph {
    match alignment {
        Alignment::Left => p,
        Alignment::Center => p.align(AlignmentType::Center),
    }
}

fn heading(section: &Section) -> Paragraph {
    let p = Paragraph::new()
        .add_run(Run::new().add_text(&section.title))
        .style(section.level.style_id());
    align(p, section.alignment)
}

fn paragraph(block: &TextBlock) -> Paragraph {
    let mut p = Paragraph::new();
    if !block.text.is_empty() {
        p = p.add_run(text_run(block));
    }
    if let Some(style_id) = block.style.style_id() {
        p = p.style(style_id);
    }
    if block.style == ParagraphStyle::ListNumber {
        p = p.numbering(NumberingId::new(LIST_NUMBERING_ID), IndentLevel::new(0));
    }
    align(p, block.alignment)
}

/// One run, with a line break between consecutive lines
fn text_run(block: &TextBlock) -> Run {
    block
        .lines()
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        })
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn grid_table(table: &TableBlock) -> Table {
    let rows: Vec<TableRow> = std::iter::once(table.header())
        .chain(table.rows().iter().map(Vec::as_slice))
        .map(|row| TableRow::new(row.iter().map(|text| cell(text)).collect()))
        .collect();

    let column_width = TEXT_WIDTH_TWIPS / table.columns().max(1);
    Table::new(rows).set_grid(vec![column_width; table.columns()])
}
