// ============================================================
// Layer 6: Document Outline Reader
// ============================================================
// Reads a .docx back with docx-rs and reports what a reader
// would see in the navigation pane: the headings in order, plus
// the cell text of every table.
//
// The docx-rs tree we walk:
//   Document
//     └── children: Vec<DocumentChild>
//           ├── Paragraph → style id decides heading level
//           │     └── Run → Text / Break
//           └── Table
//                 └── TableRow → TableCell → Paragraph
//
// Headings are recognised by style id (Title, Heading1..3), the
// same ids the renderer writes.
//
// Reference: docx-rs crate documentation

use std::{fs, path::Path};

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use crate::domain::outline::{Outline, OutlineHeading, OutlineTable};
use crate::domain::section::HeadingLevel;
use crate::domain::traits::OutlineSource;
use crate::error::{ReportError, ReportResult};

/// Reads headings and table cells out of an existing .docx.
/// Holds no state; every call opens the file afresh.
pub struct DocxOutlineReader;

impl DocxOutlineReader {
    /// Create a reader; equivalent to `default()`
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxOutlineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineSource for DocxOutlineReader {
    fn outline(&self, path: &Path) -> ReportResult<Outline> {
        let unreadable = |reason: String| ReportError::Unreadable {
            path: path.to_path_buf(),
            reason,
        };

        let bytes = fs::read(path).map_err(|e| unreadable(e.to_string()))?;
        let docx = read_docx(&bytes).map_err(|e| unreadable(format!("{e:?}")))?;

        let mut outline = Outline::default();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(para) => {
                    let level = para
                        .property
                        .style
                        .as_ref()
                        .and_then(|s| HeadingLevel::from_style_id(&s.val));
                    if let Some(level) = level {
                        outline.headings.push(OutlineHeading {
                            level: level.depth(),
                            text: paragraph_text(para),
                        });
                    }
                }
                DocumentChild::Table(table) => outline.tables.push(table_cells(table)),
                _ => {}
            }
        }

        tracing::debug!(
            "Read {} headings and {} tables from '{}'",
            outline.headings.len(),
            outline.tables.len(),
            path.display()
        );
        Ok(outline)
    }
}

/// Concatenate the text runs of a paragraph; line breaks become '\n'
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

// Rows and cells are single-variant enums in docx-rs today
#[allow(irrefutable_let_patterns)]
fn table_cells(table: &Table) -> OutlineTable {
    let mut rows = Vec::new();
    for row in &table.rows {
        let TableChild::TableRow(row) = row else {
            continue;
        };
        let mut cells = Vec::new();
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            let text: Vec<String> = cell
                .children
                .iter()
                .filter_map(|c| match c {
                    TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
                    _ => None,
                })
                .collect();
            cells.push(text.join("\n"));
        }
        rows.push(cells);
    }
    OutlineTable { rows }
}
