// ============================================================
// Layer 3: Report Blocks
// ============================================================
// The body of a report is a flat, ordered list of blocks.
// Renderers walk it front to back, so document order is
// exactly append order.
//
//   Block::Heading    → a Section (level + title)
//   Block::Paragraph  → text with a paragraph style
//   Block::Table      → header row + data rows
//   Block::PageBreak  → start the next chapter on a new page

use serde::{Deserialize, Serialize};

use crate::domain::section::Section;
use crate::error::{ReportError, ReportResult};

/// Named paragraph styles the report uses besides headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    /// Auto-numbered list entry (table of contents)
    ListNumber,
    /// Indented, italic block used to set off code and JSON samples
    IntenseQuote,
}

impl ParagraphStyle {
    /// Style id in styles.xml, `None` for the document default
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            ParagraphStyle::Normal => None,
            ParagraphStyle::ListNumber => Some("ListNumber"),
            ParagraphStyle::IntenseQuote => Some("IntenseQuote"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// A paragraph of literal text.
///
/// `text` may hold `\n`; each newline becomes a line break
/// inside the same paragraph so code samples keep their shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub style: ParagraphStyle,
    pub alignment: Alignment,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::Normal,
            alignment: Alignment::Left,
        }
    }

    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The text split on newlines, one entry per rendered line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A grid table: one header row followed by data rows.
///
/// Every row has exactly `columns()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Build from literal arrays; the shared `N` makes a
    /// mismatched row a compile error.
    pub fn from_literals<const N: usize>(header: [&str; N], rows: &[[&str; N]]) -> Self {
        Self {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    /// An empty table with the given header row
    pub fn with_header<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row, rejecting it when its width differs
    /// from the header.
    pub fn push_row<I, S>(&mut self, row: I) -> ReportResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(ReportError::RowWidth {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.header.len()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading(Section),
    Paragraph(TextBlock),
    Table(TableBlock),
    PageBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_table_keeps_header_and_rows() {
        let t = TableBlock::from_literals(["Item", "Detalhe"], &[["Provider", "GCP"]]);
        assert_eq!(t.columns(), 2);
        assert_eq!(t.header(), ["Item", "Detalhe"]);
        assert_eq!(t.rows(), [vec!["Provider".to_string(), "GCP".to_string()]]);
    }

    #[test]
    fn test_push_row_rejects_wrong_width() {
        let mut t = TableBlock::with_header(["Métrica", "Média", "Pior 1%"]);
        t.push_row(["app_start", "1.1s", "3.7s"]).unwrap();

        let err = t.push_row(["screen_view", "1.3s"]).unwrap_err();
        assert!(matches!(err, ReportError::RowWidth { expected: 3, found: 2 }));
        // The rejected row is not kept
        assert_eq!(t.rows().len(), 1);
    }

    #[test]
    fn test_text_lines_split_on_newline() {
        let block = TextBlock::new("{\n  id: string\n}").style(ParagraphStyle::IntenseQuote);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines, ["{", "  id: string", "}"]);
        assert_eq!(block.style.style_id(), Some("IntenseQuote"));
    }
}
