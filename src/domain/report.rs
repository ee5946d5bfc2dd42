// ============================================================
// Layer 3: Report
// ============================================================
// The in-memory document: a page-header line plus the ordered
// list of blocks. Builder methods mirror how an author writes
// a document top to bottom: add a heading, add a paragraph,
// add a table, break the page.
//
// A Report knows nothing about .docx. Layer 5 (render) turns it
// into a word-processor file; tests inspect it directly.

use serde::{Deserialize, Serialize};

use crate::domain::block::{Alignment, Block, ParagraphStyle, TableBlock, TextBlock};
use crate::domain::section::{HeadingLevel, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Text shown in the page header of every page
    pub header_text: String,
    blocks: Vec<Block>,
}

impl Report {
    pub fn new(header_text: impl Into<String>) -> Self {
        Self {
            header_text: header_text.into(),
            blocks: Vec::new(),
        }
    }

    pub fn heading(&mut self, title: &str, level: HeadingLevel) -> &mut Self {
        self.blocks.push(Block::Heading(Section::new(level, title)));
        self
    }

    /// A heading on its own centered line (title page)
    pub fn centered_heading(&mut self, title: &str, level: HeadingLevel) -> &mut Self {
        self.blocks.push(Block::Heading(
            Section::new(level, title).align(Alignment::Center),
        ));
        self
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.blocks.push(Block::Paragraph(TextBlock::new(text)));
        self
    }

    pub fn styled(&mut self, text: &str, style: ParagraphStyle) -> &mut Self {
        self.blocks
            .push(Block::Paragraph(TextBlock::new(text).style(style)));
        self
    }

    pub fn centered(&mut self, text: &str) -> &mut Self {
        self.blocks
            .push(Block::Paragraph(TextBlock::new(text).align(Alignment::Center)));
        self
    }

    /// An empty paragraph, used as vertical spacing
    pub fn blank(&mut self) -> &mut Self {
        self.blocks.push(Block::Paragraph(TextBlock::new("")));
        self
    }

    pub fn table(&mut self, table: TableBlock) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.blocks.push(Block::PageBreak);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All headings, in document order
    pub fn headings(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(s) => Some(s),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Level-1 headings that open a numbered chapter ("N. ...")
    pub fn chapter_titles(&self) -> Vec<&str> {
        self.headings()
            .filter(|s| s.level == HeadingLevel::One && is_numbered(&s.title))
            .map(|s| s.title.as_str())
            .collect()
    }

    /// The table that directly follows the heading `title`,
    /// allowing other paragraphs but no other heading in between.
    #[cfg(test)]
    pub fn table_after(&self, title: &str) -> Option<&TableBlock> {
        let start = self.blocks.iter().position(|b| {
            matches!(b, Block::Heading(s) if s.title == title)
        })?;
        self.blocks[start + 1..]
            .iter()
            .take_while(|b| !matches!(b, Block::Heading(_)))
            .find_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
    }
}

/// True for titles like "3. Entrega 03: Armazenamento"
pub fn is_numbered(title: &str) -> bool {
    match title.split_once(". ") {
        Some((num, _)) => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_keep_append_order() {
        let mut r = Report::new("header");
        r.heading("1. First", HeadingLevel::One)
            .paragraph("body")
            .page_break()
            .heading("2. Second", HeadingLevel::One);

        let titles: Vec<&str> = r.headings().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["1. First", "2. Second"]);
        assert_eq!(r.blocks().len(), 4);
        assert_eq!(r.blocks()[2], Block::PageBreak);
    }

    #[test]
    fn test_chapter_titles_skip_unnumbered_headings() {
        let mut r = Report::new("header");
        r.heading("Sumário", HeadingLevel::One)
            .heading("1. App", HeadingLevel::One)
            .heading("1.1 Dados", HeadingLevel::Two)
            .heading("2. Banco", HeadingLevel::One);

        assert_eq!(r.chapter_titles(), ["1. App", "2. Banco"]);
    }

    #[test]
    fn test_table_after_stops_at_next_heading() {
        let mut r = Report::new("header");
        r.heading("A", HeadingLevel::Two)
            .paragraph("no table here")
            .heading("B", HeadingLevel::Two)
            .table(TableBlock::from_literals(["x"], &[["1"]]));

        assert!(r.table_after("A").is_none());
        assert_eq!(r.table_after("B").map(|t| t.columns()), Some(1));
    }

    #[test]
    fn test_centered_heading_is_centered() {
        let mut r = Report::new("header");
        r.centered_heading("Title", HeadingLevel::Title);
        let first = r.headings().next().unwrap();
        assert_eq!(first.alignment, Alignment::Center);
        assert_eq!(first.level, HeadingLevel::Title);
    }

    #[test]
    fn test_is_numbered() {
        assert!(is_numbered("6. Considerações Finais"));
        assert!(!is_numbered("1.1 Dados da Instância"));
        assert!(!is_numbered("Sumário"));
        assert!(!is_numbered(". x"));
    }
}
