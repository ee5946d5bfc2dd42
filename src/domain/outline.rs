// ============================================================
// Layer 3: Outline
// ============================================================
// What a finished document looks like from the outside: its
// headings in order and the cell text of every table. Produced
// by reading a .docx back, so it only holds plain strings.

use serde::{Deserialize, Serialize};

use crate::domain::report::is_numbered;

/// A heading found in an existing document; level 0 is the title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineHeading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineTable {
    /// Row-major cell text, header row first
    pub rows: Vec<Vec<String>>,
}

impl OutlineTable {
    /// Widest row; equal to every row's width in a well-formed table
    pub fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub headings: Vec<OutlineHeading>,
    pub tables: Vec<OutlineTable>,
}

impl Outline {
    /// Level-1 headings that start with a chapter number
    pub fn chapters(&self) -> Vec<&str> {
        self.headings
            .iter()
            .filter(|h| h.level == 1 && is_numbered(&h.text))
            .map(|h| h.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> OutlineHeading {
        OutlineHeading {
            level,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_chapters_filters_by_level_and_number() {
        let outline = Outline {
            headings: vec![
                heading(0, "Documentação Técnica"),
                heading(1, "Sumário"),
                heading(1, "1. App"),
                heading(2, "1.1 Dados"),
                heading(1, "2. Banco"),
            ],
            tables: Vec::new(),
        };
        assert_eq!(outline.chapters(), ["1. App", "2. Banco"]);
    }

    #[test]
    fn test_table_shape_helpers() {
        let table = OutlineTable {
            rows: vec![
                vec!["Item".into(), "Detalhe".into()],
                vec!["Região".into(), "us-central".into()],
            ],
        };
        assert_eq!(table.columns(), 2);
        assert_eq!(table.header().unwrap(), ["Item", "Detalhe"]);
        assert_eq!(table.data_rows().len(), 1);

        let empty = OutlineTable::default();
        assert_eq!(empty.columns(), 0);
        assert!(empty.header().is_none());
        assert!(empty.data_rows().is_empty());
    }
}
