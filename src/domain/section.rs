// ============================================================
// Layer 3: Section Domain Type
// ============================================================
// A heading in the report: a level plus its literal title.
//
// Levels follow the word-processor convention:
//   0 → document title ("Title" style)
//   1 → chapter        ("Heading 1")
//   2 → sub-section    ("Heading 2")
//   3 → minor heading  ("Heading 3")
//
// Anything deeper is rejected; the report never needs it.

use serde::{Deserialize, Serialize};

use crate::domain::block::Alignment;
use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    Title,
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Numeric level, 0 for the title
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::Title => 0,
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }

    /// Paragraph style id used in styles.xml
    pub fn style_id(self) -> &'static str {
        match self {
            HeadingLevel::Title => "Title",
            HeadingLevel::One => "Heading1",
            HeadingLevel::Two => "Heading2",
            HeadingLevel::Three => "Heading3",
        }
    }

    /// Inverse of `style_id`, used when reading a document back
    pub fn from_style_id(id: &str) -> Option<Self> {
        if id == "Title" {
            return Some(HeadingLevel::Title);
        }
        let depth: u8 = id.strip_prefix("Heading")?.parse().ok()?;
        if depth == 0 {
            return None;
        }
        HeadingLevel::try_from(depth).ok()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = ReportError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(HeadingLevel::Title),
            1 => Ok(HeadingLevel::One),
            2 => Ok(HeadingLevel::Two),
            3 => Ok(HeadingLevel::Three),
            other => Err(ReportError::InvalidHeadingLevel(other)),
        }
    }
}

/// One heading, appended once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub level: HeadingLevel,
    pub title: String,
    pub alignment: Alignment,
}

impl Section {
    pub fn new(level: HeadingLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            alignment: Alignment::Left,
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_zero_to_three_are_accepted() {
        for raw in 0..=3u8 {
            let level = HeadingLevel::try_from(raw).unwrap();
            assert_eq!(level.depth(), raw);
        }
    }

    #[test]
    fn test_level_four_is_rejected() {
        let err = HeadingLevel::try_from(4).unwrap_err();
        assert!(matches!(err, ReportError::InvalidHeadingLevel(4)));
    }

    #[test]
    fn test_style_id_round_trips() {
        for level in [
            HeadingLevel::Title,
            HeadingLevel::One,
            HeadingLevel::Two,
            HeadingLevel::Three,
        ] {
            assert_eq!(HeadingLevel::from_style_id(level.style_id()), Some(level));
        }
        assert_eq!(HeadingLevel::from_style_id("IntenseQuote"), None);
        assert_eq!(HeadingLevel::from_style_id("Heading0"), None);
        assert_eq!(HeadingLevel::from_style_id("Heading4"), None);
    }
}
