// ============================================================
// Layer 5: Paragraph Styles and Numbering
// ============================================================
// docx-rs starts from an almost empty styles.xml, so every
// style the report references has to be registered here:
//
//   Title, Heading1..Heading3 → heading levels 0-3
//   ListNumber                → table of contents entries
//   IntenseQuote              → code and JSON samples
//
// ListNumber paragraphs are also bound to a decimal abstract
// numbering ("1.", "2.", ...), which is what word processors
// do for their built-in "List Number" style.
//
// Sizes are in half-points (22 = 11 pt).

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering,
    SpecialIndentType, Start, Style, StyleType,
};

/// Numbering instance referenced by ListNumber paragraphs
pub const LIST_NUMBERING_ID: usize = 1;
const LIST_ABSTRACT_ID: usize = 1;

const HEADING_COLOR: &str = "2F5496";
const QUOTE_COLOR: &str = "4472C4";

/// Add every style and the list numbering the renderer refers to
pub fn register(docx: Docx) -> Docx {
    docx.add_style(
        Style::new("Title", StyleType::Paragraph)
            .name("Title")
            .size(56),
    )
    .add_style(
        Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .size(32)
            .bold()
            .color(HEADING_COLOR),
    )
    .add_style(
        Style::new("Heading2", StyleType::Paragraph)
            .name("Heading 2")
            .size(26)
            .bold()
            .color(HEADING_COLOR),
    )
    .add_style(
        Style::new("Heading3", StyleType::Paragraph)
            .name("Heading 3")
            .size(24)
            .bold()
            .color(HEADING_COLOR),
    )
    .add_style(Style::new("ListNumber", StyleType::Paragraph).name("List Number"))
    .add_style(
        Style::new("IntenseQuote", StyleType::Paragraph)
            .name("Intense Quote")
            .italic()
            .color(QUOTE_COLOR),
    )
    .add_abstract_numbering(
        AbstractNumbering::new(LIST_ABSTRACT_ID).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("decimal"),
                LevelText::new("%1."),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(LIST_NUMBERING_ID, LIST_ABSTRACT_ID))
}
