// ============================================================
// Layer 5: Rendering
// ============================================================
// The only layer that imports docx-rs for writing. Everything
// above it deals in domain::Report; everything here turns that
// report into Office Open XML.
//
//   styles.rs      - paragraph styles and list numbering
//   docx_writer.rs - Report → docx_rs::Docx → file on disk
//
// Reference: docx-rs crate documentation

/// Style and numbering definitions registered on every document
pub mod styles;

/// Implements ReportWriter for .docx files
pub mod docx_writer;
