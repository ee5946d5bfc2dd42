// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Filesystem concerns that sit around the report itself:
//
//   output_path.rs - resolves <home>/Desktop/<file>
//                    using the directories crate
//
//   reader.rs      - reads a finished .docx back into an
//                    Outline (headings + tables) with docx-rs
//
// Reference: Rust Book §9 (Error Handling)

/// Output location resolution
pub mod output_path;

/// Read-back of .docx outlines
pub mod reader;
