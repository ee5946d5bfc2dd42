// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing a report.
//
// Rules for this layer:
//   - NO docx-rs types here
//   - NO file I/O
//   - NO literal documentation content (that's Layer 4)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Heading levels and section records
pub mod section;

// Paragraphs, tables, page breaks
pub mod block;

// The ordered document and its builder
pub mod report;

// Read-back view of a finished document
pub mod outline;

// Seams between the application layer and file formats
pub mod traits;
