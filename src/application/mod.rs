// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Workflow coordination only. Content comes from Layer 4, the
// file format from Layer 5, paths and read-back from Layer 6.
// No printing here (that's Layer 1).
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Build the report and write it to disk
pub mod generate_use_case;

// Read a written report back as an outline
pub mod outline_use_case;
