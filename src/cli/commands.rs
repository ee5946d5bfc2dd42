// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Running the binary with no arguments generates the report.
// `outline` is an inspection helper for an existing .docx.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write Documentacao_CineAurora.docx to ~/Desktop (default)
    Generate,

    /// Print the heading outline and table shapes of a .docx file
    Outline(OutlineArgs),
}

/// Arguments for `outline`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OutlineArgs {
    /// Document to inspect
    pub path: PathBuf,

    /// Emit JSON instead of an indented tree
    #[arg(long)]
    pub json: bool,
}
