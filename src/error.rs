// ============================================================
// Error Taxonomy
// ============================================================
// Every failure the generator can hit while building, saving
// or reading back a report.
//
// The write-side variants (HomeDirUnavailable, WriteFailure,
// Package) are what the user sees as "Erro ao gerar
// documentação". The CLI catches them once at the top level
// and prints them; nothing retries.
//
// Reference: Rust Book §9 (Error Handling)

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The platform reports no home directory for this user
    #[error("could not determine the user's home directory")]
    HomeDirUnavailable,

    /// Creating or truncating the output file failed
    /// (missing directory, permissions, read-only filesystem).
    /// The io cause is left to the `source()` chain so `{:#}`
    /// prints it once.
    #[error("cannot write '{}'", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// docx-rs could not pack the document into the zip container
    #[error("cannot package document '{}': {reason}", path.display())]
    Package { path: PathBuf, reason: String },

    /// An existing file could not be opened or parsed as .docx
    #[error("cannot read document '{}': {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("table row has {found} cells but the table declares {expected} columns")]
    RowWidth { expected: usize, found: usize },

    #[error("heading level {0} is out of range (0-3)")]
    InvalidHeadingLevel(u8),
}

pub type ReportResult<T> = Result<T, ReportError>;
