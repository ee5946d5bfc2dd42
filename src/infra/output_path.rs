// ============================================================
// Layer 6: Output Path
// ============================================================
// Where the report lands:
//
//   <home>/Desktop/Documentacao_CineAurora.docx
//
// The Desktop folder is looked up literally under the home
// directory, not through the platform's "desktop" user folder,
// and it is never created. If it is missing the write fails and
// the failure is reported like any other write error.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{ReportError, ReportResult};

/// A resolved output file path, before anything is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    /// `<home>/<desktop_dir>/<file_name>`
    pub fn desktop(desktop_dir: &str, file_name: &str) -> ReportResult<Self> {
        let dirs = BaseDirs::new().ok_or(ReportError::HomeDirUnavailable)?;
        Ok(Self::in_dir(dirs.home_dir().join(desktop_dir), file_name))
    }

    /// `<dir>/<file_name>`, for callers that choose their own folder
    pub fn in_dir(dir: impl Into<PathBuf>, file_name: &str) -> Self {
        Self {
            path: dir.into().join(file_name),
        }
    }

    /// Full path of the file to write
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when a previous report will be overwritten
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}
