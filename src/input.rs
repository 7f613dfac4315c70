use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Where the recordings to convert come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Explicit files, converted in the order given.
    Files(Vec<PathBuf>),
    /// Every file below `dir` whose name ends with `suffix`.
    Directory { dir: PathBuf, suffix: String },
}

impl InputSource {
    /// Produce the files to convert.
    ///
    /// Explicit files are returned untouched, without checking that they exist.
    /// Directory scans are recursive and keep the order the filesystem reports
    /// entries in, so callers must not rely on any particular ordering.
    pub fn resolve(&self) -> Result<Vec<PathBuf>> {
        match self {
            InputSource::Files(files) => Ok(files.clone()),
            InputSource::Directory { dir, suffix } => scan_directory(dir, suffix),
        }
    }
}

fn scan_directory(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    debug!(dir = %dir.display(), suffix, "scanning input directory");

    let mut files = Vec::new();

    for entry_result in WalkDir::new(dir).min_depth(1) {
        let entry = entry_result.map_err(|source| Error::Walk {
            dir: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(suffix) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
