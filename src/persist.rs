//! Writes analysis results as pretty-printed JSON under the output directory.

use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Persists summaries to `<output_dir>/<filename>`.
///
/// Existing files are overwritten. Non-ASCII text is written verbatim.
pub struct ResultPersister {
    output_dir: PathBuf,
}

impl ResultPersister {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Serialize `results` to `filename` inside the output directory.
    ///
    /// Creates the directory (and parents) if needed. Returns the written
    /// path; any I/O or serialization failure is logged and returned.
    pub fn save<T: Serialize + ?Sized>(&self, results: &T, filename: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(filename);
        match self.write(results, &path) {
            Ok(()) => {
                tracing::info!("Results saved to {}", path.display());
                Ok(path)
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, results: &T, path: &Path) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let body = serde_json::to_string_pretty(results)?;
        fs::write(path, body)?;
        Ok(())
    }
}
