//! Filesystem store for uploaded user pictures.
//!
//! Files live flat in a single upload directory injected at construction.
//! Stored names follow `image_<epochMillis>_<original name>` so repeated
//! uploads of the same file never collide. Deletion comes in two flavors:
//! [`FileStore::delete`] is strict, while [`FileStore::discard`] logs and
//! swallows failures for the handler paths where a missing file must not
//! block a record mutation.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{Result, RosterError};

const UPLOAD_FIELD: &str = "image";

#[derive(Debug, Clone)]
pub struct FileStore {
    upload_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `upload_dir`, creating the directory if it
    /// does not exist yet.
    pub fn new(upload_dir: impl Into<PathBuf>) -> Result<Self> {
        let upload_dir = upload_dir.into();
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self { upload_dir })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Write `bytes` under a collision-resistant stored name and return
    /// that name. The file is fully on disk when this returns.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let stored = format!(
            "{}_{}_{}",
            UPLOAD_FIELD,
            Utc::now().timestamp_millis(),
            sanitize_file_name(original_name)
        );

        tokio::fs::write(self.upload_dir.join(&stored), bytes).await?;
        debug!("Stored upload {} ({} bytes)", stored, bytes.len());
        Ok(stored)
    }

    /// Remove a stored file. Names that are not plain file names (path
    /// separators, parent references) cannot name anything in the store.
    pub async fn delete(&self, filename: &str) -> Result<()> {
        let Some(path) = self.resolve(filename) else {
            return Err(RosterError::NotFound(format!(
                "no stored file named {filename}"
            )));
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Deleted stored file {}", filename);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(RosterError::NotFound(
                format!("no stored file named {filename}"),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort delete: failures are logged and swallowed.
    pub async fn discard(&self, filename: &str) {
        if let Err(e) = self.delete(filename).await {
            warn!("Failed to delete stored file {}: {}", filename, e);
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.resolve(filename).is_some_and(|path| path.is_file())
    }

    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename == ".." {
            return None;
        }
        Some(self.upload_dir.join(filename))
    }
}

/// Reduce a client-supplied name to its final path component so stored
/// names never carry directory structure.
fn sanitize_file_name(original: &str) -> String {
    Path::new(original)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty() && *name != "..")
        .unwrap_or("upload")
        .to_string()
}
