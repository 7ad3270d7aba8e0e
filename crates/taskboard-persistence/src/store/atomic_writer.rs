use std::io::Write;
use std::path::Path;
use taskboard_core::{TaskboardError, TaskboardResult};
use tokio::fs;

/// Whole-file writer built on write-to-temp-then-rename, so a crash mid-write
/// leaves the previous contents in place.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TaskboardResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };
        fs::create_dir_all(&parent).await?;

        let target = path.to_path_buf();
        let bytes = data.to_vec();
        // The temp file must live on the same filesystem as the target.
        tokio::task::spawn_blocking(move || -> TaskboardResult<()> {
            let mut temp_file = tempfile::NamedTempFile::new_in(&parent)?;
            temp_file.write_all(&bytes)?;
            temp_file.as_file().sync_all()?;
            temp_file
                .persist(&target)
                .map_err(|e| TaskboardError::Io(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| TaskboardError::Internal(e.to_string()))??;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Reads the file, or `None` when it does not exist yet.
    pub async fn read_if_exists(path: &Path) -> TaskboardResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
