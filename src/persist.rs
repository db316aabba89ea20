//! Disk I/O helpers: whole-file load and whole-file overwrite.
//!
//! Every call opens, reads or writes, and closes the file on its own. Nothing is
//! cached between calls, so the file on disk is the only state there is.
//!
//! The rename-over approach used by [`WriteMode::Atomic`] is close to atomic on
//! most platforms. On FAT32 or network shares there are no hard guarantees.

use crate::error::{Error, Result};
use crate::serializer::Serializer;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// How a save replaces the file on disk. Both modes rewrite the full collection.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target.
    #[default]
    Atomic,
    /// Truncate the target and write it directly.
    InPlace,
}

/// Reads and decodes the file at `path`. Returns an empty collection if the file
/// is missing, empty, or whitespace-only (not an error).
pub async fn load<T, S>(path: &Path, serializer: &S) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: Serializer,
{
    let bytes = match fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::Io(e.to_string())),
    };
    let text = std::str::from_utf8(&bytes).map_err(|e| Error::Malformed(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serializer.deserialize(text.as_bytes())
}

/// Replace the contents of `path` with `bytes` using the given mode.
pub async fn write(path: &Path, bytes: &[u8], mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Atomic => atomic_write(path, bytes).await,
        WriteMode::InPlace => fs::write(path, bytes).await.map_err(Error::from),
    }
}

/// Write `bytes` to a sibling `<file>.<pid>.<seq>.tmp` and then rename over `path`. This avoids
/// leaving a half-written file if the process crashes mid-write.
///
/// Each call gets its own temp name, so overlapping writers never share a
/// half-written file. The last rename still wins. On failure the temp file is
/// removed.
pub async fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);
    if let Err(e) = fs::write(&tmp, bytes).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_extension(format!("{ext}.{}.{seq}.tmp", std::process::id()))
}
