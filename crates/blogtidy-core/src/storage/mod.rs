//! Disk writes with atomic finalize.
//!
//! Cached images are written to `<name>.part`, synced, then renamed to the
//! final name. A file under its final name is therefore always complete, and
//! an existence check is enough to treat it as cached.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `pic.png` → `pic.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `data` to `final_path` via a synced temp file and rename.
/// A stale temp file from an interrupted run is overwritten.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<()> {
    let tmp = temp_path(final_path);
    let result = write_and_sync(&tmp, data).and_then(|()| {
        std::fs::rename(&tmp, final_path).with_context(|| {
            format!("failed to rename {} to {}", tmp.display(), final_path.display())
        })
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

fn write_and_sync(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create temp file: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("write {}", path.display()))?;
    file.sync_all().context("storage sync failed")?;
    Ok(())
}

/// Replace a text file's content only when it differs, preserving mtime otherwise.
/// Returns true if the file was written.
pub fn write_if_changed(path: &Path, original: &str, updated: &str) -> Result<bool> {
    if original == updated {
        return Ok(false);
    }
    std::fs::write(path, updated).with_context(|| format!("write {}", path.display()))?;
    Ok(true)
}
