//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use std::fs;
use std::io;
use std::path::Path;

/// Atomically write bytes to a file
///
/// Uses temp file + rename so the target either keeps its previous
/// content or holds the new content in full, never a partial write.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> io::Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, target_path)?;

    Ok(())
}
