//! Filesystem utilities for whole-document atomic writes.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` by writing a sibling temp file and
/// renaming it over the destination.
///
/// A crash mid-write leaves either the old document or the new one on disk,
/// never a truncated mix of both.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
/// The temp file is removed on failure.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(destination);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    rename_with_fallback(&temp_path, destination)
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "wallet".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

/// Rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("wallet_data.json");

        write_atomic(&dest, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomic_replaces_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("wallet_data.json");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_atomic_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("wallet_data.json");

        assert!(write_atomic(&dest, b"{}").is_err());
        assert!(!dest.exists());
    }
}
