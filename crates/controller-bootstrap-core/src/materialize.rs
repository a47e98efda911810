//! Writes rendered files to disk.
//!
//! Writes always replace existing files, so rendering the same inputs twice
//! converges on the same tree.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::{Error, Result};

/// Write `bytes` to `destination`, creating parent directories as needed
pub fn write(destination: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)
        .map_err(|e| Error::not_writable(destination, e))?;
    file.write_all(bytes)
        .map_err(|e| Error::not_writable(destination, e))?;

    log::debug!("Wrote {} ({} bytes)", destination.display(), bytes.len());
    Ok(())
}

/// Makes sure `dir` exists and is a directory.
///
/// Returns whether the directory already existed.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(Error::not_writable(
            dir,
            io::Error::new(
                io::ErrorKind::Other,
                format!("expected {} to be a directory", dir.display()),
            ),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| Error::not_writable(dir, e))?;
            Ok(false)
        }
        Err(e) => Err(Error::not_writable(dir, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parents() -> Result<()> {
        let root = tempdir()?;
        let dest = root.path().join("pkg/resource/repository/manager.go");

        write(&dest, b"package repository")?;
        assert_eq!(fs::read_to_string(&dest)?, "package repository");
        Ok(())
    }

    #[test]
    fn test_write_overwrites() -> Result<()> {
        let root = tempdir()?;
        let dest = root.path().join("README.md");
        fs::write(&dest, "a much longer hand-written readme")?;

        write(&dest, b"generated")?;
        assert_eq!(fs::read_to_string(&dest)?, "generated");
        Ok(())
    }

    #[test]
    fn test_parent_that_is_a_file_is_not_writable() -> Result<()> {
        let root = tempdir()?;
        fs::write(root.path().join("apis"), "not a directory")?;

        let err = write(&root.path().join("apis/doc.go"), b"package apis").unwrap_err();
        assert!(matches!(err, Error::NotWritable { ref path, .. } if path.ends_with("apis")));
        Ok(())
    }

    #[test]
    fn test_destination_that_is_a_directory_is_not_writable() -> Result<()> {
        let root = tempdir()?;
        fs::create_dir_all(root.path().join("OWNERS"))?;

        let err = write(&root.path().join("OWNERS"), b"approvers: []").unwrap_err();
        assert!(matches!(err, Error::NotWritable { .. }));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_parent_is_not_writable() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir()?;
        let locked = root.path().join("locked");
        fs::create_dir_all(&locked)?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555))?;

        // Permission bits do not bind a privileged user
        if fs::write(locked.join(".check"), b"").is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let dest = locked.join("pkg/version/version.go");
        let result = write(&dest, b"package version");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        let err = result.unwrap_err();
        assert!(matches!(err, Error::NotWritable { ref path, .. } if path.ends_with("pkg/version")));
        assert!(!locked.join("pkg").exists());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_reports_existing() -> Result<()> {
        let root = tempdir()?;
        assert!(ensure_dir(root.path())?);
        assert!(!ensure_dir(&root.path().join("new/nested"))?);
        assert!(root.path().join("new/nested").is_dir());
        Ok(())
    }
}
