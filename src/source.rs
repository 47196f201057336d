//! Read-only access to the storage the resolver probes.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Trait describing the read-only operations the resolver needs from storage.
///
/// Errors are reported faithfully here; deciding to swallow them is the resolver's job.
pub trait AssetSource {
    /// Returns `Ok(true)` when `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> io::Result<bool>;

    /// Returns the names of the entries in `dir` that resolve to regular files, in listing
    /// order. Symlinks are followed; dangling links and links to directories are left out.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// [`AssetSource`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn is_file(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => {
                    names.push(entry.file_name().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "skipping unreadable entry");
                }
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn is_file_distinguishes_files_directories_and_missing_paths() -> io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::write(root.join("photo.png"), b"png")?;
        fs::create_dir(root.join("folder.png"))?;

        let source = FsAssetSource;
        assert!(source.is_file(&root.join("photo.png"))?);
        assert!(!source.is_file(&root.join("folder.png"))?);
        assert!(!source.is_file(&root.join("missing.png"))?);
        Ok(())
    }

    #[test]
    fn list_files_skips_directories() -> io::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::write(root.join("a.png"), b"a")?;
        fs::write(root.join("b.txt"), b"b")?;
        fs::create_dir(root.join("nested"))?;

        let mut names = FsAssetSource.list_files(root)?;
        names.sort();
        assert_eq!(names, vec!["a.png".to_string(), "b.txt".to_string()]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn list_files_follows_symlinks() -> io::Result<()> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let root = temp.path();
        fs::write(root.join("real.png"), b"png")?;
        fs::create_dir(root.join("realdir"))?;
        symlink(root.join("real.png"), root.join("linked.png"))?;
        symlink(root.join("realdir"), root.join("album.png"))?;
        symlink(root.join("gone.jpg"), root.join("dangling.jpg"))?;

        let mut names = FsAssetSource.list_files(root)?;
        names.sort();
        assert_eq!(names, vec!["linked.png".to_string(), "real.png".to_string()]);
        Ok(())
    }

    #[test]
    fn list_files_errors_for_missing_directory() {
        let temp = tempdir().unwrap();
        assert!(FsAssetSource.list_files(&temp.path().join("gone")).is_err());
    }
}
