//! Filesystem abstraction layer for testability
//!
//! This module provides a trait-based abstraction over the filesystem
//! operations the config patcher performs, enabling dependency injection
//! for testing without real filesystem access. Uses mockall for automatic
//! mock generation in test builds.

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait abstracting filesystem operations for dependency injection.
///
/// This trait allows mocking filesystem operations in tests, enabling
/// testing of the patcher's I/O error paths without touching the real
/// filesystem.
///
/// # Example (production)
/// ```ignore
/// use lanlink::fs_abstraction::{FileSystem, real_fs};
///
/// let content = real_fs().read_to_string(Path::new("frontend/lib/config/api_config.dart"))?;
/// ```
///
/// # Example (testing)
/// ```ignore
/// use lanlink::fs_abstraction::MockFileSystem;
///
/// let mut mock_fs = MockFileSystem::new();
/// mock_fs.expect_read_to_string()
///     .returning(|_| Ok("test content".to_string()));
/// ```
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Read file contents as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Rename a file, replacing the destination if one exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Real filesystem implementation using std::fs.
///
/// This is the production implementation that performs actual
/// filesystem operations.
#[derive(Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// Global filesystem instance for production use.
static REAL_FS: RealFileSystem = RealFileSystem;

/// Get a reference to the global real filesystem instance.
///
/// Use this function to obtain a filesystem instance for production code.
/// For testing, create a `MockFileSystem` instead.
pub fn real_fs() -> &'static RealFileSystem {
    &REAL_FS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_real_fs_read_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let fs = RealFileSystem;

        fs.write(&file_path, b"hello world").unwrap();

        let content = fs.read_to_string(&file_path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_real_fs_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let fs = RealFileSystem;

        assert!(!fs.exists(&file_path));

        fs.write(&file_path, b"test").unwrap();

        assert!(fs.exists(&file_path));
    }

    #[test]
    fn test_real_fs_rename_replaces_destination() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src.txt");
        let dst = temp_dir.path().join("dst.txt");

        let fs = RealFileSystem;

        fs.write(&src, b"new content").unwrap();
        fs.write(&dst, b"old content").unwrap();

        fs.rename(&src, &dst).unwrap();

        assert!(!fs.exists(&src));
        assert_eq!(fs.read_to_string(&dst).unwrap(), "new content");
    }

    #[test]
    fn test_real_fs_read_nonexistent() {
        let fs = RealFileSystem;
        let result = fs.read_to_string(Path::new("/nonexistent/path/file.txt"));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_real_fs_write_to_nonexistent_dir() {
        let fs = RealFileSystem;
        let result = fs.write(Path::new("/nonexistent/path/file.txt"), b"test");
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_fs_read_to_string() {
        let mut mock = MockFileSystem::new();
        mock.expect_read_to_string()
            .withf(|p| p == Path::new("/test/file.txt"))
            .returning(|_| Ok("mocked content".to_string()));

        let content = mock.read_to_string(Path::new("/test/file.txt")).unwrap();
        assert_eq!(content, "mocked content");
    }

    #[test]
    fn test_mock_fs_error_simulation() {
        let mut mock = MockFileSystem::new();
        mock.expect_read_to_string().returning(|_| {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "access denied",
            ))
        });

        let result = mock.read_to_string(Path::new("/any/path"));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
    }
}
