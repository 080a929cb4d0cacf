//! Infrastructure traits for abstracting I/O operations.
//!
//! The resource mapper itself never touches the disk; only the loader and the
//! command layer do, and they go through [`FileSystem`] so tests can inject
//! in-memory implementations.

use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;

    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("scripts.json");

        let fs = RealFileSystem;

        fs.write(&file_path, b"{\"bundling\": true}").unwrap();

        let read_content = fs.read_to_string(&file_path).unwrap();
        assert_eq!(read_content, "{\"bundling\": true}");
        assert!(fs.is_file(&file_path));
    }

    #[test]
    fn test_real_filesystem_create_dir_all() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("app").join("configuration");

        let fs = RealFileSystem;
        fs.create_dir_all(&nested_path).unwrap();

        assert!(nested_path.is_dir());
        assert!(!fs.is_file(&nested_path));
    }

    #[test]
    fn test_real_filesystem_read_nonexistent_file_returns_error() {
        let fs = RealFileSystem;
        let result = fs.read_to_string(Path::new("/nonexistent/scripts.json"));
        assert!(result.is_err());
        assert!(!fs.is_file(Path::new("/nonexistent/scripts.json")));
    }
}
