use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File system abstraction for document round-trips and testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a file to a string
    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error>;

    /// Write a string to a file, creating parent directories as needed
    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error>;

    /// List the files directly under a directory
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, std::io::Error>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.path().is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }
}

/// Mock file system for testing
#[derive(Default)]
pub struct MockFileSystem {
    pub files: std::cell::RefCell<HashMap<PathBuf, String>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: PathBuf, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path, contents.into());
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.borrow();
        // A path exists if it is a stored file, or a directory that is an
        // ancestor of one — mirroring RealFileSystem, where directories
        // report as existing once they contain files.
        files.contains_key(path) || files.keys().any(|p| p.ancestors().any(|a| a == path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }
}
