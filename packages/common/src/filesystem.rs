use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File system abstraction used to load `src`-referenced section content
pub trait FileSystem: Send + Sync {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error>;
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
}

/// In-memory file system for testing
pub struct MockFileSystem {
    pub files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_read() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/project/Basic.js", "export default {}");

        assert!(fs.exists(Path::new("/project/Basic.js")));
        assert_eq!(
            fs.read_to_string(Path::new("/project/Basic.js")).unwrap(),
            "export default {}"
        );
    }

    #[test]
    fn test_mock_missing_file() {
        let fs = MockFileSystem::default();
        let err = fs.read_to_string(Path::new("/nope.js")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
