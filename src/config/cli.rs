use crate::core::Storage;
use crate::utils::error::{FixError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage resolving relative paths against a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        fs::read_to_string(&full_path).map_err(|e| FixError::io(full_path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, content).map_err(|e| FixError::io(full_path, e))
    }
}
