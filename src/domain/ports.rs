use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn base_dir(&self) -> &Path;
    fn target_files(&self) -> Vec<PathBuf>;
    fn dry_run(&self) -> bool;
}
