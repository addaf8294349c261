//! In-memory filesystem adapter for tests.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use traycraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TraycraftResult,
};

/// In-memory filesystem.
///
/// Writes land in a map keyed by path; reads fall through to whatever was
/// seeded with [`MemoryFilesystem::insert`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> TraycraftResult<()> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_bytes(&path, &content.into())
    }

    /// A file's content as text (testing helper).
    pub fn contents(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TraycraftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TraycraftResult<()> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> TraycraftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> TraycraftResult<Vec<u8>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::ResourceNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b.txt"), "x").unwrap();
        assert_eq!(fs.contents(Path::new("a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn insert_seeds_directories() {
        let fs = MemoryFilesystem::new();
        fs.insert("/work/.traycraft/icon.png", vec![0u8, 1, 2]).unwrap();

        assert!(fs.exists(Path::new("/work/.traycraft")));
        assert!(fs.exists(Path::new("/work")));
        assert_eq!(
            fs.read_file(Path::new("/work/.traycraft/icon.png")).unwrap(),
            vec![0, 1, 2]
        );
        assert_eq!(fs.list_files(), vec![PathBuf::from("/work/.traycraft/icon.png")]);
    }

    #[test]
    fn missing_read_is_not_found() {
        let err = MemoryFilesystem::new()
            .read_file(Path::new("nope"))
            .unwrap_err();
        assert!(err.to_string().contains("Resource not found"));
    }
}
