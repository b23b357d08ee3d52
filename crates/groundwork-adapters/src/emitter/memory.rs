//! In-memory emitter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use groundwork_core::{
    application::{ApplicationError, ports::Emitter},
    error::GroundworkResult,
};

/// In-memory emitter recording every write.
///
/// Cloning shares the underlying state, so a test can hand one clone to the
/// pipeline and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    inner: Arc<RwLock<MemoryEmitterInner>>,
}

#[derive(Debug, Default)]
struct MemoryEmitterInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a written file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Whether a path was created as a directory or written as a file.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.files.contains_key(path.as_ref()) || inner.directories.contains(path.as_ref())
    }

    /// All written file paths, sorted for stable assertions.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut paths: Vec<PathBuf> = inner.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().map(|i| i.files.len()).unwrap_or(0)
    }
}

impl Emitter for MemoryEmitter {
    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GroundworkResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Mirror the real filesystem: parents must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::EmitFailed {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }
}

fn lock_error(path: &Path) -> groundwork_core::error::GroundworkError {
    ApplicationError::EmitFailed {
        path: path.to_path_buf(),
        reason: "emitter state lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_directories_and_files() {
        let emitter = MemoryEmitter::new();
        emitter.create_dir_all(Path::new("out/src")).unwrap();
        emitter.write_file(Path::new("out/src/main.go"), "package main").unwrap();

        assert!(emitter.exists("out"));
        assert!(emitter.exists("out/src"));
        assert_eq!(
            emitter.read_file("out/src/main.go").as_deref(),
            Some("package main")
        );
    }

    #[test]
    fn rejects_orphan_files() {
        let emitter = MemoryEmitter::new();
        assert!(emitter.write_file(Path::new("no/parent.txt"), "x").is_err());
    }

    #[test]
    fn clones_share_state() {
        let emitter = MemoryEmitter::new();
        let observer = emitter.clone();
        emitter.create_dir_all(Path::new("d")).unwrap();
        assert!(observer.exists("d"));
    }
}
