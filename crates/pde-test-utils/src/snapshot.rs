//! Snapshot files in temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding index snapshot files.
///
/// # Example
///
/// ```rust
/// use pde_test_utils::snapshot::SnapshotDir;
///
/// let dir = SnapshotDir::new();
/// let path = dir.write("index.toml", "[[target]]\nname = \"a\"\n");
/// assert!(path.exists());
/// ```
pub struct SnapshotDir {
    temp_dir: TempDir,
}

impl Default for SnapshotDir {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("SnapshotDir: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` under the root and return the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).expect("SnapshotDir: failed to write snapshot");
        path
    }

    /// Path of a file under the root that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }
}
