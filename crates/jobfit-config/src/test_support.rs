//! Filesystem fixtures for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::CONFIG_FILENAME;

/// A scratch directory tree, removed on drop.
pub struct Fixture {
    /// Backing temporary directory.
    dir: TempDir,
}

impl Fixture {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Top of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `rel` and any missing parents.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `contents` to the file `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes a `.jobfit.toml` into directory `rel` (`""` for the top).
    pub fn config(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.mkdir(rel).join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }
}
