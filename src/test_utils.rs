//! Test utilities for building trees to walk.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::storage::MemStorage;

/// A temporary directory tree on the local filesystem.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an in-memory tree of `num_dirs` directory chains under `root`, each
/// `nesting_depth` levels deep with ten files per level.
pub fn generate_tree(root: &str, num_dirs: usize, nesting_depth: usize) -> MemStorage {
    const FILES_PER_DIR: usize = 10;
    const FILE_TYPES: [&str; 4] = ["html", "rs", "ts", "css"];

    let mut storage = MemStorage::new();
    storage.add_dir(root);
    for i in 0..num_dirs {
        let mut current = root.to_string();
        for d in 0..nesting_depth {
            current = format!("{}/dir{}_{}", current, i, d);
            for f in 0..FILES_PER_DIR {
                let ext = FILE_TYPES[f % FILE_TYPES.len()];
                // Every fifth file is a layout file
                let file_name = if f % 5 == 0 {
                    format!("layout.{}", ext)
                } else {
                    format!("file{}.{}", f, ext)
                };
                storage.add_file(&format!("{}/{}", current, file_name));
            }
        }
    }
    storage
}
