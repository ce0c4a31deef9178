//! In-memory storage for deterministic tests and benchmarks

use std::collections::{BTreeMap, BTreeSet};

use crate::error::StorageError;

use super::{DirEntry, Storage};

/// Entry of a [`MemStorage`] tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemEntry {
    name: String,
    is_dir: bool,
}

impl DirEntry for MemEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// A tree held entirely in memory.
///
/// Adding a file creates its parent directories. Children are kept in
/// insertion order, so listings are deliberately not sorted.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    dirs: BTreeMap<String, Vec<MemEntry>>,
    files: BTreeSet<String>,
    failing: BTreeSet<String>,
}

fn normalize(path: &str) -> &str {
    let path = path.trim_matches('/');
    if path.is_empty() { "." } else { path }
}

fn split_parent(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or((".", path))
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&mut self, path: &str) -> &mut Self {
        let path = normalize(path);
        if self.files.contains(path) || self.dirs.contains_key(path) {
            return self;
        }
        let (parent, name) = split_parent(path);
        self.ensure_dir(parent);
        self.push_child(parent, name, false);
        self.files.insert(path.to_string());
        self
    }

    /// Add a (possibly empty) directory, creating parents as needed.
    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        self.ensure_dir(normalize(path));
        self
    }

    /// Make every listing of `path` fail with [`StorageError::Injected`].
    pub fn fail_listing(&mut self, path: &str) -> &mut Self {
        self.failing.insert(normalize(path).to_string());
        self
    }

    /// Number of files and directories in the tree, excluding `.`.
    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.keys().filter(|d| d.as_str() != ".").count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_dir(&mut self, path: &str) {
        if self.dirs.contains_key(path) {
            return;
        }
        if path != "." {
            let (parent, name) = split_parent(path);
            self.ensure_dir(parent);
            self.push_child(parent, name, true);
        }
        self.dirs.insert(path.to_string(), Vec::new());
    }

    fn push_child(&mut self, parent: &str, name: &str, is_dir: bool) {
        if let Some(children) = self.dirs.get_mut(parent) {
            children.push(MemEntry {
                name: name.to_string(),
                is_dir,
            });
        }
    }
}

impl<'a> FromIterator<&'a str> for MemStorage {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut storage = MemStorage::new();
        for path in iter {
            storage.add_file(path);
        }
        storage
    }
}

impl Storage for MemStorage {
    type Entry = MemEntry;
    type Error = StorageError;

    fn resolve(&self, path: &str) -> Result<MemEntry, StorageError> {
        let norm = normalize(path);
        let is_dir = if norm == "." || self.dirs.contains_key(norm) {
            true
        } else if self.files.contains(norm) {
            false
        } else {
            return Err(StorageError::NotFound {
                path: path.to_string(),
            });
        };
        Ok(MemEntry {
            name: split_parent(norm).1.to_string(),
            is_dir,
        })
    }

    fn read_dir(&self, path: &str) -> Result<Vec<MemEntry>, StorageError> {
        let norm = normalize(path);
        if self.failing.contains(norm) {
            return Err(StorageError::Injected {
                path: path.to_string(),
            });
        }
        match self.dirs.get(norm) {
            Some(children) => Ok(children.clone()),
            None if self.files.contains(norm) => Err(StorageError::NotADirectory {
                path: path.to_string(),
            }),
            // An empty base is still listable
            None if norm == "." => Ok(Vec::new()),
            None => Err(StorageError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}
