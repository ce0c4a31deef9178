//! Local filesystem storage

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

use super::{DirEntry, Storage};

/// Entry read from the local filesystem.
#[derive(Debug, Clone)]
pub struct OsEntry {
    name: String,
    file_name: OsString,
    is_dir: bool,
    is_symlink: bool,
}

impl OsEntry {
    /// The name exactly as the filesystem reported it.
    /// `name()` is a lossy UTF-8 rendering of this.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Whether the entry was reported as a symbolic link.
    /// Always false for a resolved root.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

impl DirEntry for OsEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// Storage backed by a directory on the local filesystem.
///
/// Walk paths are slash-separated and relative to `base`; `.` is `base` itself.
#[derive(Debug, Clone)]
pub struct OsStorage {
    base: PathBuf,
}

impl OsStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        if path.is_empty() || path == "." {
            self.base.clone()
        } else {
            self.base.join(path)
        }
    }
}

/// Get the name of a path, defaulting to "." for root
fn base_name(path: &Path) -> OsString {
    path.file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("."))
}

/// Map an I/O error for `path`.
///
/// Walk paths are UTF-8, so a child whose name is not cannot be opened
/// again through its lossy rendering. That shows up as NotFound on a path
/// holding U+FFFD and is reported as such.
fn os_error(path: &str, err: io::Error) -> StorageError {
    match err.kind() {
        io::ErrorKind::NotFound if path.contains(char::REPLACEMENT_CHARACTER) => {
            StorageError::NotUtf8 {
                path: path.to_string(),
            }
        }
        io::ErrorKind::NotADirectory => StorageError::NotADirectory {
            path: path.to_string(),
        },
        _ => StorageError::io(path, err),
    }
}

impl Storage for OsStorage {
    type Entry = OsEntry;
    type Error = StorageError;

    fn resolve(&self, path: &str) -> Result<OsEntry, StorageError> {
        let full = self.full_path(path);
        let meta = fs::metadata(&full).map_err(|e| os_error(path, e))?;
        let file_name = base_name(&full);
        Ok(OsEntry {
            name: file_name.to_string_lossy().to_string(),
            file_name,
            is_dir: meta.is_dir(),
            is_symlink: false,
        })
    }

    fn read_dir(&self, path: &str) -> Result<Vec<OsEntry>, StorageError> {
        let full = self.full_path(path);
        let entries = fs::read_dir(&full).map_err(|e| os_error(path, e))?;

        // Listing is all-or-nothing: the first unreadable entry fails the directory.
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(path, e))?;
            let file_type = entry.file_type().map_err(|e| StorageError::io(path, e))?;
            let file_name = entry.file_name();
            children.push(OsEntry {
                name: file_name.to_string_lossy().to_string(),
                file_name,
                is_dir: file_type.is_dir(),
                is_symlink: file_type.is_symlink(),
            });
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn names(entries: &[OsEntry]) -> Vec<String> {
        let mut names: Vec<_> = entries.iter().map(|e| e.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_resolve_root_dir() {
        let tree = TestTree::new();
        tree.add_file("root/file1.txt", "");
        let storage = OsStorage::new(tree.path());

        let entry = storage.resolve("root").unwrap();
        assert_eq!(entry.name(), "root");
        assert!(entry.is_dir());

        let base = storage.resolve(".").unwrap();
        assert!(base.is_dir());
    }

    #[test]
    fn test_resolve_missing() {
        let tree = TestTree::new();
        let storage = OsStorage::new(tree.path());
        let err = storage.resolve("nope").unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
        assert_eq!(err.path(), "nope");
    }

    #[test]
    fn test_read_dir_lists_children() {
        let tree = TestTree::new();
        tree.add_file("root/b.txt", "");
        tree.add_file("root/a.txt", "");
        tree.add_dir("root/sub");
        let storage = OsStorage::new(tree.path());

        let children = storage.read_dir("root").unwrap();
        assert_eq!(names(&children), vec!["a.txt", "b.txt", "sub"]);
        let sub = children.iter().find(|e| e.name() == "sub").unwrap();
        assert!(sub.is_dir());
    }

    #[test]
    fn test_read_dir_on_file_fails() {
        let tree = TestTree::new();
        tree.add_file("root/a.txt", "");
        let storage = OsStorage::new(tree.path());
        assert!(storage.read_dir("root/a.txt").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_resolved_only_at_root() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("real/inner.txt", "");
        tree.add_dir("root");
        symlink(tree.path().join("real"), tree.path().join("root/link")).unwrap();
        symlink(tree.path().join("real"), tree.path().join("rootlink")).unwrap();
        let storage = OsStorage::new(tree.path());

        // A symlinked root is followed
        let root = storage.resolve("rootlink").unwrap();
        assert!(root.is_dir());

        // A symlinked child is not
        let children = storage.read_dir("root").unwrap();
        assert_eq!(children.len(), 1);
        assert!(!children[0].is_dir());
        assert!(children[0].is_symlink());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_directory_reported() {
        use std::os::unix::ffi::OsStrExt;

        use crate::walk::{Signal, walk_dir};

        let tree = TestTree::new();
        tree.add_file("root/good/inner.txt", "");
        let bad = OsStr::from_bytes(b"bad\xff");
        let bad_dir = tree.path().join("root").join(bad);
        fs::create_dir_all(&bad_dir).unwrap();
        fs::write(bad_dir.join("inner.txt"), "").unwrap();
        let storage = OsStorage::new(tree.path());

        let raw = storage
            .read_dir("root")
            .unwrap()
            .into_iter()
            .find(|e| e.file_name() == bad)
            .unwrap();
        assert!(raw.is_dir());
        assert_eq!(raw.name(), "bad\u{FFFD}");

        let mut visited = Vec::new();
        let mut errors = Vec::new();
        walk_dir(&storage, "root", |path, _, err| {
            match err {
                Some(err) => errors.push(err),
                None => visited.push(path.to_string()),
            }
            Signal::<StorageError>::Continue
        })
        .unwrap();

        assert!(visited.contains(&"root/good/inner.txt".to_string()));
        assert_eq!(errors.len(), 1);
        assert!(
            matches!(&errors[0], StorageError::NotUtf8 { path } if path == "root/bad\u{FFFD}"),
            "{:?}",
            errors[0]
        );
    }
}
