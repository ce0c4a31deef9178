//! Storage providers the walkers read from
//!
//! A provider only has to answer two questions: what is at a path (following
//! symlinks), and what are the immediate children of a directory (without
//! following them). Everything else is the walker's job.

mod mem;
mod os;

pub use mem::{MemEntry, MemStorage};
pub use os::{OsEntry, OsStorage};

/// A single object returned by a [`Storage`].
pub trait DirEntry {
    /// Base name of the entry.
    fn name(&self) -> &str;

    /// Whether the entry is a directory.
    fn is_dir(&self) -> bool;
}

/// Hierarchical storage that can be walked.
pub trait Storage {
    type Entry: DirEntry;
    type Error: std::error::Error;

    /// Resolve `path` to an entry, following a symbolic link if `path` is one.
    fn resolve(&self, path: &str) -> Result<Self::Entry, Self::Error>;

    /// List the immediate children of directory `path`.
    ///
    /// Children that are symbolic links are reported as links, not as their
    /// targets. Order is unspecified.
    fn read_dir(&self, path: &str) -> Result<Vec<Self::Entry>, Self::Error>;
}

impl<S: Storage + ?Sized> Storage for &S {
    type Entry = S::Entry;
    type Error = S::Error;

    fn resolve(&self, path: &str) -> Result<Self::Entry, Self::Error> {
        (**self).resolve(path)
    }

    fn read_dir(&self, path: &str) -> Result<Vec<Self::Entry>, Self::Error> {
        (**self).read_dir(path)
    }
}

/// Join a child name onto a slash-separated parent path.
///
/// A parent of `.` yields the bare name.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() || parent == "." {
        return name.to_string();
    }
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() {
        // parent was "/" (or only slashes)
        return format!("/{}", name);
    }
    format!("{}/{}", parent, name)
}
