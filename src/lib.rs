//! bfwalk - Deterministic breadth-first directory walking
//!
//! [`walk_dir`] visits every entry at depth `d` before any entry at depth
//! `d + 1`, siblings in lexical order. It is a drop-in alternative to
//! [`walk_dir_depth_first`]: same visitor, same skip and abort [`Signal`]s.

pub mod error;
pub mod listing;
pub mod output;
pub mod storage;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ListError, StorageError};
pub use listing::{ListConfig, ListSummary, list_tree};
pub use output::{EntryFormatter, EntryKind, EntryRecord, JsonFormatter, TextFormatter};
pub use storage::{DirEntry, MemStorage, OsStorage, Storage};
pub use walk::{Order, Signal, walk_dir, walk_dir_depth_first};
