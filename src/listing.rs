//! Listing front-end: walks a storage and renders every entry.

use glob::Pattern;
use serde::Serialize;
use tracing::warn;

use crate::error::{ListError, ListResult};
use crate::output::{EntryFormatter, EntryKind, EntryRecord};
use crate::storage::{DirEntry, Storage};
use crate::walk::{Order, Signal};

/// Configuration for a listing.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    pub order: Order,
    /// Do not descend below this many levels (root is level 0)
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Glob patterns matched against entry names; matching directories are
    /// not descended into
    pub ignore_patterns: Vec<String>,
    /// Stop after this many entries have been output
    pub limit: Option<usize>,
}

/// Counts gathered during a listing. The root directory is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub dirs: usize,
    pub files: usize,
    /// Directories that could not be listed
    pub errors: usize,
}

fn compile_patterns(patterns: &[String]) -> ListResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ListError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Number of path components between `root` and `path`.
fn depth_of(root: &str, path: &str) -> usize {
    if path == root {
        return 0;
    }
    let rel = if root.is_empty() || root == "." {
        path
    } else {
        path.strip_prefix(root).unwrap_or(path)
    };
    rel.split('/').filter(|c| !c.is_empty()).count()
}

/// Walk `root` and hand every selected entry to `out`.
///
/// Directories below the root that cannot be listed are logged, counted and
/// skipped. Failing to resolve the root is an error.
pub fn list_tree<S, O>(storage: &S, root: &str, config: &ListConfig, mut out: O) -> ListResult<ListSummary>
where
    S: Storage + ?Sized,
    ListError: From<S::Error>,
    O: EntryFormatter,
{
    let patterns = compile_patterns(&config.ignore_patterns)?;
    let mut summary = ListSummary::default();
    let mut emitted = 0usize;

    config.order.walk(storage, root, |path, entry, err| {
        let Some(entry) = entry else {
            // Only the root can be missing an entry
            return match err {
                Some(err) => Signal::Fail(ListError::from(err)),
                None => Signal::Continue,
            };
        };
        if let Some(err) = err {
            warn!(path = path, error = %err, "skipping unreadable directory");
            summary.errors += 1;
            return Signal::SkipDir;
        }

        let is_root = path == root;
        if !is_root && patterns.iter().any(|p| p.matches(entry.name())) {
            // SkipDir on a file would also skip its siblings
            return if entry.is_dir() {
                Signal::SkipDir
            } else {
                Signal::Continue
            };
        }

        let depth = depth_of(root, path);
        if entry.is_dir() || !config.dirs_only {
            if config.limit.is_some_and(|limit| emitted >= limit) {
                return Signal::SkipAll;
            }
            let record = EntryRecord {
                path,
                depth,
                kind: if entry.is_dir() {
                    EntryKind::Dir
                } else {
                    EntryKind::File
                },
            };
            if let Err(e) = out.output_entry(&record) {
                return Signal::Fail(ListError::Output(e));
            }
            match record.kind {
                EntryKind::Dir if is_root => {}
                EntryKind::Dir => summary.dirs += 1,
                EntryKind::File => summary.files += 1,
            }
            emitted += 1;
            if config.limit.is_some_and(|limit| emitted >= limit) {
                return Signal::SkipAll;
            }
        }

        if entry.is_dir() && config.max_depth.is_some_and(|max| depth >= max) {
            return Signal::SkipDir;
        }
        Signal::Continue
    })?;

    out.finish(&summary)?;
    Ok(summary)
}
