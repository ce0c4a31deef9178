//! Breadth-first walker
//!
//! Directories are expanded in the order they were discovered. A directory's
//! accepted subdirectories are gathered into a per-directory subqueue and only
//! appended to the main queue once all of its children have been visited, so
//! every entry at depth `d` is visited before any entry at depth `d + 1`.
//!
//! Memory is bounded by the number of discovered-but-unexpanded directories
//! plus the children of the directory being expanded.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::storage::{DirEntry, Storage, join_path};

use super::Signal;

/// A directory whose children have not been listed yet.
struct PendingDir<T> {
    path: String,
    entry: T,
}

/// Walk the tree rooted at `root` breadth-first, calling `visit` for every
/// entry including the root.
///
/// `visit` receives the entry path, the entry (absent only when the root itself
/// cannot be resolved) and the storage error being reported, if any. A
/// directory that cannot be listed is visited a second time with the listing
/// error; returning [`Signal::SkipDir`] or [`Signal::Continue`] recovers.
///
/// Siblings are visited in lexical order of their names, which requires each
/// directory to be read completely before any of its children are visited.
///
/// Symbolic links found while listing are not followed, but a symlinked
/// `root` is resolved to its target.
///
/// Returns the error carried by [`Signal::Fail`]; [`Signal::SkipDir`] and
/// [`Signal::SkipAll`] end the walk successfully.
pub fn walk_dir<S, E, F>(storage: &S, root: &str, mut visit: F) -> Result<(), E>
where
    S: Storage + ?Sized,
    F: FnMut(&str, Option<&S::Entry>, Option<S::Error>) -> Signal<E>,
{
    let signal = match storage.resolve(root) {
        Err(err) => {
            debug!(path = root, error = %err, "cannot resolve walk root");
            visit(root, None, Some(err))
        }
        Ok(entry) => match visit(root, Some(&entry), None) {
            Signal::Continue if entry.is_dir() => {
                let mut queue = VecDeque::new();
                queue.push_back(PendingDir {
                    path: root.to_string(),
                    entry,
                });
                expand(storage, queue, &mut visit)
            }
            signal => signal,
        },
    };
    signal.into_result()
}

/// Drain `queue`, listing each directory and visiting its children.
///
/// Returns [`Signal::Continue`] once the queue is empty, or the signal that
/// stopped the walk.
fn expand<S, E, F>(storage: &S, mut queue: VecDeque<PendingDir<S::Entry>>, visit: &mut F) -> Signal<E>
where
    S: Storage + ?Sized,
    F: FnMut(&str, Option<&S::Entry>, Option<S::Error>) -> Signal<E>,
{
    while let Some(PendingDir { path, entry }) = queue.pop_front() {
        trace!(path = %path, pending = queue.len(), "expanding directory");

        let mut children = match storage.read_dir(&path) {
            Ok(children) => children,
            Err(err) => {
                debug!(path = %path, error = %err, "cannot list directory");
                // Second visit of the same directory, now carrying the error
                match visit(&path, Some(&entry), Some(err)) {
                    Signal::Continue => continue,
                    Signal::SkipDir if entry.is_dir() => continue,
                    signal => {
                        debug!(path = %path, "walk stopped after listing error");
                        return signal;
                    }
                }
            }
        };
        children.sort_by(|a, b| a.name().cmp(b.name()));

        let mut subqueue = Vec::new();
        for child in children {
            let child_path = join_path(&path, child.name());
            match visit(&child_path, Some(&child), None) {
                Signal::Continue => {
                    if child.is_dir() {
                        subqueue.push(PendingDir {
                            path: child_path,
                            entry: child,
                        });
                    }
                }
                Signal::SkipDir if child.is_dir() => {}
                Signal::SkipDir => {
                    // Skip the rest of this directory, including subdirectories
                    // already accepted from it
                    subqueue.clear();
                    break;
                }
                signal => {
                    debug!(path = %child_path, "walk stopped by visitor");
                    return signal;
                }
            }
        }
        queue.extend(subqueue);
    }
    Signal::Continue
}
