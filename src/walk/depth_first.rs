//! Depth-first walker with the same visitor contract as [`walk_dir`](super::walk_dir)
//!
//! Pre-order: a directory is visited, then each child is walked in lexical
//! order before moving on to the directory's next sibling. Open directories
//! live on an explicit stack of sibling iterators.

use tracing::{debug, trace};

use crate::storage::{DirEntry, Storage, join_path};

use super::Signal;

/// An open directory and the children not yet walked.
struct Frame<T> {
    path: String,
    children: std::vec::IntoIter<T>,
}

/// Outcome of visiting one entry.
enum Step<T, E> {
    /// Directory listed; walk its children next
    Descend(Frame<T>),
    /// Nothing to descend into
    Done,
    /// Skip the remaining entries of the parent directory
    SkipSiblings,
    Halt(Signal<E>),
}

/// Walk the tree rooted at `root` depth-first, calling `visit` for every entry
/// including the root.
///
/// Signals mean the same as for the breadth-first walker: [`Signal::SkipDir`]
/// on a directory skips its contents, on a file it skips the file's remaining
/// siblings.
pub fn walk_dir_depth_first<S, E, F>(storage: &S, root: &str, mut visit: F) -> Result<(), E>
where
    S: Storage + ?Sized,
    F: FnMut(&str, Option<&S::Entry>, Option<S::Error>) -> Signal<E>,
{
    let entry = match storage.resolve(root) {
        Ok(entry) => entry,
        Err(err) => {
            debug!(path = root, error = %err, "cannot resolve walk root");
            return visit(root, None, Some(err)).into_result();
        }
    };

    let mut stack = match enter(storage, root.to_string(), entry, &mut visit) {
        Step::Descend(frame) => vec![frame],
        Step::Done | Step::SkipSiblings => return Ok(()),
        Step::Halt(signal) => return signal.into_result(),
    };

    while let Some(frame) = stack.last_mut() {
        let Some(child) = frame.children.next() else {
            stack.pop();
            continue;
        };
        let child_path = join_path(&frame.path, child.name());
        match enter(storage, child_path, child, &mut visit) {
            Step::Descend(frame) => stack.push(frame),
            Step::Done => {}
            Step::SkipSiblings => {
                stack.pop();
            }
            Step::Halt(signal) => return signal.into_result(),
        }
    }
    Ok(())
}

fn enter<S, E, F>(storage: &S, path: String, entry: S::Entry, visit: &mut F) -> Step<S::Entry, E>
where
    S: Storage + ?Sized,
    F: FnMut(&str, Option<&S::Entry>, Option<S::Error>) -> Signal<E>,
{
    match visit(&path, Some(&entry), None) {
        Signal::Continue if entry.is_dir() => {}
        Signal::Continue => return Step::Done,
        Signal::SkipDir if entry.is_dir() => return Step::Done,
        Signal::SkipDir => return Step::SkipSiblings,
        signal => {
            debug!(path = %path, "walk stopped by visitor");
            return Step::Halt(signal);
        }
    }

    trace!(path = %path, "expanding directory");
    let mut children = match storage.read_dir(&path) {
        Ok(children) => children,
        Err(err) => {
            debug!(path = %path, error = %err, "cannot list directory");
            return match visit(&path, Some(&entry), Some(err)) {
                Signal::Continue | Signal::SkipDir => Step::Done,
                signal => Step::Halt(signal),
            };
        }
    };
    children.sort_by(|a, b| a.name().cmp(b.name()));

    Step::Descend(Frame {
        path,
        children: children.into_iter(),
    })
}
