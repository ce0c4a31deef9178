//! Visitor return values

/// What a visitor tells the walker to do next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub enum Signal<E> {
    /// Keep walking
    #[default]
    Continue,
    /// On a directory: do not descend into it.
    /// On anything else: skip the remaining entries of its parent directory.
    SkipDir,
    /// Stop the whole walk. Not an error.
    SkipAll,
    /// Stop the whole walk and return this error.
    Fail(E),
}

impl<E> Signal<E> {
    pub fn is_continue(&self) -> bool {
        matches!(self, Signal::Continue)
    }

    /// Map a signal that reached the top of a walk to its final result.
    /// Skip signals are control flow, not failures.
    pub(crate) fn into_result(self) -> Result<(), E> {
        match self {
            Signal::Fail(err) => Err(err),
            Signal::Continue | Signal::SkipDir | Signal::SkipAll => Ok(()),
        }
    }
}

impl<E> From<Result<(), E>> for Signal<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Signal::Continue,
            Err(err) => Signal::Fail(err),
        }
    }
}
