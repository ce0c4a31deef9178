//! Error types for bfwalk
//!
//! The walkers themselves are generic over the visitor's error type and never
//! produce errors of their own. The types here belong to the built-in storage
//! providers and to the listing front-end.

use thiserror::Error;

/// Errors raised by the built-in storage providers.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Path does not exist
    #[error("cannot access '{path}': no such file or directory")]
    NotFound { path: String },

    /// Listing was requested for something that is not a directory
    #[error("cannot list '{path}': not a directory")]
    NotADirectory { path: String },

    /// Underlying filesystem failure
    #[error("cannot access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Path holds a name that is not valid UTF-8 and cannot be reopened
    #[error("cannot access '{path}': name is not valid UTF-8")]
    NotUtf8 { path: String },

    /// Failure injected into an in-memory tree
    #[error("cannot list '{path}': injected failure")]
    Injected { path: String },
}

impl StorageError {
    /// The storage path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            StorageError::NotFound { path }
            | StorageError::NotADirectory { path }
            | StorageError::NotUtf8 { path }
            | StorageError::Io { path, .. }
            | StorageError::Injected { path } => path,
        }
    }

    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.to_string(),
            }
        } else {
            StorageError::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

/// Errors surfaced by [`list_tree`](crate::list_tree).
#[derive(Error, Debug)]
pub enum ListError {
    /// The walk root could not be resolved
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Writing rendered entries failed
    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),

    /// An ignore pattern is not a valid glob
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type ListResult<T> = std::result::Result<T, ListError>;
