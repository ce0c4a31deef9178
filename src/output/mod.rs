//! Output formatting for listings
//!
//! - `TextFormatter`: one path per line, directories highlighted
//! - `JsonFormatter`: one JSON object per line

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use std::io;

use serde::Serialize;

use crate::listing::ListSummary;

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One visited entry, as handed to a formatter.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord<'a> {
    pub path: &'a str,
    /// Distance from the walk root (root is 0)
    pub depth: usize,
    pub kind: EntryKind,
}

/// Receives entries as the walk produces them.
pub trait EntryFormatter {
    fn output_entry(&mut self, record: &EntryRecord<'_>) -> io::Result<()>;

    fn finish(&mut self, summary: &ListSummary) -> io::Result<()>;
}

impl<T: EntryFormatter + ?Sized> EntryFormatter for &mut T {
    fn output_entry(&mut self, record: &EntryRecord<'_>) -> io::Result<()> {
        (**self).output_entry(record)
    }

    fn finish(&mut self, summary: &ListSummary) -> io::Result<()> {
        (**self).finish(summary)
    }
}
