//! JSON lines output

use std::io::{self, Write};

use crate::listing::ListSummary;

use super::{EntryFormatter, EntryRecord};

/// Writes each entry as a JSON object on its own line, then a summary object.
pub struct JsonFormatter<W: Write> {
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        writeln!(self.out)
    }
}

impl<W: Write> EntryFormatter for JsonFormatter<W> {
    fn output_entry(&mut self, record: &EntryRecord<'_>) -> io::Result<()> {
        self.write_line(record)
    }

    fn finish(&mut self, summary: &ListSummary) -> io::Result<()> {
        self.write_line(&serde_json::json!({ "summary": summary }))?;
        self.out.flush()
    }
}
