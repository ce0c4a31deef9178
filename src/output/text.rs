//! Plain/colored text output

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::listing::ListSummary;

use super::{EntryFormatter, EntryKind, EntryRecord};

/// Writes one path per line, followed by a directory/file count.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> EntryFormatter for TextFormatter<W> {
    fn output_entry(&mut self, record: &EntryRecord<'_>) -> io::Result<()> {
        if record.kind == EntryKind::Dir {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", record.path)?;
            self.out.reset()?;
            writeln!(self.out)
        } else {
            writeln!(self.out, "{}", record.path)
        }
    }

    fn finish(&mut self, summary: &ListSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} directories, {} files",
            summary.dirs, summary.files
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    #[test]
    fn test_plain_output() {
        let mut formatter = TextFormatter::new(NoColor::new(Vec::new()));
        formatter
            .output_entry(&EntryRecord {
                path: "root",
                depth: 0,
                kind: EntryKind::Dir,
            })
            .unwrap();
        formatter
            .output_entry(&EntryRecord {
                path: "root/a.txt",
                depth: 1,
                kind: EntryKind::File,
            })
            .unwrap();
        formatter
            .finish(&ListSummary {
                dirs: 0,
                files: 1,
                errors: 0,
            })
            .unwrap();

        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(text, "root\nroot/a.txt\n\n0 directories, 1 files\n");
    }

    #[test]
    fn test_directories_colored() {
        let mut formatter = TextFormatter::new(Ansi::new(Vec::new()));
        formatter
            .output_entry(&EntryRecord {
                path: "root/sub",
                depth: 1,
                kind: EntryKind::Dir,
            })
            .unwrap();

        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert!(text.contains("\x1b["), "expected escape codes: {:?}", text);
        assert!(text.contains("root/sub"));
    }
}
