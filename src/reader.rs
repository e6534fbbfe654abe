use anyhow::Context as _;
use csv::{ByteRecord, Position};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazily yields the data rows of a song file, one per physical line, split into fields.
///
/// The first line is always treated as a header and skipped, even when it is
/// blank. Rows are split on every comma, quotes have no special meaning, and
/// rows may have any number of fields. A blank line is a row with a single
/// empty field. Fields are raw bytes, no encoding is assumed.
pub struct LineReader<R> {
    input: BufReader<R>,
    line: u64,
    buf: Vec<u8>,
}

impl LineReader<File> {
    pub fn from_path(path: &Path) -> anyhow::Result<LineReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Unable to open input file '{}'.", path.display()))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: std::io::Read> LineReader<R> {
    pub fn from_reader(reader: R) -> LineReader<R> {
        LineReader {
            input: BufReader::new(reader),
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Read the next physical line into `buf` without its terminator.
    /// Returns false at end of input.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        while matches!(self.buf.last().copied(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }
        Ok(true)
    }
}

impl<R: std::io::Read> Iterator for LineReader<R> {
    type Item = std::io::Result<ByteRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.line == 0 {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        match self.read_line() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(e)),
        }
        let mut record = ByteRecord::from(self.buf.split(|b| *b == b',').collect::<Vec<_>>());
        let mut position = Position::new();
        position.set_line(self.line);
        record.set_position(Some(position));
        Some(Ok(record))
    }
}
