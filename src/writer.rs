use crate::song::Song;
use anyhow::Context as _;
use std::fs::File;
use std::path::Path;

pub const OUTPUT_HEADER: [&str; 2] = ["Artist(s)", "Song"];

/// Writes `artist,track` rows for accepted songs.
///
/// The header is written as soon as the writer is created, and every row is
/// flushed before [`write_song`](Self::write_song) returns.
pub struct SongWriter<W: std::io::Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl SongWriter<File> {
    /// Create (or truncate) the output file and write the header.
    pub fn create(path: &Path) -> anyhow::Result<SongWriter<File>> {
        let file = File::create(path)
            .with_context(|| format!("Unable to create output file '{}'.", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: std::io::Write> SongWriter<W> {
    pub fn from_writer(out: W) -> anyhow::Result<SongWriter<W>> {
        // Fields are written verbatim, matching the unquoted input format.
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        writer.write_record(OUTPUT_HEADER)?;
        writer.flush()?;
        Ok(SongWriter { writer, written: 0 })
    }

    pub fn write_song(&mut self, song: &Song) -> anyhow::Result<()> {
        self.writer
            .write_record([song.artist_name.as_str(), song.track_name.as_str()])?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Number of songs written so far, not counting the header.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Unable to flush output: {}", e.error()))
    }
}
