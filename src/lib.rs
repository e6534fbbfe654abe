//! Answers a fixed set of questions about a CSV file of song metadata.
//!
//! Each input row is split into eight positional fields (track, artist, artist
//! count, release year, playlist count, streams, key, mode) and tested against
//! one of five questions. The artist and track of every matching row are
//! written to an output CSV. The main entrypoints are
//!
//! - [`Config`], built from `key=value` settings with [`parse_assignment`],
//! - [`run`], which performs a whole pass from input file to output file,
//! - [`filter_songs`] for running a pass over arbitrary readers and writers.

mod config;
mod parser;
mod question;
mod reader;
mod song;
mod writer;

use anyhow::Context as _;
use log::{debug, info, warn};

pub use config::{Config, ConfigError, DEFAULT_OUTPUT};
pub use parser::{lenient_int, parse_assignment, Assignment};
pub use question::{Predicate, Question, QUESTIONS};
pub use reader::LineReader;
pub use song::{truncate, NumericPolicy, Song, SongError, FIELD_COUNT, NAME_MAX, TAG_MAX};
pub use writer::{SongWriter, OUTPUT_HEADER};

/// Counts from a finished pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows read, not counting the header.
    pub rows_read: usize,
    pub rows_emitted: usize,
}

/// Read every row from `lines`, and write the songs accepted by `question` to `writer`
/// in input order.
pub fn filter_songs<R: std::io::Read, W: std::io::Write>(
    lines: LineReader<R>,
    question: &Question,
    policy: NumericPolicy,
    writer: &mut SongWriter<W>,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for record in lines {
        let record = record.context("Unable to read input row.")?;
        let song = Song::from_record(&record, policy).with_context(|| {
            let line = record.position().map_or(0, |p| p.line());
            format!("Invalid row on line {line}.")
        })?;
        summary.rows_read += 1;
        if question.accepts(&song) {
            debug!("{} - {}", song.artist_name, song.track_name);
            writer.write_song(&song)?;
            summary.rows_emitted += 1;
        }
    }
    Ok(summary)
}

/// Run one full pass as described by `config`.
///
/// The output file is recreated with its header before the input is opened,
/// so it exists with at least the header even when the pass fails.
pub fn run(config: &Config) -> anyhow::Result<RunSummary> {
    let question = Question::from_selector(config.question);
    if question.is_recognized() {
        info!(
            "question {}: {}, reading {}",
            question.selector,
            question.description,
            config.input.display()
        );
    } else {
        warn!(
            "question {} is not one of 1-5, no songs will be selected",
            question.selector
        );
    }

    let mut writer = SongWriter::create(&config.output)?;
    let lines = LineReader::from_path(&config.input)?;
    let summary = filter_songs(lines, &question, config.policy, &mut writer)?;
    info!(
        "{} of {} rows written to {}",
        summary.rows_emitted,
        summary.rows_read,
        config.output.display()
    );
    Ok(summary)
}
