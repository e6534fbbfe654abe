use crate::parser::lenient_int;
use csv::{ByteRecord, StringRecord};
use thiserror::Error;

/// Number of positional fields in an input row.
pub const FIELD_COUNT: usize = 8;
/// Longest track or artist name kept, in characters.
pub const NAME_MAX: usize = 99;
/// Longest key or mode kept, in characters.
pub const TAG_MAX: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SongError {
    #[error("field '{field}' is not an integer: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// How numeric fields are converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Anything that is not a number becomes 0, see [`lenient_int`].
    #[default]
    Lenient,
    /// A numeric field that is present must be a valid integer.
    Strict,
}

impl NumericPolicy {
    pub fn parse(self, field: &'static str, token: &str) -> Result<i64, SongError> {
        match self {
            NumericPolicy::Lenient => Ok(lenient_int(token)),
            NumericPolicy::Strict => token.trim().parse().map_err(|_| SongError::InvalidNumber {
                field,
                value: token.to_string(),
            }),
        }
    }
}

/// Cut `text` down to at most `max_chars` characters. Never splits a character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// One row of the song data set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub track_name: String,
    pub artist_name: String,
    pub artist_count: i64,
    pub released_year: i64,
    pub in_playlists: i64,
    pub streams: i64,
    pub key: String,
    pub mode: String,
}

impl Song {
    /// Build a song from the fields of one input row.
    ///
    /// Fields are taken by position. A row with fewer than [`FIELD_COUNT`]
    /// fields leaves the remaining attributes at their defaults, and fields past
    /// the eighth are ignored. Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn from_record(record: &ByteRecord, policy: NumericPolicy) -> Result<Song, SongError> {
        let mut song = Song::default();
        for (idx, token) in record.iter().take(FIELD_COUNT).enumerate() {
            let token = String::from_utf8_lossy(token);
            match idx {
                0 => song.track_name = truncate(&token, NAME_MAX),
                1 => song.artist_name = truncate(&token, NAME_MAX),
                2 => song.artist_count = policy.parse("artist_count", &token)?,
                3 => song.released_year = policy.parse("released_year", &token)?,
                4 => song.in_playlists = policy.parse("in_spotify_playlists", &token)?,
                5 => song.streams = policy.parse("streams", &token)?,
                6 => song.key = truncate(&token, TAG_MAX),
                _ => song.mode = truncate(&token, TAG_MAX),
            }
        }
        Ok(song)
    }

    /// Split one raw comma separated line and build a song from it.
    /// There is no quoting, every comma separates two fields.
    pub fn parse_line(line: &str, policy: NumericPolicy) -> Result<Song, SongError> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let record = ByteRecord::from(line.split(',').collect::<Vec<_>>());
        Self::from_record(&record, policy)
    }

    /// All eight attributes in input order.
    pub fn to_record(&self) -> StringRecord {
        let mut record = StringRecord::with_capacity(128, FIELD_COUNT);
        record.push_field(&self.track_name);
        record.push_field(&self.artist_name);
        record.push_field(&self.artist_count.to_string());
        record.push_field(&self.released_year.to_string());
        record.push_field(&self.in_playlists.to_string());
        record.push_field(&self.streams.to_string());
        record.push_field(&self.key);
        record.push_field(&self.mode);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = "Shape of You,Tate McRae,1,2021,8000,500000,D,Major";

    #[test]
    fn test_parse_full_line() -> anyhow::Result<()> {
        let song = Song::parse_line(ROW, NumericPolicy::Lenient)?;
        assert_eq!(
            song,
            Song {
                track_name: "Shape of You".into(),
                artist_name: "Tate McRae".into(),
                artist_count: 1,
                released_year: 2021,
                in_playlists: 8000,
                streams: 500000,
                key: "D".into(),
                mode: "Major".into(),
            }
        );
        assert_eq!(
            song.to_record(),
            StringRecord::from(ROW.split(',').collect::<Vec<_>>())
        );
        Ok(())
    }

    #[test]
    fn test_short_line_defaults() -> anyhow::Result<()> {
        let song = Song::parse_line("Lonely Track,Someone,2\n", NumericPolicy::Lenient)?;
        assert_eq!(song.track_name, "Lonely Track");
        assert_eq!(song.artist_name, "Someone");
        assert_eq!(song.artist_count, 2);
        assert_eq!(song.released_year, 0);
        assert_eq!(song.in_playlists, 0);
        assert_eq!(song.key, "");
        assert_eq!(song.mode, "");
        Ok(())
    }

    #[test]
    fn test_extra_fields_ignored() -> anyhow::Result<()> {
        let song = Song::parse_line(&format!("{ROW},extra,more"), NumericPolicy::Lenient)?;
        assert_eq!(song.mode, "Major");
        Ok(())
    }

    #[test]
    fn test_text_truncation() -> anyhow::Result<()> {
        let long_name = "é".repeat(150);
        let line = format!("{long_name},Artist,1,2020,1,1,C#minorish,Majorminor");
        let song = Song::parse_line(&line, NumericPolicy::Lenient)?;
        assert_eq!(song.track_name.chars().count(), NAME_MAX);
        assert_eq!(song.key, "C#minoris");
        assert_eq!(song.mode, "Majormino");
        Ok(())
    }

    #[test]
    fn test_lenient_numbers() -> anyhow::Result<()> {
        let song = Song::parse_line("T,A,x,2019abc,,1e5,E,Minor", NumericPolicy::Lenient)?;
        assert_eq!(song.artist_count, 0);
        assert_eq!(song.released_year, 2019);
        assert_eq!(song.in_playlists, 0);
        assert_eq!(song.streams, 1);
        Ok(())
    }

    #[test]
    fn test_strict_numbers() {
        assert_eq!(
            Song::parse_line("T,A,1,2019abc,5,5,E,Minor", NumericPolicy::Strict),
            Err(SongError::InvalidNumber {
                field: "released_year",
                value: "2019abc".into()
            })
        );
        // Missing fields are still defaulted under the strict policy.
        assert!(Song::parse_line("T,A,1,2019", NumericPolicy::Strict).is_ok());
    }

    #[test]
    fn test_latin1_bytes_are_replaced() -> anyhow::Result<()> {
        let record = ByteRecord::from(vec![
            &b"Caf\xe9"[..],
            &b"Rae Spoon"[..],
            &b"1"[..],
            &b"2012"[..],
        ]);
        let song = Song::from_record(&record, NumericPolicy::Lenient)?;
        assert_eq!(song.track_name, "Caf\u{FFFD}");
        assert_eq!(song.artist_name, "Rae Spoon");
        assert_eq!(song.released_year, 2012);
        Ok(())
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ñañaña", 4), "ñaña");
        assert_eq!(truncate("", 0), "");
    }
}
