//! The fixed set of questions a run can ask about the song data.

use crate::song::Song;
use std::fmt;

/// Decides whether a song answers a question.
pub type Predicate = fn(&Song) -> bool;

/// A question selector together with the predicate it picks.
#[derive(Clone, Copy)]
pub struct Question {
    pub selector: i64,
    pub description: &'static str,
    predicate: Predicate,
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        selector: 1,
        description: "songs by Rae Spoon released before 2020",
        predicate: rae_spoon_before_2020,
    },
    Question {
        selector: 2,
        description: "songs by Tate McRae released in 2020 or later",
        predicate: tate_mcrae_since_2020,
    },
    Question {
        selector: 3,
        description: "songs by The Weeknd in a major mode released before 2020",
        predicate: weeknd_major_before_2020,
    },
    Question {
        selector: 4,
        description: "songs in D or A released in 2020 or later on more than 5000 playlists",
        predicate: popular_d_or_a_since_2020,
    },
    Question {
        selector: 5,
        description: "songs featuring Drake released in 2021 or 2022",
        predicate: drake_2021_2022,
    },
];

fn rae_spoon_before_2020(song: &Song) -> bool {
    song.released_year < 2020 && song.artist_name == "Rae Spoon"
}

fn tate_mcrae_since_2020(song: &Song) -> bool {
    song.released_year >= 2020 && song.artist_name == "Tate McRae"
}

fn weeknd_major_before_2020(song: &Song) -> bool {
    song.artist_name == "The Weeknd" && song.released_year < 2020 && song.mode.contains("Major")
}

fn popular_d_or_a_since_2020(song: &Song) -> bool {
    song.released_year >= 2020 && song.in_playlists > 5000 && (song.key == "D" || song.key == "A")
}

fn drake_2021_2022(song: &Song) -> bool {
    (2021..=2022).contains(&song.released_year) && song.artist_name.contains("Drake")
}

fn select_nothing(_: &Song) -> bool {
    false
}

impl Question {
    /// Look up the question for a selector. Unknown selectors give a question
    /// that accepts no song at all.
    pub fn from_selector(selector: i64) -> Question {
        QUESTIONS
            .iter()
            .find(|q| q.selector == selector)
            .copied()
            .unwrap_or(Question {
                selector,
                description: "unrecognized question, selects nothing",
                predicate: select_nothing,
            })
    }

    pub fn is_recognized(&self) -> bool {
        QUESTIONS.iter().any(|q| q.selector == self.selector)
    }

    pub fn accepts(&self, song: &Song) -> bool {
        (self.predicate)(song)
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("selector", &self.selector)
            .field("description", &self.description)
            .finish()
    }
}
