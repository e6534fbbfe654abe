use crate::parser::Assignment;
use crate::song::NumericPolicy;
use std::path::PathBuf;
use thiserror::Error;

/// Where matching songs are written when no `output=` setting is given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("malformed argument '{0}', expected key=value")]
    MalformedArgument(String),

    #[error("unknown setting '{0}', expected one of question, data, output, numbers")]
    UnknownKey(String),

    #[error("setting '{0}' given more than once")]
    DuplicateKey(&'static str),

    #[error("missing required setting '{0}=...'")]
    Missing(&'static str),

    #[error("question must be an integer, got '{0}'")]
    InvalidQuestion(String),

    #[error("numbers must be 'lenient' or 'strict', got '{0}'")]
    InvalidPolicy(String),
}

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Question selector. Values outside 1-5 are kept and select nothing.
    pub question: i64,
    pub input: PathBuf,
    pub output: PathBuf,
    pub policy: NumericPolicy,
}

fn set_once(
    slot: &mut Option<String>,
    name: &'static str,
    value: String,
) -> Result<(), ConfigError> {
    if slot.replace(value).is_some() {
        return Err(ConfigError::DuplicateKey(name));
    }
    Ok(())
}

impl Config {
    /// Build a configuration from `key=value` settings given in any order.
    ///
    /// Keys may carry leading dashes (`--question=1`). Values under keys that are
    /// not recognized fill the question and then the data file, in the order given,
    /// if those were not named explicitly.
    pub fn from_assignments(
        assignments: impl IntoIterator<Item = Assignment>,
    ) -> Result<Config, ConfigError> {
        let mut question = None;
        let mut input = None;
        let mut output = None;
        let mut policy = None;
        let mut unnamed = Vec::new();
        for Assignment { key, value } in assignments {
            match key.trim_start_matches('-') {
                "question" | "q" => set_once(&mut question, "question", value)?,
                "data" | "file" | "input" => set_once(&mut input, "data", value)?,
                "output" => set_once(&mut output, "output", value)?,
                "numbers" => set_once(&mut policy, "numbers", value)?,
                _ => unnamed.push((key, value)),
            }
        }
        let mut unnamed = unnamed.into_iter();
        for slot in [&mut question, &mut input] {
            if slot.is_none() {
                *slot = unnamed.next().map(|(_, value)| value);
            }
        }
        if let Some((key, _)) = unnamed.next() {
            return Err(ConfigError::UnknownKey(key));
        }

        let question = question.ok_or(ConfigError::Missing("question"))?;
        let selector = question
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidQuestion(question.clone()))?;
        let input = input.ok_or(ConfigError::Missing("data"))?;
        let policy = match policy.as_deref() {
            None | Some("lenient") => NumericPolicy::Lenient,
            Some("strict") => NumericPolicy::Strict,
            Some(other) => return Err(ConfigError::InvalidPolicy(other.to_string())),
        };
        Ok(Config {
            question: selector,
            input: PathBuf::from(input),
            output: PathBuf::from(output.as_deref().unwrap_or(DEFAULT_OUTPUT)),
            policy,
        })
    }
}
