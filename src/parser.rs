use crate::config::ConfigError;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{digit1, one_of};
use nom::combinator::{opt, recognize, rest, verify};
use nom::error::VerboseError;
use nom::sequence::{pair, preceded, separated_pair};
use nom::{Finish, IResult};

/// A single `key=value` command line setting, not yet validated.
/// Use [`Config::from_assignments`](crate::Config::from_assignments) to turn a list of these into a run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn assignment(i: &str) -> IResult<&str, (&str, &str), VerboseError<&str>> {
    separated_pair(
        take_while1(is_key_char),
        tag("="),
        verify(rest, |v: &str| !v.is_empty()),
    )(i)
}

/// Parse a `key=value` token. Everything after the first `=` is the value,
/// so values may themselves contain `=`.
pub fn parse_assignment(input: &str) -> Result<Assignment, ConfigError> {
    let (_, (key, value)) = assignment(input)
        .finish()
        .map_err(|_| ConfigError::MalformedArgument(input.to_string()))?;
    Ok(Assignment {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// The characters C `isspace` accepts: space, `\t`, `\n`, `\v`, `\f` and `\r`.
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn int_prefix(i: &str) -> IResult<&str, &str, VerboseError<&str>> {
    preceded(
        take_while(is_c_space),
        recognize(pair(opt(one_of("+-")), digit1)),
    )(i)
}

/// Permissive integer conversion with C `atoi` semantics: leading whitespace is
/// skipped, an optional sign and the longest run of digits are taken, and
/// anything after them is ignored. No digits at all, or a value that does not
/// fit in an `i64`, gives 0.
pub fn lenient_int(token: &str) -> i64 {
    match int_prefix(token) {
        Ok((_, digits)) => digits.parse().unwrap_or(0),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() -> anyhow::Result<()> {
        let a = parse_assignment("question=3")?;
        assert_eq!(a.key, "question");
        assert_eq!(a.value, "3");
        let a = parse_assignment("data=songs/top=2023.csv")?;
        assert_eq!(a.key, "data");
        assert_eq!(a.value, "songs/top=2023.csv");
        Ok(())
    }

    #[test]
    fn test_parse_assignment_malformed() {
        for bad in ["question", "=3", "data=", "", "two words=1"] {
            assert_eq!(
                parse_assignment(bad),
                Err(ConfigError::MalformedArgument(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("2021"), 2021);
        assert_eq!(lenient_int("  -15"), -15);
        assert_eq!(lenient_int("+8"), 8);
        assert_eq!(lenient_int("2019\n"), 2019);
        assert_eq!(lenient_int("\x0b\x0c\t 42"), 42);
        assert_eq!(lenient_int("12abc"), 12);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int("99999999999999999999999"), 0);
    }
}
