//! Display index parsing shared by every index-based command.

use std::num::{NonZeroUsize, ParseIntError};

use crate::commands::grammar::INDEX_ARGS;

/// Errors that can occur while parsing a display index.
///
/// Callers currently fold both variants into the same feedback; they are kept
/// apart so each path can be checked on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexParseError {
    /// The arguments hold no index at all
    NoIndexFound,
    /// An index was found but is not a positive integer
    NotANumber(ParseIntError),
}

/// Parses an argument string as a single 1-based display index.
///
/// The whole trimmed string must be the index. Zero, negative numbers and
/// values that overflow `usize` are all [`IndexParseError::NotANumber`].
///
/// # Examples
///
/// ```
/// # use roster::commands::index::{parse_display_index, IndexParseError};
/// assert_eq!(parse_display_index(" 3 "), Ok(3));
/// assert_eq!(parse_display_index(""), Err(IndexParseError::NoIndexFound));
/// assert!(matches!(parse_display_index("abc"), Err(IndexParseError::NotANumber(_))));
/// ```
pub fn parse_display_index(args: &str) -> Result<usize, IndexParseError> {
    let Some(caps) = INDEX_ARGS.captures(args.trim()) else {
        return Err(IndexParseError::NoIndexFound);
    };

    caps["targetIndex"]
        .parse::<NonZeroUsize>()
        .map(NonZeroUsize::get)
        .map_err(IndexParseError::NotANumber)
}

#[cfg(test)]
mod tests {
    use std::num::IntErrorKind;

    use super::*;

    fn kind(result: Result<usize, IndexParseError>) -> IntErrorKind {
        match result {
            Err(IndexParseError::NotANumber(e)) => e.kind().clone(),
            other => panic!("expected a value failure, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_display_index_valid() {
        assert_eq!(parse_display_index("3"), Ok(3));
        assert_eq!(parse_display_index("  42\t"), Ok(42));
        assert_eq!(parse_display_index("+7"), Ok(7));
    }

    #[test]
    fn test_parse_display_index_missing() {
        assert_eq!(parse_display_index(""), Err(IndexParseError::NoIndexFound));
        assert_eq!(
            parse_display_index("   "),
            Err(IndexParseError::NoIndexFound)
        );
    }

    #[test]
    fn test_parse_display_index_not_a_number() {
        assert_eq!(kind(parse_display_index("abc")), IntErrorKind::InvalidDigit);
        assert_eq!(kind(parse_display_index("1 2")), IntErrorKind::InvalidDigit);
        assert_eq!(kind(parse_display_index("-3")), IntErrorKind::InvalidDigit);
    }

    #[test]
    fn test_parse_display_index_zero() {
        assert_eq!(kind(parse_display_index("0")), IntErrorKind::Zero);
    }

    #[test]
    fn test_parse_display_index_overflow() {
        assert_eq!(
            kind(parse_display_index("99999999999999999999999999")),
            IntErrorKind::PosOverflow
        );
    }
}
