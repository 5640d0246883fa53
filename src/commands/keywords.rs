//! Keyword set parsing for the find commands.

use std::collections::HashSet;

use crate::commands::grammar::KEYWORDS_ARGS;

/// Splits an argument string into a set of whitespace separated keywords.
///
/// Returns `None` when no keyword is present. Duplicates collapse and the set
/// order carries no meaning.
pub fn parse_keywords(args: &str) -> Option<HashSet<String>> {
    let caps = KEYWORDS_ARGS.captures(args.trim())?;

    Some(
        caps["keywords"]
            .split_whitespace()
            .map(str::to_owned)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keywords: &[&str]) -> HashSet<String> {
        keywords.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_parse_keywords_collapses_duplicates() {
        assert_eq!(
            parse_keywords(" alice bob alice"),
            Some(set(&["alice", "bob"]))
        );
    }

    #[test]
    fn test_parse_keywords_any_whitespace_run() {
        assert_eq!(
            parse_keywords("Arsenal \t  Chelsea"),
            Some(set(&["Arsenal", "Chelsea"]))
        );
    }

    #[test]
    fn test_parse_keywords_is_case_sensitive() {
        assert_eq!(parse_keywords("Bob bob").map(|k| k.len()), Some(2));
    }

    #[test]
    fn test_parse_keywords_empty() {
        assert_eq!(parse_keywords(""), None);
        assert_eq!(parse_keywords("   "), None);
    }
}
