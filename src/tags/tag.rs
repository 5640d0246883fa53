//! Tag value object and validation.
//!
//! A tag is any string that is non-empty once trimmed. Two tags are equal when
//! their trimmed names are equal, which is what makes tag sets deduplicate
//! `t/rich t/rich` into a single tag.

use std::fmt;

#[cfg(test)]
use mockall::automock;

/// Errors raised while building a [`Tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The tag name is empty after trimming
    Blank,
}

impl TagError {
    /// User-facing message for the error.
    pub fn message(&self) -> &'static str {
        match self {
            TagError::Blank => "Tags can be anything, but cannot be blank",
        }
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TagError {}

/// An immutable, validated tag.
///
/// The only way to obtain a `Tag` is through [`Tag::new`], so every tag in a
/// parsed command is guaranteed to hold a non-blank, trimmed name.
///
/// # Examples
///
/// ```
/// use roster::tags::Tag;
///
/// let tag = Tag::new("  rich ").unwrap();
/// assert_eq!(tag.name(), "rich");
/// assert_eq!(tag.to_string(), "[rich]");
/// assert!(Tag::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Validates and normalizes a raw tag name.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::Blank`] if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, TagError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(TagError::Blank);
        }

        Ok(Tag {
            name: name.to_owned(),
        })
    }

    /// The normalized tag name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// Turns a raw tag string into a [`Tag`], or explains why it cannot.
///
/// The command parser only depends on this pass/fail contract: on failure the
/// returned reason is shown to the user unmodified.
#[cfg_attr(test, automock)]
pub trait TagValidator {
    /// Validates a single raw tag string.
    fn validate(&self, raw: &str) -> Result<Tag, String>;
}

/// Default validator backed by [`Tag::new`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictTagValidator;

impl TagValidator for StrictTagValidator {
    fn validate(&self, raw: &str) -> Result<Tag, String> {
        Tag::new(raw).map_err(|e| e.message().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tag_is_trimmed() {
        let tag = Tag::new("  captain\t").unwrap();
        assert_eq!(tag.name(), "captain");
    }

    #[test]
    fn test_tag_blank_is_rejected() {
        assert_eq!(Tag::new(""), Err(TagError::Blank));
        assert_eq!(Tag::new("  \t "), Err(TagError::Blank));
    }

    #[test]
    fn test_tags_equal_by_normalized_name() {
        let tags: HashSet<Tag> = ["rich", " rich", "rich  ", "poor"]
            .iter()
            .map(|raw| Tag::new(raw).unwrap())
            .collect();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::new("veteran").unwrap().to_string(), "[veteran]");
    }

    #[test]
    fn test_strict_validator_message() {
        let result = StrictTagValidator.validate(" ");
        assert_eq!(
            result,
            Err("Tags can be anything, but cannot be blank".to_owned())
        );
    }

    #[test]
    fn test_strict_validator_accepts_anything_non_blank() {
        let tag = StrictTagValidator.validate("under 21 !").unwrap();
        assert_eq!(tag.name(), "under 21 !");
    }
}
