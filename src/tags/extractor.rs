//! Tag extraction from the trailing ` t/value` group of a command.

use std::collections::HashSet;

use log::debug;

use crate::tags::{Tag, TagValidator};

/// Separator introducing each tag in a command's argument string.
const TAG_SEPARATOR: &str = " t/";

/// Extracts a deduplicated tag set from a captured tag group.
///
/// The group is either empty or a repetition of ` t/value`. The leading
/// separator is consumed before splitting, then each raw value goes through
/// `validator`. Duplicates collapse without notice.
///
/// # Errors
///
/// Returns the validator's reason for the first raw tag it rejects. No tag set
/// is produced in that case.
pub fn extract_tags(
    tag_arguments: &str,
    validator: &dyn TagValidator,
) -> Result<HashSet<Tag>, String> {
    if tag_arguments.is_empty() {
        return Ok(HashSet::new());
    }

    let tags = tag_arguments
        .strip_prefix(TAG_SEPARATOR)
        .unwrap_or(tag_arguments)
        .split(TAG_SEPARATOR)
        .map(|raw| validator.validate(raw))
        .collect::<Result<HashSet<Tag>, String>>()?;

    debug!("extracted {} tag(s) from {:?}", tags.len(), tag_arguments);

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::tags::{MockTagValidator, StrictTagValidator};

    fn names(tags: &HashSet<Tag>) -> Vec<&str> {
        let mut names: Vec<&str> = tags.iter().map(Tag::name).collect();
        names.sort();
        names
    }

    #[test]
    fn test_extract_tags_empty_group() {
        let tags = extract_tags("", &StrictTagValidator).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_extract_tags_single() {
        let tags = extract_tags(" t/rich", &StrictTagValidator).unwrap();
        assert_eq!(names(&tags), vec!["rich"]);
    }

    #[test]
    fn test_extract_tags_merges_duplicates() {
        let tags = extract_tags(" t/rich t/old t/rich", &StrictTagValidator).unwrap();
        assert_eq!(names(&tags), vec!["old", "rich"]);
    }

    #[test]
    fn test_extract_tags_merges_after_trimming() {
        let tags = extract_tags(" t/rich  t/rich", &StrictTagValidator).unwrap();
        assert_eq!(names(&tags), vec!["rich"]);
    }

    #[test]
    fn test_extract_tags_keeps_inner_spaces() {
        let tags = extract_tags(" t/first team t/on loan", &StrictTagValidator).unwrap();
        assert_eq!(names(&tags), vec!["first team", "on loan"]);
    }

    #[test]
    fn test_extract_tags_blank_tag_rejected() {
        let result = extract_tags(" t/rich t/  ", &StrictTagValidator);
        assert_eq!(
            result,
            Err("Tags can be anything, but cannot be blank".to_owned())
        );
    }

    #[test]
    fn test_extract_tags_propagates_validator_reason() {
        let mut validator = MockTagValidator::new();
        validator
            .expect_validate()
            .with(eq("banned"))
            .times(1)
            .returning(|_| Err("No banned tags".to_owned()));

        let result = extract_tags(" t/banned", &validator);
        assert_eq!(result, Err("No banned tags".to_owned()));
    }

    #[test]
    fn test_extract_tags_validates_every_raw_value() {
        let mut validator = MockTagValidator::new();
        validator
            .expect_validate()
            .times(3)
            .returning(|raw| Tag::new(raw).map_err(|e| e.to_string()));

        let tags = extract_tags(" t/a t/b t/a", &validator).unwrap();
        assert_eq!(names(&tags), vec!["a", "b"]);
    }
}
