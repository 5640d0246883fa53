//! Tags attached to players, teams and matches.
//!
//! This module provides the [`Tag`] value object, the [`TagValidator`] seam used
//! by the command parser to turn raw strings into tags, and [`extract_tags`],
//! which splits the trailing ` t/value` group of a command into a tag set.
//!
//! # Tag Sets
//!
//! Tags are always collected into a [`HashSet`](std::collections::HashSet):
//! duplicates collapse silently and the order of the set carries no meaning.
//! Callers that display tags must sort them themselves.

mod extractor;
mod tag;

pub use crate::tags::extractor::extract_tags;
#[cfg(test)]
pub use crate::tags::tag::MockTagValidator;
pub use crate::tags::tag::{StrictTagValidator, Tag, TagError, TagValidator};
