//! Core type definitions.
//!
//! [`Field`] classifies an input line by its prefix and [`WordMapping`] is
//! the `(word, line)` pair produced for every word of a classified line.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;

use crate::constants::prefix;

/// The field a line belongs to, decided by its literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Line starting with `Title:`.
    Title,
    /// Line starting with `Description:`.
    Description,
}

impl Field {
    /// Returns all fields in the order they are checked against a line.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Title, Self::Description]
    }

    /// Returns the literal prefix that marks this field.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Title => prefix::TITLE,
            Self::Description => prefix::DESCRIPTION,
        }
    }

    /// Returns the human-readable name of this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
        }
    }

    /// Classify a line, returning its field and the content after the prefix.
    ///
    /// The match is case-sensitive and anchored at the very first byte, so
    /// `" Title: x"` and `"title: x"` are not recognized.
    pub fn classify(line: &str) -> Option<(Self, &str)> {
        Self::all()
            .iter()
            .find_map(|&field| line.strip_prefix(field.prefix()).map(|rest| (field, rest)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One word paired with the full line it was extracted from.
///
/// Serializes as the two-element array `[word, line]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordMapping {
    /// A single whitespace-delimited token.
    pub word: String,
    /// The original input line, prefix included, never trimmed.
    pub line: String,
    /// Which prefix the line carried.
    pub field: Field,
}

impl WordMapping {
    /// Create a new mapping pair.
    pub fn new(word: impl Into<String>, line: impl Into<String>, field: Field) -> Self {
        Self {
            word: word.into(),
            line: line.into(),
            field,
        }
    }

    /// Borrow the pair as `(word, line)`.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.word, &self.line)
    }
}

impl Serialize for WordMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.word)?;
        pair.serialize_element(&self.line)?;
        pair.end()
    }
}

impl From<WordMapping> for (String, String) {
    fn from(mapping: WordMapping) -> Self {
        (mapping.word, mapping.line)
    }
}
