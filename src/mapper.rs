//! Word-to-line mapping.
//!
//! Scans lines in order, keeps those starting with `Title:` or
//! `Description:`, and pairs every word after the prefix with the full
//! original line.

use crate::types::{Field, WordMapping};

/// Whether `c` separates words.
///
/// Covers Unicode `White_Space` plus the ASCII information separators
/// (`U+001C..=U+001F`), which generic whitespace splitting also treats as
/// blanks.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Split content into words on runs of whitespace.
///
/// Leading and trailing whitespace produce no empty tokens, so blank
/// content yields nothing.
pub fn split_words(content: &str) -> impl Iterator<Item = &str> {
    content.split(is_separator).filter(|word| !word.is_empty())
}

/// Words a single line contributes, empty if the line has no recognized prefix.
pub fn words_in_line(line: &str) -> Vec<&str> {
    Field::classify(line).map_or_else(Vec::new, |(_, content)| split_words(content).collect())
}

/// Number of pairs [`map_words`] would produce for `lines`.
pub fn count_words<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            Field::classify(line.as_ref()).map(|(_, content)| split_words(content).count())
        })
        .sum()
}

/// Map every word of every `Title:`/`Description:` line to that line.
///
/// Pairs follow input line order, then left-to-right word order. Lines
/// without a recognized prefix are skipped.
pub fn map_words<I, S>(lines: I) -> Vec<WordMapping>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mappings = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();

        let Some((field, content)) = Field::classify(line) else {
            tracing::trace!(index, "skipping line without a recognized prefix");
            continue;
        };

        mappings.extend(split_words(content).map(|word| WordMapping::new(word, line, field)));
    }

    tracing::debug!(pairs = mappings.len(), "mapped words to lines");
    mappings
}
