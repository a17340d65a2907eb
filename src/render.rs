//! Textual representations of a mapping sequence.

use std::fmt::Write;
use std::str::FromStr;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{Error, Result};
use crate::types::WordMapping;

/// Output representation for a list of [`WordMapping`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Python list-of-lists literal, e.g. `[['I', 'Title: I']]`.
    #[default]
    Python,
    /// Compact JSON array of `[word, line]` arrays.
    Json,
    /// Indented JSON array of `[word, line]` arrays.
    Pretty,
}

impl OutputFormat {
    /// Returns the name used on the command line and in `WORDMAP_FORMAT`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(Error::config(
                format!("unknown output format `{other}`"),
                "Use one of: python, json, pretty",
            )),
        }
    }
}

/// Render mappings in the requested format.
pub fn render(mappings: &[WordMapping], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Python => Ok(to_python_literal(mappings)),
        OutputFormat::Json => Ok(serde_json::to_string(mappings)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(mappings)?),
    }
}

/// Render as a Python list of `[word, line]` lists.
fn to_python_literal(mappings: &[WordMapping]) -> String {
    let mut out = String::from("[");
    for (i, mapping) in mappings.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('[');
        push_python_str(&mut out, &mapping.word);
        out.push_str(", ");
        push_python_str(&mut out, &mapping.line);
        out.push(']');
    }
    out.push(']');
    out
}

/// Append `s` quoted the way Python's `repr` quotes a `str`.
///
/// Single quotes unless the text holds a `'` and no `"`. Characters that are
/// not printable are written as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
fn push_python_str(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = u32::from(c);
                let _ = match code {
                    0..=0xff => write!(out, "\\x{code:02x}"),
                    0x100..=0xffff => write!(out, "\\u{code:04x}"),
                    _ => write!(out, "\\U{code:08x}"),
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Whether `repr` would print `c` as-is.
///
/// Everything in the Other and Separator categories is escaped, except the
/// plain space.
fn is_printable(c: char) -> bool {
    use GeneralCategory as Gc;

    c == ' '
        || !matches!(
            get_general_category(c),
            Gc::Control
                | Gc::Format
                | Gc::PrivateUse
                | Gc::Unassigned
                | Gc::LineSeparator
                | Gc::ParagraphSeparator
                | Gc::SpaceSeparator
        )
}
