//! `wordmap` - map words from `Title:`/`Description:` lines to their source line.
//!
//! [`map_words`] scans lines in order and pairs every word that follows a
//! recognized prefix with the full original line. Lines with any other
//! prefix are skipped.
//!
//! ```
//! use wordmap::map_words;
//!
//! let pairs = map_words(["Title: hello world", "Note: ignored"]);
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[1].as_pair(), ("world", "Title: hello world"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod mapper;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use mapper::{count_words, map_words, split_words, words_in_line};
pub use render::{render, OutputFormat};
pub use types::{Field, WordMapping};
