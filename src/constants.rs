//! Application constants.
//!
//! Centralizes the recognized line prefixes and the shipped sample input.

/// Line prefix constants.
pub mod prefix {
    /// Prefix marking a title line.
    pub const TITLE: &str = "Title:";

    /// Prefix marking a description line.
    pub const DESCRIPTION: &str = "Description:";
}

/// Configuration defaults.
pub mod defaults {
    /// Tracing filter used when neither `RUST_LOG` nor `WORDMAP_LOG` is set.
    pub const LOG_FILTER: &str = "wordmap=warn";
}

/// Environment variable names read by [`crate::config::Config`].
pub mod env {
    /// Default output format (`python`, `json` or `pretty`).
    pub const FORMAT: &str = "WORDMAP_FORMAT";

    /// Default tracing filter when `RUST_LOG` is unset.
    pub const LOG: &str = "WORDMAP_LOG";
}

/// Sample post mapped by the binary when no input is supplied.
pub const SAMPLE_LINES: [&str; 2] = [
    "Title: I am exploiting my employer and I have never been happier",
    "Description: [deleted]",
];
