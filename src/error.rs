//! Application error types.
//!
//! Mapping itself never fails; these cover the driver around it: reading
//! input, loading configuration and rendering output.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with a description of what was being read or written
    #[error("IO error while {context}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// What the program was doing when the error occurred.
        context: &'static str,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Output serialization error
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl Error {
    /// Create an IO error with context
    pub const fn io(source: std::io::Error, context: &'static str) -> Self {
        Self::Io { source, context }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("unknown format `xml`", "Use one of: python, json, pretty");
        let msg = err.to_string();
        assert!(msg.contains("`xml`"));
        assert!(msg.ends_with("Use one of: python, json, pretty"));
    }

    #[test]
    fn io_error_carries_context() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = Error::io(source, "reading stdin");
        assert_eq!(
            err.to_string(),
            "IO error while reading stdin: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn json_error_converts_to_render() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = Error::from(source);
        assert!(matches!(err, Error::Render(_)));
        assert!(err.to_string().starts_with("Failed to render output: "));
    }
}
