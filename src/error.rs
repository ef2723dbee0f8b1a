//! Error types for head building.

use thiserror::Error;

/// Errors raised while building a `<head>` block.
///
/// Only JSON-LD serialization can fail; every other registration treats
/// empty or absent input as a no-op.
#[derive(Debug, Error)]
pub enum HeadError {
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HeadError {
    /// Wrap a JSON serialization failure, keeping its category and position.
    pub(crate) fn invalid_input(source: serde_json::Error) -> Self {
        let category = match source.classify() {
            serde_json::error::Category::Io => "io",
            serde_json::error::Category::Syntax => "syntax",
            serde_json::error::Category::Data => "data",
            serde_json::error::Category::Eof => "eof",
        };
        let message = if source.line() > 0 {
            format!(
                "json-ld could not be serialized ({category} at {}:{}): {source}",
                source.line(),
                source.column()
            )
        } else {
            format!("json-ld could not be serialized ({category}): {source}")
        };
        Self::InvalidInput { message, source }
    }
}

pub type Result<T> = std::result::Result<T, HeadError>;
