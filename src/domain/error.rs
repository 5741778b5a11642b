//! Error types for the palette.
//!
//! This module defines the centralized error type [`PaletteError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Nothing in the palette core is fatal: errors raised while decoding provider
//! output are converted into empty pools plus a status message before they reach
//! the composer, and the plugin shim only logs what `handle_event` returns.

use thiserror::Error;

/// The main error type for palette operations.
///
/// # Examples
///
/// ```
/// use wp_palette::domain::PaletteError;
///
/// fn require_slug(slug: Option<&str>) -> Result<&str, PaletteError> {
///     slug.ok_or_else(|| PaletteError::Provider("missing slug".to_string()))
/// }
///
/// assert!(require_slug(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A WP-CLI invocation failed or returned something unusable.
    ///
    /// The string carries the trimmed stderr of the command or a description
    /// of the problem.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider output was not the JSON shape we expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is unusable; the shim logs it and keeps the default.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert_with_question_mark() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }

        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, PaletteError::Decode(_)));
        assert!(err.to_string().starts_with("Decode error:"));
    }

    #[test]
    fn provider_error_message_includes_detail() {
        let err = PaletteError::Provider("Error: This does not seem to be a WordPress installation.".into());
        assert_eq!(
            err.to_string(),
            "Provider error: Error: This does not seem to be a WordPress installation."
        );
    }
}
