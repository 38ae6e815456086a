//! Error types for dialect assembly and value conversion.

use crate::value::ValueKind;

/// Boxed cause carried by a [`DialectError::ConversionFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while configuring dialects or converting values.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// Invalid dialect, naming or capability configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A converter delegated to a native constructor that failed.
    #[error("Conversion failed in '{converter}': {source}")]
    ConversionFailed {
        /// Name of the converter that failed.
        converter: &'static str,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },

    /// A converter was handed a value of a kind it does not accept.
    #[error("Converter '{converter}' expects {expected}, found {found}")]
    UnexpectedSource {
        /// Name of the converter.
        converter: &'static str,
        /// The declared source kind.
        expected: ValueKind,
        /// The kind of the value actually passed.
        found: ValueKind,
    },

    /// Malformed configuration document.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DialectError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Wraps a native failure raised inside the named converter.
    #[must_use]
    pub fn conversion_failed(
        converter: &'static str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::ConversionFailed {
            converter,
            source: source.into(),
        }
    }

    /// Returns `true` for configuration errors, including malformed documents.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Serialization(_))
    }
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
