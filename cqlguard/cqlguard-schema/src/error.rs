//! Error types for schema fetching and validation.
//!
//! Both kinds are plain records: a message plus an optional underlying cause,
//! exposed through [`std::error::Error::source`].

/// The provider could not produce a schema snapshot.
#[derive(Debug, thiserror::Error)]
#[error("schema definition provider error: {message}")]
pub struct SchemaDefinitionProviderError {
    pub message: String,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SchemaDefinitionProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }
}

/// A statement is inconsistent with the schema.
#[derive(Debug, thiserror::Error)]
#[error("schema validation error: {message}")]
pub struct SchemaValidatorError {
    pub message: String,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SchemaValidatorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }
}

/// Any error reported by [`SchemaValidator`](crate::SchemaValidator).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    DefinitionProvider(#[from] SchemaDefinitionProviderError),

    #[error(transparent)]
    Validator(#[from] SchemaValidatorError),
}

impl SchemaError {
    /// Shorthand for a [`SchemaValidatorError`] without a cause.
    pub fn validator(message: impl Into<String>) -> Self {
        Self::Validator(SchemaValidatorError::new(message))
    }

    pub fn message(&self) -> &str {
        match self {
            SchemaError::DefinitionProvider(e) => &e.message,
            SchemaError::Validator(e) => &e.message,
        }
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, SchemaError::DefinitionProvider(_))
    }
}
