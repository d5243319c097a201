//! Error types for authentication, durable storage, and session restore.
//!
//! Permission checks have no error type: they are total and default to deny.

use validator::ValidationErrors;

/// Failure of the durable key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure of the Authentication Operation.
///
/// None of these variants changes the session: the caller branches on the
/// variant and the current principal (if any) stays as it was.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Malformed input, rejected before any credential lookup.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Well-formed input with no matching principal. The message does not say
    /// which of the two fields was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The session changed (logout or another login) while this attempt was
    /// pending, so its result was discarded.
    #[error("Login attempt superseded by a newer session change")]
    Superseded,

    /// The principal could not be persisted.
    #[error("Failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Short label used for metrics and structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::Validation(_) => "validation",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::Superseded => "superseded",
            AuthError::Storage(_) => "storage",
        }
    }
}

/// Joins the field-level messages of a validation failure, sorted by field.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Internal session restore failures. These are logged and self-healed,
/// never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Corrupt session data under key '{key}': {reason}")]
    CorruptSessionData { key: String, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
