// ── Core error types ──
//
// Errors raised while resolving, completing and executing a chat command.
// Handlers never see HTTP status codes or JSON failures directly: the
// `From<merakiops_api::Error>` impl folds every gateway failure into
// `Upstream`.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Resolution ───────────────────────────────────────────────────
    /// A human-readable name matched nothing in its scope.
    #[error("{entity} not found: {name}")]
    NotFound { entity: String, name: String },

    // ── Registry ─────────────────────────────────────────────────────
    #[error("Unknown command: {group} {name}")]
    UnknownCommand { group: String, name: String },

    // ── Gateway ──────────────────────────────────────────────────────
    /// The Dashboard API call failed, timed out or returned malformed data.
    #[error("Dashboard API error: {message}")]
    Upstream {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Input ────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    // ── Internal errors ──────────────────────────────────────────────
    /// Broken command declaration, e.g. a parameter whose dependency
    /// is declared after it.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn not_found(entity: &str, name: &str) -> Self {
        Self::NotFound {
            entity: entity.to_owned(),
            name: name.to_owned(),
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }

    /// `true` for errors that indicate a bug rather than bad input or a
    /// failing upstream. These are not turned into chat warnings.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. } | Self::Internal(_))
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<merakiops_api::Error> for CoreError {
    fn from(err: merakiops_api::Error) -> Self {
        let status = err.status();
        let message = match err {
            merakiops_api::Error::Api { message, .. }
            | merakiops_api::Error::InvalidApiKey { message } => message,
            merakiops_api::Error::Transport(ref e) if e.is_timeout() => {
                format!("request timed out: {e}")
            }
            other => other.to_string(),
        };
        CoreError::Upstream { message, status }
    }
}
