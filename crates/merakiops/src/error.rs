//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use merakiops_config::ConfigError;
use merakiops_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("No API key configured for profile '{profile}'")]
    #[diagnostic(
        code(merakiops::no_credentials),
        help(
            "Pass --api-key, set MERAKI_DASHBOARD_API_KEY, or add api_key to the\n\
             profile in {path}"
        )
    )]
    NoCredentials { profile: String, path: String },

    #[error("Dashboard rejected the API key: {message}")]
    #[diagnostic(
        code(merakiops::auth_failed),
        help("Check that the key is valid and has access to the organization.")
    )]
    AuthFailed { message: String },

    // ── Commands ─────────────────────────────────────────────────────
    #[error("Unknown command '{group} {name}'")]
    #[diagnostic(
        code(merakiops::unknown_command),
        help("Run: merakiops commands")
    )]
    UnknownCommand { group: String, name: String },

    #[error("{entity} '{name}' not found")]
    #[diagnostic(code(merakiops::not_found))]
    NotFound { entity: String, name: String },

    #[error("{command} finished with status FAILED")]
    #[diagnostic(
        code(merakiops::command_failed),
        help("The warning above explains what went wrong.")
    )]
    CommandFailed { command: String },

    // ── Upstream ─────────────────────────────────────────────────────
    #[error("Dashboard request failed: {message}")]
    #[diagnostic(code(merakiops::upstream))]
    Upstream { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(merakiops::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Could not load configuration")]
    #[diagnostic(code(merakiops::config))]
    Config(#[source] ConfigError),

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(merakiops::internal),
        help("This is a bug in a command declaration, please report it.")
    )]
    Internal(String),

    #[error(transparent)]
    #[diagnostic(code(merakiops::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoCredentials { .. } | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::UnknownCommand { .. } | Self::Validation { .. } => exit_code::USAGE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Upstream { .. } => exit_code::CONNECTION,
            Self::CommandFailed { .. } | Self::Config(_) | Self::Internal(_) | Self::Io(_) => {
                exit_code::GENERAL
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, name } => Self::NotFound { entity, name },
            CoreError::UnknownCommand { group, name } => Self::UnknownCommand { group, name },
            CoreError::Upstream {
                message,
                status: Some(401 | 403),
            } => Self::AuthFailed { message },
            CoreError::Upstream { message, .. } => Self::Upstream { message },
            CoreError::Validation { field, reason } => Self::Validation { field, reason },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

impl From<merakiops_api::Error> for CliError {
    fn from(err: merakiops_api::Error) -> Self {
        CoreError::from(err).into()
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials {
                profile,
                path: merakiops_config::config_path().display().to_string(),
            },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

/// Wrap a terminal prompt failure.
pub fn prompt_err(err: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: err.to_string(),
    }
}
