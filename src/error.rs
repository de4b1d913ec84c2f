//! Top-level error types for the recipe driver.

use thiserror::Error;

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Main error type for all driver operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Recipe errors
    #[error("recipe error: {0}")]
    Recipe(#[from] crate::recipe::Error),

    /// Lifecycle failures carrying the failing stage
    #[error("{0}")]
    Stage(#[from] crate::recipe::StageFailure),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}
