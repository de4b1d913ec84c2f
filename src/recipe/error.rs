//! Error types for recipe lifecycle stages.
//!
//! All failures propagate unchanged to the caller; the recipe performs
//! no local recovery, retry, or fallback.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for recipe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by recipe lifecycle stages
#[derive(Error, Debug)]
pub enum Error {
    /// The consumer declared a language standard below the recipe minimum
    #[error(
        "current cppstd ({declared}) is lower than the required C++ standard ({required})"
    )]
    StandardTooLow {
        /// Minimum standard accepted by the recipe (e.g. 20)
        required: u32,
        /// Standard the consumer declared (e.g. "17", "gnu14")
        declared: String,
    },

    /// The declared source include directory does not exist
    #[error("source include directory does not exist: {}", path.display())]
    SourceNotFound {
        /// Path that was expected to hold the headers
        path: PathBuf,
    },

    /// A cppstd setting value that cannot be interpreted
    #[error("unrecognized cppstd setting: {value:?}")]
    InvalidCppStd {
        /// The value as the consumer declared it
        value: String,
    },

    /// An option value outside its declared domain
    #[error("invalid value {value:?} for option {option:?}: expected one of {domain:?}")]
    InvalidOptionValue {
        /// Option name
        option: String,
        /// Rejected value
        value: String,
        /// Declared domain for the option
        domain: &'static [&'static str],
    },

    /// An option name the recipe does not declare
    #[error("unknown option: {0:?}")]
    UnknownOption(String),

    /// A settings key the recipe does not recognize
    #[error("unknown setting: {0:?}")]
    UnknownSetting(String),

    /// A required builder field was not provided
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors
    #[error("{0}")]
    Generic(String),
}

/// Return early with a [`Error::Generic`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::recipe::Error::Generic(format!($($arg)*)).into())
    };
}
