//! Package recipe engine for the RetroLib header-only C++20 library.
//!
//! Models the declarative recipe a build orchestrator consumes:
//! - identity metadata and a single `with_tests` option
//! - layout resolution (test tree vs the `RetroLib` subdirectory)
//! - conditional test-framework requirements and generator files
//! - a minimum C++ standard check
//! - header staging into the package output tree
//! - fixed consumer metadata
//!
//! It can be used as a library or through the bundled CLI driver.

pub mod cli;
pub mod error;
pub mod recipe;

// Re-export commonly used types
pub use error::{CliError, RecipeError, Result};
