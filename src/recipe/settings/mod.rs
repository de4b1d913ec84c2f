//! Configuration structures for the recipe lifecycle.
//!
//! Identity metadata, recipe options, orchestrator-provided build
//! settings, and the per-invocation [`Settings`] snapshot with its
//! builder.

mod build;
mod builder;
mod core;
mod options;
mod package;

pub use build::{BuildSettings, Profile};
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use options::{RecipeOptions, WITH_TESTS};
pub use package::{PackageIdentity, PackageType};
