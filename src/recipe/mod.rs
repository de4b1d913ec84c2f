//! The RetroLib package recipe.
//!
//! A declarative record an external build orchestrator consumes:
//! identity metadata, one build option, a minimum-standard check,
//! conditional test dependencies, settings-invariant package identity,
//! header staging, and consumer metadata. The lifecycle runs through
//! [`pipeline::Pipeline`].

pub mod consumer;
pub mod deps;
pub mod error;
pub mod identity;
pub mod layout;
pub mod pipeline;
pub mod settings;
pub mod stage;
pub mod validate;

// Re-export commonly used types
pub use consumer::{ConsumerInfo, emit_consumer_info};
pub use deps::{DependencyGraph, Requirement};
pub use error::{Error, Result};
pub use identity::{PackageId, package_id};
pub use layout::{Layout, LayoutKind, resolve_layout};
pub use pipeline::{Pipeline, PipelineReport, StageFailure, StageKind};
pub use settings::{
    BuildSettings, PackageIdentity, Profile, RecipeOptions, Settings, SettingsBuilder,
};
