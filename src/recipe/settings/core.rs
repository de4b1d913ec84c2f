//! Core Settings struct and accessors.

use std::path::{Path, PathBuf};

use super::{BuildSettings, PackageIdentity, RecipeOptions};

/// Per-invocation settings snapshot for the recipe lifecycle.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), then
/// passed by reference through every lifecycle stage. Nothing in here
/// mutates after construction and nothing persists across invocations.
///
/// # Examples
///
/// ```no_run
/// use retrolib_recipe::recipe::settings::SettingsBuilder;
///
/// # fn example() -> retrolib_recipe::recipe::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_folder("/src/retrolib")
///     .package_folder("/out/retrolib")
///     .build()?;
/// assert_eq!(settings.min_cpp_std(), 20);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package identity metadata.
    identity: PackageIdentity,

    /// Resolved recipe options.
    options: RecipeOptions,

    /// Orchestrator-provided build settings.
    build: BuildSettings,

    /// Root of the exported source tree.
    source_folder: PathBuf,

    /// Package output directory.
    package_folder: PathBuf,
}

impl Settings {
    pub(super) fn new(
        identity: PackageIdentity,
        options: RecipeOptions,
        build: BuildSettings,
        source_folder: PathBuf,
        package_folder: PathBuf,
    ) -> Self {
        Self {
            identity,
            options,
            build,
            source_folder,
            package_folder,
        }
    }

    /// Returns the package identity.
    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    /// Returns the resolved options.
    pub fn options(&self) -> &RecipeOptions {
        &self.options
    }

    /// Returns the orchestrator-provided build settings.
    pub fn build_settings(&self) -> &BuildSettings {
        &self.build
    }

    /// Returns the root of the exported source tree.
    pub fn source_folder(&self) -> &Path {
        &self.source_folder
    }

    /// Returns the package output directory.
    pub fn package_folder(&self) -> &Path {
        &self.package_folder
    }

    /// Lowest C++ standard the packaged headers accept.
    pub fn min_cpp_std(&self) -> u32 {
        20
    }
}
