//! Builder for constructing Settings.

use std::path::{Path, PathBuf};

use super::{BuildSettings, PackageIdentity, RecipeOptions, Settings};
use crate::recipe::error::{Error, Result};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use retrolib_recipe::recipe::settings::{RecipeOptions, SettingsBuilder};
///
/// # fn example() -> retrolib_recipe::recipe::Result<()> {
/// let settings = SettingsBuilder::new()
///     .options(RecipeOptions { with_tests: true })
///     .source_folder("/src/retrolib")
///     .package_folder("/out/retrolib")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    identity: Option<PackageIdentity>,
    options: RecipeOptions,
    build: BuildSettings,
    source_folder: Option<PathBuf>,
    package_folder: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package identity.
    ///
    /// Default: [`PackageIdentity::retrolib`]
    pub fn identity(mut self, identity: PackageIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Sets the resolved options.
    ///
    /// Default: all options at their declared defaults.
    pub fn options(mut self, options: RecipeOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the orchestrator-provided build settings.
    ///
    /// Default: no settings declared.
    pub fn build_settings(mut self, build: BuildSettings) -> Self {
        self.build = build;
        self
    }

    /// Sets the root of the exported source tree.
    ///
    /// # Required
    pub fn source_folder<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_folder = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the package output directory.
    ///
    /// # Required
    pub fn package_folder<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.package_folder = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when `source_folder` or
    /// `package_folder` was not provided.
    pub fn build(self) -> Result<Settings> {
        let source_folder = self
            .source_folder
            .ok_or(Error::MissingField("source_folder"))?;
        let package_folder = self
            .package_folder
            .ok_or(Error::MissingField("package_folder"))?;

        Ok(Settings::new(
            self.identity.unwrap_or_default(),
            self.options,
            self.build,
            source_folder,
            package_folder,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_source_folder() {
        let err = SettingsBuilder::new()
            .package_folder("/out")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("source_folder")));
    }

    #[test]
    fn build_requires_package_folder() {
        let err = SettingsBuilder::new()
            .source_folder("/src")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("package_folder")));
    }

    #[test]
    fn defaults_to_retrolib_identity() {
        let settings = SettingsBuilder::new()
            .source_folder("/src")
            .package_folder("/out")
            .build()
            .unwrap();
        assert_eq!(settings.identity().name, "retrolib");
        assert!(!settings.options().with_tests);
    }
}
