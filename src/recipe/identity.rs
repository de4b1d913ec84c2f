//! Settings-invariant package identity.
//!
//! A header-only package builds identically for every configuration, so
//! the identity digest must not move when `os`, `compiler`,
//! `build_type`, `arch`, or any option changes. The identity record
//! carries those fields only so they can be cleared before hashing;
//! what remains is the package name and pinned version.

use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::recipe::settings::Settings;

/// Stable identity of a built package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageId(String);

impl PackageId {
    /// Hex-encoded SHA-256 digest, 64 characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The record the identity digest is taken over.
#[derive(Serialize)]
struct IdentityRecord<'a> {
    name: &'a str,
    version: Option<&'a str>,
    settings: BTreeMap<&'static str, String>,
    options: BTreeMap<&'static str, String>,
}

impl<'a> IdentityRecord<'a> {
    fn from_settings(settings: &'a Settings) -> Self {
        let build = settings.build_settings();
        let mut record_settings = BTreeMap::new();
        for (key, value) in [
            ("os", &build.os),
            ("compiler", &build.compiler),
            ("compiler.cppstd", &build.cppstd),
            ("build_type", &build.build_type),
            ("arch", &build.arch),
        ] {
            if let Some(value) = value {
                record_settings.insert(key, value.clone());
            }
        }

        let mut options = BTreeMap::new();
        options.insert("with_tests", settings.options().with_tests.to_string());

        Self {
            name: &settings.identity().name,
            version: settings.identity().version.as_deref(),
            settings: record_settings,
            options,
        }
    }

    /// Drops every settings- and options-derived field.
    fn clear(&mut self) {
        self.settings.clear();
        self.options.clear();
    }
}

/// Computes the settings-invariant identity for this package.
pub fn package_id(settings: &Settings) -> PackageId {
    let mut record = IdentityRecord::from_settings(settings);
    record.clear();

    // BTreeMap keys keep the serialized form deterministic.
    let serialized =
        serde_json::to_vec(&record).unwrap_or_else(|_| record.name.as_bytes().to_vec());

    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    PackageId(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::settings::{BuildSettings, RecipeOptions, SettingsBuilder};

    fn settings_with(build: BuildSettings, options: RecipeOptions) -> Settings {
        SettingsBuilder::new()
            .options(options)
            .build_settings(build)
            .source_folder("/src")
            .package_folder("/out")
            .build()
            .unwrap()
    }

    #[test]
    fn identity_ignores_build_settings() {
        let linux = settings_with(
            BuildSettings::from_pairs(["os=Linux", "compiler=gcc", "arch=x86_64"]).unwrap(),
            RecipeOptions::default(),
        );
        let windows = settings_with(
            BuildSettings::from_pairs(["os=Windows", "compiler=msvc", "arch=armv8"]).unwrap(),
            RecipeOptions::default(),
        );
        assert_eq!(package_id(&linux), package_id(&windows));
    }

    #[test]
    fn identity_ignores_options() {
        let without = settings_with(BuildSettings::default(), RecipeOptions::default());
        let with = settings_with(
            BuildSettings::default(),
            RecipeOptions { with_tests: true },
        );
        assert_eq!(package_id(&without), package_id(&with));
    }

    #[test]
    fn identity_is_a_hex_sha256() {
        let settings = settings_with(BuildSettings::default(), RecipeOptions::default());
        let id = package_id(&settings);
        assert_eq!(id.as_str().len(), 64);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn identity_tracks_the_pinned_version() {
        let unpinned = settings_with(BuildSettings::default(), RecipeOptions::default());

        let pinned = SettingsBuilder::new()
            .identity(
                crate::recipe::settings::PackageIdentity::retrolib().with_version("0.1.0"),
            )
            .source_folder("/src")
            .package_folder("/out")
            .build()
            .unwrap();

        assert_ne!(package_id(&unpinned), package_id(&pinned));
    }
}
