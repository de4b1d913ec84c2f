//! Package identity metadata.

use std::collections::BTreeSet;

/// How the package ships to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    /// Headers only, no compiled artifact.
    HeaderLibrary,
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageType::HeaderLibrary => write!(f, "header-library"),
        }
    }
}

/// Package identity metadata.
///
/// Fixed at authoring time and immutable for the lifetime of an
/// invocation. Only the version varies: it is supplied by the caller at
/// create time rather than authored into the recipe.
///
/// # Examples
///
/// ```
/// use retrolib_recipe::recipe::settings::PackageIdentity;
///
/// let identity = PackageIdentity::retrolib();
/// assert_eq!(identity.name, "retrolib");
/// assert_eq!(identity.license, "MIT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    /// Package name.
    pub name: String,

    /// Version, if the caller pinned one.
    ///
    /// Default: None
    pub version: Option<String>,

    /// SPDX license identifier.
    pub license: String,

    /// Upstream project URL.
    pub url: String,

    /// Brief description of the packaged library.
    pub description: String,

    /// Search topics for package indexes.
    pub topics: BTreeSet<String>,

    /// Distribution form of the package.
    pub package_type: PackageType,

    /// Source patterns exported alongside the recipe.
    ///
    /// Informational; the local driver stages headers only.
    pub exports_sources: Vec<String>,
}

impl PackageIdentity {
    /// Authored identity for the RetroLib library.
    pub fn retrolib() -> Self {
        Self {
            name: "retrolib".into(),
            version: None,
            license: "MIT".into(),
            url: "https://github.com/retro-cpp/retrolib".into(),
            description: "An extension to the standard library for C++20".into(),
            topics: [
                "range",
                "range-library",
                "utility",
                "iterator",
                "header-only",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            package_type: PackageType::HeaderLibrary,
            exports_sources: vec![
                "RetroLib/*".into(),
                "CMakeLists.txt".into(),
                "cmake/*".into(),
            ],
        }
    }

    /// Returns the same identity with a pinned version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl Default for PackageIdentity {
    fn default() -> Self {
        Self::retrolib()
    }
}
