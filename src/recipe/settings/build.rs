//! Build settings supplied by the orchestrator.
//!
//! The orchestrator hands over `os`, `compiler` (with an optional nested
//! `compiler.cppstd`), `build_type`, and `arch`. All fields are accepted;
//! only `compiler.cppstd` is ever branched on (for the minimum-standard
//! check). Parsing is explicit field-by-field extraction, not dynamic
//! attribute lookup.

use std::path::Path;

use crate::recipe::error::{Error, Result};
use crate::recipe::settings::RecipeOptions;

/// Settings snapshot for one build configuration.
///
/// Every field is optional: an absent setting means "no constraint
/// requested", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    /// Target operating system (e.g. "Linux").
    pub os: Option<String>,

    /// Compiler name (e.g. "gcc", "clang").
    pub compiler: Option<String>,

    /// Declared C++ standard (e.g. "17", "20", "gnu20").
    ///
    /// Nested under `compiler` in orchestrator profiles as
    /// `compiler.cppstd`.
    pub cppstd: Option<String>,

    /// Build type (e.g. "Release", "Debug").
    pub build_type: Option<String>,

    /// Target architecture (e.g. "x86_64", "armv8").
    pub arch: Option<String>,
}

impl BuildSettings {
    /// Builds settings from `key=value` pairs, later pairs overriding
    /// earlier ones. The nested cppstd key is spelled `compiler.cppstd`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().apply_pairs(pairs)
    }

    /// Applies `key=value` pairs on top of this value, for layering
    /// command-line overrides over a profile.
    pub fn apply_pairs<I, S>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let settings = &mut self;
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                Error::Generic(format!("malformed setting pair (expected key=value): {pair:?}"))
            })?;
            settings.apply(key.trim(), value.trim())?;
        }
        Ok(self)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let value = Some(value.to_string());
        match key {
            "os" => self.os = value,
            "compiler" => self.compiler = value,
            "compiler.cppstd" => self.cppstd = value,
            "build_type" => self.build_type = value,
            "arch" => self.arch = value,
            other => return Err(Error::UnknownSetting(other.to_string())),
        }
        Ok(())
    }
}

/// A parsed orchestrator profile: settings plus option overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Build settings from the `[settings]` table.
    pub settings: BuildSettings,

    /// Recipe options from the `[options]` table.
    pub options: RecipeOptions,
}

impl Profile {
    /// Loads a profile from a TOML file.
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// [settings]
    /// os = "Linux"
    /// compiler = "gcc"
    /// "compiler.cppstd" = "20"
    /// build_type = "Release"
    /// arch = "x86_64"
    ///
    /// [options]
    /// with_tests = false
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a profile from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(contents)?;

        let settings = match value.get("settings") {
            Some(table) => BuildSettings::from_pairs(table_pairs(table, "settings")?)?,
            None => BuildSettings::default(),
        };

        let options = match value.get("options") {
            Some(table) => RecipeOptions::from_pairs(table_pairs(table, "options")?)?,
            None => RecipeOptions::default(),
        };

        Ok(Self { settings, options })
    }
}

/// Flattens a TOML table into `key=value` pairs for the pair parsers.
fn table_pairs(value: &toml::Value, section: &str) -> Result<Vec<String>> {
    let table = value
        .as_table()
        .ok_or_else(|| Error::Generic(format!("[{section}] is not a table")))?;

    let mut pairs = Vec::with_capacity(table.len());
    for (key, entry) in table {
        let rendered = match entry {
            toml::Value::String(s) => s.clone(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Integer(i) => i.to_string(),
            other => {
                return Err(Error::Generic(format!(
                    "[{section}] {key}: unsupported value type {}",
                    other.type_str()
                )));
            }
        };
        pairs.push(format!("{key}={rendered}"));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_cppstd_key() {
        let settings =
            BuildSettings::from_pairs(["compiler=gcc", "compiler.cppstd=20"]).unwrap();
        assert_eq!(settings.compiler.as_deref(), Some("gcc"));
        assert_eq!(settings.cppstd.as_deref(), Some("20"));
    }

    #[test]
    fn later_pairs_override_earlier_ones() {
        let settings =
            BuildSettings::from_pairs(["build_type=Debug", "build_type=Release"]).unwrap();
        assert_eq!(settings.build_type.as_deref(), Some("Release"));
    }

    #[test]
    fn cli_pairs_layer_over_profile_values() {
        let base = BuildSettings::from_pairs(["os=Linux", "build_type=Debug"]).unwrap();
        let merged = base.apply_pairs(["build_type=Release"]).unwrap();
        assert_eq!(merged.os.as_deref(), Some("Linux"));
        assert_eq!(merged.build_type.as_deref(), Some("Release"));
    }

    #[test]
    fn rejects_unknown_setting() {
        let err = BuildSettings::from_pairs(["toolchain=llvm"]).unwrap_err();
        assert!(matches!(err, Error::UnknownSetting(key) if key == "toolchain"));
    }

    #[test]
    fn profile_round_trips_settings_and_options() {
        let profile = Profile::from_toml_str(
            r#"
            [settings]
            os = "Linux"
            compiler = "gcc"
            "compiler.cppstd" = "20"
            build_type = "Release"
            arch = "x86_64"

            [options]
            with_tests = true
            "#,
        )
        .unwrap();

        assert_eq!(profile.settings.os.as_deref(), Some("Linux"));
        assert_eq!(profile.settings.cppstd.as_deref(), Some("20"));
        assert!(profile.options.with_tests);
    }

    #[test]
    fn profile_accepts_integer_cppstd() {
        let profile = Profile::from_toml_str(
            r#"
            [settings]
            "compiler.cppstd" = 20
            "#,
        )
        .unwrap();
        assert_eq!(profile.settings.cppstd.as_deref(), Some("20"));
    }

    #[test]
    fn empty_profile_uses_defaults() {
        let profile = Profile::from_toml_str("").unwrap();
        assert_eq!(profile, Profile::default());
    }
}
