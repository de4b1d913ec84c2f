//! Recipe options and their declared domains.
//!
//! Options are a plain immutable struct built per invocation. There is
//! no shared mutable default record; callers construct a fresh value
//! from `name=value` pairs and pass it through the lifecycle stages.

use crate::recipe::error::{Error, Result};

/// Name of the single boolean option the recipe declares.
pub const WITH_TESTS: &str = "with_tests";

/// Declared domain for boolean options.
const BOOL_DOMAIN: &[&str] = &["true", "false"];

/// Resolved recipe options.
///
/// # Examples
///
/// ```
/// use retrolib_recipe::recipe::settings::RecipeOptions;
///
/// let options = RecipeOptions::default();
/// assert!(!options.with_tests);
///
/// let options = RecipeOptions::from_pairs(["with_tests=true"]).unwrap();
/// assert!(options.with_tests);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeOptions {
    /// Whether to use the test-oriented layout and require the test
    /// framework.
    ///
    /// Default: false
    pub with_tests: bool,
}

impl RecipeOptions {
    /// Builds options from `name=value` pairs, later pairs overriding
    /// earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown option name, a value outside the
    /// option's declared domain, or a pair without `=`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().apply_pairs(pairs)
    }

    /// Applies `name=value` pairs on top of this value, for layering
    /// command-line overrides over a profile.
    pub fn apply_pairs<I, S>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = &mut self;
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                Error::Generic(format!("malformed option pair (expected name=value): {pair:?}"))
            })?;
            options.apply(name.trim(), value.trim())?;
        }
        Ok(self)
    }

    fn apply(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            WITH_TESTS => {
                self.with_tests = parse_bool(name, value)?;
                Ok(())
            }
            other => Err(Error::UnknownOption(other.to_string())),
        }
    }
}

/// Parses a boolean option value.
///
/// Accepts the capitalized spellings some orchestrator profiles use.
fn parse_bool(option: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidOptionValue {
            option: option.to_string(),
            value: value.to_string(),
            domain: BOOL_DOMAIN,
        }),
    }
}
