//! Minimum language-standard validation.

use crate::recipe::error::{Error, Result};
use crate::recipe::settings::{BuildSettings, Settings};

/// Accepted standards, oldest first. 98 predates the year-numbered
/// standards, so ordinal position is used instead of numeric value.
const CPP_STANDARDS: &[u32] = &[98, 11, 14, 17, 20, 23, 26];

/// Checks the consumer's declared standard against the recipe minimum.
///
/// An absent `compiler.cppstd` means no constraint was requested and is
/// never an error. A declared standard below the minimum fails with
/// [`Error::StandardTooLow`]. Runs before staging.
pub fn validate(settings: &Settings) -> Result<()> {
    check_min_cppstd(settings.build_settings(), settings.min_cpp_std())
}

/// Fails when a declared standard ranks below `minimum`.
pub fn check_min_cppstd(build: &BuildSettings, minimum: u32) -> Result<()> {
    let Some(declared) = build.cppstd.as_deref() else {
        return Ok(());
    };

    if standard_rank(declared)? < standard_rank_of(minimum)? {
        return Err(Error::StandardTooLow {
            required: minimum,
            declared: declared.to_string(),
        });
    }
    Ok(())
}

/// Rank of a declared cppstd value, `gnu` extensions included.
fn standard_rank(value: &str) -> Result<usize> {
    let numeric = value.strip_prefix("gnu").unwrap_or(value);
    let parsed: u32 = numeric.parse().map_err(|_| Error::InvalidCppStd {
        value: value.to_string(),
    })?;
    standard_rank_of(parsed).map_err(|_| Error::InvalidCppStd {
        value: value.to_string(),
    })
}

fn standard_rank_of(standard: u32) -> Result<usize> {
    CPP_STANDARDS
        .iter()
        .position(|&s| s == standard)
        .ok_or_else(|| Error::InvalidCppStd {
            value: standard.to_string(),
        })
}
