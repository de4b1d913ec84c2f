//! Consumer metadata emission.

use serde::Serialize;

/// Metadata the package exposes to downstream consumers.
///
/// Always the same record regardless of options or settings: the
/// package contributes headers and one preprocessor definition, no
/// binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumerInfo {
    /// Include directories, relative to the package folder.
    pub include_dirs: Vec<String>,

    /// Library directories. Empty: nothing is compiled.
    pub lib_dirs: Vec<String>,

    /// Binary directories. Empty: nothing is compiled.
    pub bin_dirs: Vec<String>,

    /// Preprocessor definitions consumers must compile with.
    pub defines: Vec<String>,
}

/// Returns the fixed consumer metadata for this package.
pub fn emit_consumer_info() -> ConsumerInfo {
    ConsumerInfo {
        include_dirs: vec!["include".into()],
        lib_dirs: Vec::new(),
        bin_dirs: Vec::new(),
        defines: vec!["RETROLIB_WITH_MODULES=0".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_no_binary_artifacts() {
        let info = emit_consumer_info();
        assert!(info.lib_dirs.is_empty());
        assert!(info.bin_dirs.is_empty());
        assert_eq!(info.defines, vec!["RETROLIB_WITH_MODULES=0"]);
    }

    #[test]
    fn is_identical_across_calls() {
        assert_eq!(emit_consumer_info(), emit_consumer_info());
    }
}
