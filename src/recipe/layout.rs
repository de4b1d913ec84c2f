//! Directory layout resolution.
//!
//! The layout is derived from the resolved options, never stored: test
//! builds use a build-tool-integrated tree, plain consumption uses the
//! fixed `RetroLib` source subdirectory.

use std::path::{Path, PathBuf};

use crate::recipe::settings::{BuildSettings, RecipeOptions};

/// Which layout flavor was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Build-tool-integrated tree used when tests are enabled.
    Test,
    /// Minimal tree rooted at the `RetroLib` subdirectory.
    Basic,
}

/// Resolved directory layout, with all paths relative to the source
/// folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    kind: LayoutKind,
    src_folder: PathBuf,
    build_folder: PathBuf,
    generators_folder: PathBuf,
}

impl Layout {
    /// Returns the layout flavor.
    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// Source root, relative to the source folder.
    ///
    /// Empty for the test layout (sources at the project root).
    pub fn src_folder(&self) -> &Path {
        &self.src_folder
    }

    /// Build folder, relative to the source folder.
    pub fn build_folder(&self) -> &Path {
        &self.build_folder
    }

    /// Where generated integration files land, relative to the source
    /// folder.
    pub fn generators_folder(&self) -> &Path {
        &self.generators_folder
    }
}

/// Selects the layout for the given options.
///
/// Deterministic and idempotent: the same option value always yields
/// the same layout. The build type only positions the test layout's
/// build tree; it never changes the flavor.
pub fn resolve_layout(options: &RecipeOptions, build: &BuildSettings) -> Layout {
    if options.with_tests {
        let build_type = build.build_type.as_deref().unwrap_or("Release");
        let build_folder = Path::new("build").join(build_type);
        let generators_folder = build_folder.join("generators");
        Layout {
            kind: LayoutKind::Test,
            src_folder: PathBuf::new(),
            build_folder,
            generators_folder,
        }
    } else {
        Layout {
            kind: LayoutKind::Basic,
            src_folder: PathBuf::from("RetroLib"),
            build_folder: PathBuf::from("build"),
            generators_folder: Path::new("build").join("generators"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_idempotent_for_both_option_values() {
        for with_tests in [false, true] {
            let options = RecipeOptions { with_tests };
            let build = BuildSettings::default();
            let first = resolve_layout(&options, &build);
            let second = resolve_layout(&options, &build);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn basic_layout_roots_sources_in_retrolib() {
        let layout = resolve_layout(&RecipeOptions::default(), &BuildSettings::default());
        assert_eq!(layout.kind(), LayoutKind::Basic);
        assert_eq!(layout.src_folder(), Path::new("RetroLib"));
    }

    #[test]
    fn test_layout_tracks_build_type() {
        let options = RecipeOptions { with_tests: true };
        let build = BuildSettings::from_pairs(["build_type=Debug"]).unwrap();
        let layout = resolve_layout(&options, &build);
        assert_eq!(layout.kind(), LayoutKind::Test);
        assert_eq!(layout.src_folder(), Path::new(""));
        assert_eq!(layout.build_folder(), Path::new("build/Debug"));
        assert_eq!(layout.generators_folder(), Path::new("build/Debug/generators"));
    }

    #[test]
    fn test_layout_defaults_to_release_build_tree() {
        let options = RecipeOptions { with_tests: true };
        let layout = resolve_layout(&options, &BuildSettings::default());
        assert_eq!(layout.build_folder(), Path::new("build/Release"));
    }
}
