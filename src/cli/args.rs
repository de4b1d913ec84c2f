//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Local driver for the RetroLib package recipe
#[derive(Parser, Debug)]
#[command(
    name = "retrolib_recipe",
    version,
    about = "Runs the RetroLib package recipe lifecycle",
    long_about = "Runs the RetroLib package recipe lifecycle: resolves the layout, declares \
test requirements, generates integration files, validates the declared C++ standard, stages \
the headers into the package folder, and emits consumer metadata.

Usage:
  retrolib_recipe --source-folder . --package-folder /tmp/retrolib-pkg
  retrolib_recipe --source-folder . --package-folder out -o with_tests=true -s build_type=Debug
  retrolib_recipe --source-folder . --package-folder out --profile linux-gcc.toml

Exit code 0 = headers staged at <package-folder>/include."
)]
pub struct Args {
    /// Root of the exported source tree
    #[arg(long, value_name = "DIR")]
    pub source_folder: PathBuf,

    /// Package output directory
    #[arg(long, value_name = "DIR")]
    pub package_folder: PathBuf,

    /// Build setting, repeatable (os, compiler, compiler.cppstd, build_type, arch)
    #[arg(short = 's', long = "setting", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// Recipe option, repeatable (with_tests)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// TOML profile with [settings] and [options] tables
    ///
    /// Command-line settings and options layer on top of the profile.
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Version to pin into the package identity
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Print the consumer metadata as JSON on stdout
    #[arg(long)]
    pub emit_consumer_info: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.source_folder.as_os_str().is_empty() {
            return Err("Source folder cannot be empty".to_string());
        }

        for pair in self.settings.iter().chain(self.options.iter()) {
            if !pair.contains('=') {
                return Err(format!("Expected key=value, got: {pair}"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            source_folder: PathBuf::from("."),
            package_folder: PathBuf::from("out"),
            settings: Vec::new(),
            options: Vec::new(),
            profile: None,
            package_version: None,
            emit_consumer_info: false,
        }
    }

    #[test]
    fn accepts_plain_folders() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn rejects_pair_without_equals() {
        let mut args = args();
        args.options.push("with_tests".into());
        assert!(args.validate().is_err());
    }
}
