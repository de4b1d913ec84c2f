//! Command line interface for the recipe driver.
//!
//! Plays the orchestrator role locally: builds a settings snapshot from
//! the arguments (and optional profile), runs the lifecycle pipeline,
//! and reports the result.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::recipe::Pipeline;
use crate::recipe::settings::{PackageIdentity, Profile, SettingsBuilder};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    run_with_args(&args).await
}

/// Runs the lifecycle for already-parsed arguments.
pub async fn run_with_args(args: &Args) -> Result<i32> {
    let profile = match &args.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    // Command-line pairs layer over the profile.
    let build = profile.settings.apply_pairs(&args.settings)?;
    let options = profile.options.apply_pairs(&args.options)?;

    let mut identity = PackageIdentity::retrolib();
    if let Some(version) = &args.package_version {
        identity = identity.with_version(version);
    }

    let settings = SettingsBuilder::new()
        .identity(identity)
        .options(options)
        .build_settings(build)
        .source_folder(&args.source_folder)
        .package_folder(&args.package_folder)
        .build()?;

    let report = Pipeline::new(settings).run().await?;

    log::info!(
        "staged {} header file(s), wrote {} generator file(s)",
        report.staged_files,
        report.generated_files
    );

    println!("package id: {}", report.package_id);
    println!(
        "staged {} header file(s) into {}",
        report.staged_files,
        args.package_folder.join("include").display()
    );
    for requirement in &report.requirements {
        println!("test requirement: {}", requirement.reference());
    }

    if args.emit_consumer_info {
        println!("{}", serde_json::to_string_pretty(&report.consumer_info)?);
    }

    Ok(0)
}
