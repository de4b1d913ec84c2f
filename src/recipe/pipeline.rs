//! The recipe lifecycle as an explicit sequential pipeline.
//!
//! Stages run in a fixed order:
//! layout, build requirements, generate, validate, stage, consumer
//! info. No stage runs before its predecessor completes, and a failing
//! stage aborts the run with the stage name attached.

use thiserror::Error;

use crate::recipe::consumer::{ConsumerInfo, emit_consumer_info};
use crate::recipe::deps::{DependencyGraph, Requirement, declare_build_requirements, generate};
use crate::recipe::identity::{PackageId, package_id};
use crate::recipe::layout::{Layout, resolve_layout};
use crate::recipe::settings::Settings;
use crate::recipe::stage::stage;
use crate::recipe::validate::validate;

/// The lifecycle stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Directory layout resolution.
    Layout,
    /// Test-framework requirement declaration.
    BuildRequirements,
    /// Integration-file generation.
    Generate,
    /// Minimum-standard validation.
    Validate,
    /// Header staging into the package folder.
    Stage,
    /// Consumer metadata emission.
    ConsumerInfo,
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StageKind::Layout => "layout",
            StageKind::BuildRequirements => "build-requirements",
            StageKind::Generate => "generate",
            StageKind::Validate => "validate",
            StageKind::Stage => "stage",
            StageKind::ConsumerInfo => "consumer-info",
        };
        f.write_str(name)
    }
}

/// A lifecycle failure attributed to the stage that raised it.
#[derive(Error, Debug)]
#[error("{stage} stage failed: {error}")]
pub struct StageFailure {
    /// Which stage failed.
    pub stage: StageKind,
    /// The underlying failure condition.
    #[source]
    pub error: crate::recipe::Error,
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct PipelineReport {
    /// Settings-invariant package identity.
    pub package_id: PackageId,

    /// Resolved directory layout.
    pub layout: Layout,

    /// Requirements declared into the dependency graph.
    pub requirements: Vec<Requirement>,

    /// Integration files written by the generate stage.
    pub generated_files: usize,

    /// Header files staged into the package folder.
    pub staged_files: usize,

    /// Fixed consumer metadata.
    pub consumer_info: ConsumerInfo,
}

/// Sequential driver for the recipe lifecycle.
///
/// # Examples
///
/// ```no_run
/// use retrolib_recipe::recipe::pipeline::Pipeline;
/// use retrolib_recipe::recipe::settings::SettingsBuilder;
///
/// # async fn example() -> anyhow::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_folder("/src/retrolib")
///     .package_folder("/out/retrolib")
///     .build()?;
///
/// let report = Pipeline::new(settings).run().await?;
/// println!("staged {} headers", report.staged_files);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    /// Creates a pipeline over one settings snapshot.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns the settings snapshot this pipeline runs over.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every stage in order, stopping at the first failure.
    pub async fn run(&self) -> Result<PipelineReport, StageFailure> {
        let fail = |stage: StageKind| {
            move |error: crate::recipe::Error| StageFailure { stage, error }
        };

        let layout = resolve_layout(self.settings.options(), self.settings.build_settings());

        let mut graph = DependencyGraph::default();
        declare_build_requirements(self.settings.options(), &mut graph);

        let generators_dir = self
            .settings
            .source_folder()
            .join(layout.generators_folder());
        let generated_files = generate(self.settings.options(), &graph, &generators_dir)
            .await
            .map_err(fail(StageKind::Generate))?;

        validate(&self.settings).map_err(fail(StageKind::Validate))?;

        let source_root = self.settings.source_folder().join(layout.src_folder());
        let staged_files = stage(&source_root, self.settings.package_folder())
            .await
            .map_err(fail(StageKind::Stage))?;

        let consumer_info = emit_consumer_info();

        Ok(PipelineReport {
            package_id: package_id(&self.settings),
            layout,
            requirements: graph.requirements().to_vec(),
            generated_files,
            staged_files,
            consumer_info,
        })
    }
}
