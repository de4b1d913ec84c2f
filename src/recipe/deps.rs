//! Test-framework dependency declaration and generator-file emission.

use std::path::Path;

use serde::Serialize;

use crate::recipe::Result;
use crate::recipe::settings::RecipeOptions;

/// Name of the unit-testing framework required for test builds.
pub const TEST_FRAMEWORK_NAME: &str = "catch2";

/// Pinned version of the test framework.
pub const TEST_FRAMEWORK_VERSION: &str = "3.7.1";

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Dependency package name.
    pub name: String,

    /// Pinned version.
    pub version: String,

    /// True when the dependency is needed for test builds only.
    pub test: bool,
}

impl Requirement {
    /// The fixed test-framework requirement.
    pub fn test_framework() -> Self {
        Self {
            name: TEST_FRAMEWORK_NAME.into(),
            version: TEST_FRAMEWORK_VERSION.into(),
            test: true,
        }
    }

    /// Renders the `name/version` reference form.
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// Additive-only collection of declared dependencies.
///
/// Entries are never removed and inserting a requirement twice keeps a
/// single entry.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    requirements: Vec<Requirement>,
}

impl DependencyGraph {
    /// Adds a requirement, returning false when an equal entry already
    /// exists.
    pub fn insert(&mut self, requirement: Requirement) -> bool {
        if self.requirements.contains(&requirement) {
            return false;
        }
        self.requirements.push(requirement);
        true
    }

    /// Returns all declared requirements.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Returns the test-only requirements.
    pub fn test_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|r| r.test)
    }

    /// True when nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// Declares build-time requirements into the dependency graph.
///
/// Adds the test framework iff `with_tests` is enabled; performs no
/// removal either way.
pub fn declare_build_requirements(options: &RecipeOptions, graph: &mut DependencyGraph) {
    if options.with_tests {
        graph.insert(Requirement::test_framework());
    }
}

/// Emits one integration file per resolved test requirement into the
/// generators directory.
///
/// A no-op when tests are disabled or when no test requirement has been
/// resolved yet; missing preconditions are not an error. Returns the
/// number of files written.
pub async fn generate(
    options: &RecipeOptions,
    graph: &DependencyGraph,
    generators_dir: &Path,
) -> Result<usize> {
    if !options.with_tests {
        return Ok(0);
    }

    let requirements: Vec<&Requirement> = graph.test_requirements().collect();
    if requirements.is_empty() {
        return Ok(0);
    }

    tokio::fs::create_dir_all(generators_dir).await?;

    let mut written = 0;
    for requirement in requirements {
        let path = generators_dir.join(format!("{}-deps.json", requirement.name));
        let contents = serde_json::to_vec_pretty(requirement)?;
        tokio::fs::write(&path, contents).await?;
        written += 1;
    }
    Ok(written)
}
