//! Plan command implementation
//!
//! Emits the build descriptors as JSON, either on stdout for a task runner to
//! read, or into a file.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::Path;

use super::load_resources;
use crate::fmt::CHECKMARK;
use crate::infra::{FileSystem, RealFileSystem};
use crate::pipeline::{BuildPlan, PlanStep};
use crate::resources::Resources;
use crate::target::{BuildFlags, BuildTarget};

/// Options for the plan command
#[derive(Debug, Clone)]
pub struct PlanOptions<'a> {
    /// Base path the descriptors are resolved against
    pub base: &'a str,
    /// Build target
    pub target: BuildTarget,
    /// Part of the plan to emit
    pub step: PlanStep,
}

/// Print or write the build plan
///
/// # Examples
///
/// ```no_run
/// use scriptset::cmd::plan::{cmd_plan, PlanOptions};
/// use scriptset::pipeline::PlanStep;
/// use scriptset::target::BuildTarget;
///
/// let options = PlanOptions {
///     base: "../../app/static",
///     target: BuildTarget::Prod,
///     step: PlanStep::All,
/// };
/// cmd_plan(None, &options, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_plan(
    config: Option<&Path>,
    options: &PlanOptions<'_>,
    out: Option<&Path>,
) -> Result<()> {
    let project_root = env::current_dir()?;
    let json = plan_json(config, &project_root, options)?;

    match out {
        Some(path) => {
            write_plan(&RealFileSystem, path, &json)?;
            println!(
                "{} Wrote {} plan to {}",
                CHECKMARK,
                options.target.as_str(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Render the requested part of the plan as pretty JSON
pub fn plan_json(
    config: Option<&Path>,
    project_root: &Path,
    options: &PlanOptions<'_>,
) -> Result<String> {
    let (_, declaration) = load_resources(config, project_root)?;
    let flags = BuildFlags::resolve(&declaration, options.target);
    let resources = Resources::from_config(&declaration);

    log::debug!(
        "target {} resolved to bundling={}, minification={}",
        options.target.as_str(),
        flags.bundling,
        flags.minification
    );

    let plan = BuildPlan::new(&resources, flags, options.base);
    let value = plan
        .to_json(options.step)
        .context("Failed to serialize build plan")?;

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write the plan, creating missing parent directories
pub fn write_plan<FS: FileSystem>(fs: &FS, path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs.write(path, format!("{}\n", json))
        .with_context(|| format!("Failed to write {}", path.display()))
}
