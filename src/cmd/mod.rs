//! Command handlers for the scriptset CLI
//!
//! Each submodule handles one CLI command. Handlers that read the declaration
//! share [`load_resources`].

pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod plan;
pub mod tags;

pub use check::cmd_check;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use list::cmd_list;
pub use plan::cmd_plan;
pub use tags::cmd_tags;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, ResourceConfig};

/// Load the declaration from `explicit` or discover it under `project_root`
pub fn load_resources(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<(PathBuf, ResourceConfig)> {
    let (path, config) = ConfigLoader::resolve(explicit, project_root)
        .context("Failed to load scripts configuration")?;
    log::info!("using configuration {}", path.display());
    Ok((path, config))
}
