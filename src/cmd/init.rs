//! Init command implementation
//!
//! Handles the `scriptset init` command which writes a `scripts.json`
//! declaration from a template (starter, empty).

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigLoader, TemplateType};
use crate::fmt::{format_count, CHECKMARK, INFO, ROCKET, SPARKLES, WARNING};
use crate::infra::{FileSystem, RealFileSystem};

/// Initialize a declaration from a template in the current directory
///
/// # Examples
///
/// ```no_run
/// use scriptset::cmd::init::cmd_init;
///
/// cmd_init("starter", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(template: &str, force: bool) -> Result<()> {
    println!(
        "{} {} Initializing script sets",
        ROCKET,
        style("scriptset init").bold()
    );
    println!();

    let project_root = env::current_dir()?;
    init_in(&project_root, template, force)
}

/// Write the declaration for `template` into `project_root`
pub fn init_in(project_root: &Path, template: &str, force: bool) -> Result<()> {
    init_in_with_fs(&RealFileSystem, project_root, template, force)
}

/// Same as [`init_in`] with a custom filesystem implementation
pub fn init_in_with_fs<FS: FileSystem>(
    fs: &FS,
    project_root: &Path,
    template: &str,
    force: bool,
) -> Result<()> {
    let template_type: TemplateType = template.parse().map_err(|_| {
        anyhow::anyhow!(
            "Template '{}' not found (available: {})",
            template,
            TemplateType::all().map(|t| t.name()).join(", ")
        )
    })?;

    let config_path = project_root.join(config::CONFIG_FILE_NAME);
    if fs.is_file(&config_path) && !force {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Pass --force to overwrite it.");
        return Ok(());
    }

    println!(
        "{} Selected template: {}",
        SPARKLES,
        style(template_type.name()).bold().cyan()
    );
    println!("   {}", style(template_type.description()).dim());
    println!();

    let declaration = template_type.config();
    ConfigLoader::save_with_fs(&declaration, &config_path, fs)
        .context("Failed to create scripts.json")?;

    println!(
        "{} Created {} with {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold(),
        format_count(declaration.sets.len(), "set")
    );
    println!();
    println!("{}  Next Steps:", INFO);
    println!("   1. List your script files under \"sets\" in load order");
    println!(
        "   2. Run {} to render tags for a page",
        style("scriptset tags <SET>...").cyan()
    );
    println!(
        "   3. Run {} to emit build descriptors",
        style("scriptset plan --target prod").cyan()
    );

    Ok(())
}
