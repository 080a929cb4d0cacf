//! List command implementation

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use super::load_resources;
use crate::fmt::{format_count, on_off, PACKAGE};
use crate::resources::Resources;

/// Show declared sets, their files and the global flags
pub fn cmd_list(config: Option<&Path>, show_files: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let (path, declaration) = load_resources(config, &project_root)?;
    let resources = Resources::from_config(&declaration);

    println!(
        "{} {} ({})",
        PACKAGE,
        style(path.display()).bold(),
        format_count(resources.len(), "set")
    );
    println!(
        "   bundling: {}   minification: {}",
        style(on_off(resources.bundling_enabled())).cyan(),
        style(on_off(resources.minification_enabled())).cyan()
    );
    println!();

    for line in summary_lines(&resources, show_files) {
        println!("{}", line);
    }

    Ok(())
}

/// Plain-text summary, one line per set (plus one per file if requested)
pub fn summary_lines(resources: &Resources, show_files: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for set in resources.sets() {
        lines.push(format!(
            "   {} {}",
            set.name(),
            style(format!("({})", format_count(set.files().len(), "file"))).dim()
        ));
        if show_files {
            for file in set.files() {
                lines.push(format!("      {}", file));
            }
        }
    }
    lines
}
