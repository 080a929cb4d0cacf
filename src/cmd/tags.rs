//! Tags command implementation
//!
//! Prints the `<script>` tags for the requested sets on stdout, with nothing
//! else, so the output can be spliced into a template.

use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use super::load_resources;
use crate::resources::{render_tags, Resources};
use crate::target::{BuildFlags, BuildTarget};

/// Print the tags for `names`
///
/// # Examples
///
/// ```no_run
/// use scriptset::cmd::tags::cmd_tags;
/// use scriptset::target::BuildTarget;
///
/// cmd_tags(None, &["libs".to_string(), "public".to_string()], BuildTarget::Dev)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_tags(config: Option<&Path>, names: &[String], target: BuildTarget) -> Result<()> {
    let project_root = env::current_dir()?;
    let html = tags_for(config, &project_root, names, target)?;
    println!("{}", html);
    Ok(())
}

/// Render the tags for `names` under the given target
pub fn tags_for(
    config: Option<&Path>,
    project_root: &Path,
    names: &[String],
    target: BuildTarget,
) -> Result<String> {
    let (_, declaration) = load_resources(config, project_root)?;
    let flags = BuildFlags::resolve(&declaration, target);
    if flags.minification && !flags.bundling {
        log::warn!("minification is on but bundling is off; serving individual files");
    }
    let resources = Resources::from_config(&declaration).with_flags(flags);

    render_tags(&resources, names).with_context(|| {
        format!(
            "Failed to render tags for {} (target: {})",
            names.join(", "),
            target.as_str()
        )
    })
}
