//! Test fixture helpers for creating projects with a script declaration

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Three sets in page order `libs`, `public`, `admin`, flags off
pub const SITE_DECLARATION: &str = r#"{
  "bundling": false,
  "minification": false,
  "sets": {
    "libs": [
      "scripts/libs/jquery.js",
      "scripts/libs/bootstrap.js",
      "scripts/libs/plugins/jquery.easing.js"
    ],
    "public": [
      "scripts/areas/public/index.js",
      "~/shared/scripts/cookies.js"
    ],
    "admin": []
  }
}"#;

/// Same sets as [`SITE_DECLARATION`] with bundling on and minification off
pub const BUNDLED_DECLARATION: &str = r#"{
  "bundling": true,
  "minification": false,
  "sets": {
    "libs": ["scripts/libs/jquery.js"],
    "public": ["scripts/areas/public/index.js"]
  }
}"#;

/// Creates a project with `scripts.json` at its root
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to scripts.json) - the TempDir must be kept alive
pub fn create_json_project(declaration: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scripts.json");
    fs::write(&path, declaration)?;
    Ok((temp_dir, path))
}

/// Creates a project with `configuration/scripts.js` holding `declaration`
/// as a CommonJS module with comments around it
pub fn create_js_module_project(declaration: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let config_dir = temp_dir.path().join("configuration");
    fs::create_dir(&config_dir)?;

    let path = config_dir.join("scripts.js");
    fs::write(
        &path,
        format!(
            "/* Script sets shared by the build and the templates */\n\
             // edit with care\n\
             module.exports = {};\n",
            declaration
        ),
    )?;
    Ok((temp_dir, path))
}

/// Creates a project with `scripts.toml` at its root
pub fn create_toml_project(declaration: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scripts.toml");
    fs::write(&path, declaration)?;
    Ok((temp_dir, path))
}

/// Creates an empty project directory with no declaration
pub fn create_empty_project() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}
