//! Configuration file data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ScriptSetError;

/// Default file name written by `scriptset init`
pub const CONFIG_FILE_NAME: &str = "scripts.json";

/// File names tried by discovery, in priority order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["scripts.json", "scripts.js", "scripts.toml"];

/// Declaration of script resource sets
///
/// This is the on-disk shape shared by the build driver and the page
/// rendering layer:
///
/// ```json
/// {
///   "bundling": false,
///   "minification": false,
///   "sets": {
///     "libs": ["scripts/libs/jquery.js", "scripts/libs/plugins/jquery.easing.js"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Serve one concatenated file per set instead of the individual files
    #[serde(default)]
    pub bundling: bool,

    /// Serve the minified bundle (only honored when bundling is on)
    #[serde(default)]
    pub minification: bool,

    /// Set name to ordered file list
    #[serde(default)]
    pub sets: BTreeMap<String, Vec<String>>,
}

impl ResourceConfig {
    /// Add or replace a set, builder style
    ///
    /// ```
    /// use scriptset::config::ResourceConfig;
    ///
    /// let config = ResourceConfig::default()
    ///     .with_set("public", ["a.js", "b.js"])
    ///     .with_set("admin", Vec::<String>::new());
    ///
    /// assert_eq!(config.sets["public"], vec!["a.js", "b.js"]);
    /// assert!(config.sets["admin"].is_empty());
    /// ```
    pub fn with_set<I, S>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets
            .insert(name.into(), files.into_iter().map(Into::into).collect());
        self
    }

    /// Set both flags, builder style
    pub fn with_flags(mut self, bundling: bool, minification: bool) -> Self {
        self.bundling = bundling;
        self.minification = minification;
        self
    }
}

/// Supported declaration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Plain JSON
    Json,
    /// CommonJS module: `module.exports = { ... };` with comments allowed
    JsModule,
    /// TOML
    Toml,
}

impl ConfigFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ScriptSetError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("js") | Some("cjs") => Ok(Self::JsModule),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ScriptSetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
