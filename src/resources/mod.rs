//! Resource sets and the mapper from sets to tags and build descriptors
//!
//! A [`Resources`] value is built once from a [`ResourceConfig`] and never
//! mutated afterwards. Every mapper operation takes it by reference, so one
//! instance can be shared read-only by any number of callers.
//!
//! # Examples
//!
//! ```
//! use scriptset::config::ResourceConfig;
//! use scriptset::resources::{build_concat_descriptors, render_tags, Resources};
//!
//! let config = ResourceConfig::default().with_set("public", ["a.js", "b.js"]);
//! let resources = Resources::from_config(&config);
//!
//! assert_eq!(
//!     render_tags(&resources, &["public"]).unwrap(),
//!     r#"<script src="a.js"></script><script src="b.js"></script>"#
//! );
//!
//! let concat = build_concat_descriptors(&resources, "/base");
//! assert_eq!(concat["public"].sources, vec!["/base/a.js", "/base/b.js"]);
//! assert_eq!(concat["public"].destination, "/base/scripts/public.built.js");
//! ```

pub mod descriptors;
pub mod paths;
pub mod tags;

pub use descriptors::{
    build_concat_descriptors, build_minify_descriptors, build_obfuscation_config,
    ConcatDescriptor, MinifyDescriptor, ObfuscationConfig,
};
pub use paths::BundleStage;
pub use tags::{render_tags, script_tag};

use std::collections::BTreeMap;

use crate::config::ResourceConfig;
use crate::error::ScriptSetError;
use crate::target::BuildFlags;

/// Kind of files held by a set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// JavaScript files served through `<script>` tags
    Script,
}

impl ResourceKind {
    /// File extension of bundles of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Script => "js",
        }
    }
}

/// A named, ordered group of files deployed as one unit
///
/// File order is load and concatenation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    name: String,
    kind: ResourceKind,
    files: Vec<String>,
}

impl ResourceSet {
    /// Create a script set
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: ResourceKind::Script,
            files,
        }
    }

    /// Set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of files in the set
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Declared files, in order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Bundle path for this set under `base`
    pub fn bundle_path(&self, base: &str, stage: BundleStage) -> String {
        paths::bundle_file(base, &self.name, stage, self.kind.extension())
    }

    /// Site-absolute URL of this set's bundle
    pub fn bundle_url(&self, stage: BundleStage) -> String {
        paths::bundle_url(&self.name, stage, self.kind.extension())
    }

    /// Concatenation step for this set
    pub fn concat_descriptor(&self, base: &str) -> ConcatDescriptor {
        ConcatDescriptor {
            sources: self
                .files
                .iter()
                .map(|file| paths::resolve_source(base, file))
                .collect(),
            destination: self.bundle_path(base, BundleStage::Built),
        }
    }

    /// Minification step for this set; reads the concatenation output
    pub fn minify_descriptor(&self, base: &str) -> MinifyDescriptor {
        MinifyDescriptor {
            source: self.bundle_path(base, BundleStage::Built),
            destination: self.bundle_path(base, BundleStage::Minified),
        }
    }
}

/// Immutable configuration model: flags plus every declared set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    bundling_enabled: bool,
    minification_enabled: bool,
    sets: BTreeMap<String, ResourceSet>,
}

impl Resources {
    /// Build the model from a loaded declaration
    pub fn from_config(config: &ResourceConfig) -> Self {
        let sets = config
            .sets
            .iter()
            .map(|(name, files)| (name.clone(), ResourceSet::new(name.clone(), files.clone())))
            .collect();

        Self {
            bundling_enabled: config.bundling,
            minification_enabled: config.minification,
            sets,
        }
    }

    /// Copy of this model with the flags replaced (e.g. for the prod target)
    pub fn with_flags(&self, flags: BuildFlags) -> Self {
        Self {
            bundling_enabled: flags.bundling,
            minification_enabled: flags.minification,
            sets: self.sets.clone(),
        }
    }

    /// Whether bundles are served instead of individual files
    pub fn bundling_enabled(&self) -> bool {
        self.bundling_enabled
    }

    /// Whether minified bundles are served
    pub fn minification_enabled(&self) -> bool {
        self.minification_enabled
    }

    /// Bundle stage referenced by tags, or `None` when files are served
    /// individually
    pub fn served_stage(&self) -> Option<BundleStage> {
        match (self.bundling_enabled, self.minification_enabled) {
            (false, _) => None,
            (true, true) => Some(BundleStage::Minified),
            (true, false) => Some(BundleStage::Built),
        }
    }

    /// Look up a set by name
    pub fn get(&self, name: &str) -> Result<&ResourceSet, ScriptSetError> {
        self.sets
            .get(name)
            .ok_or_else(|| ScriptSetError::UnknownResourceSet {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// All sets, ordered by name
    pub fn sets(&self) -> impl Iterator<Item = &ResourceSet> {
        self.sets.values()
    }

    /// All set names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Number of declared sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no sets are declared
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
