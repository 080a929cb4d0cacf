//! Build-step descriptors for the external concatenation, minification and
//! obfuscation tools
//!
//! Descriptors serialize to the shapes those tools expect:
//!
//! - concatenation: `{ "<set>": { "src": ["..."], "dest": "..." } }`
//! - minification: `{ "<set>": { "src": "...", "dest": "..." } }`
//! - obfuscation: `{ "website": { "areas": ["..."] } }`
//!
//! Nothing here touches the file system.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::paths::BundleStage;
use super::Resources;

/// One concatenation step: ordered sources into one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatDescriptor {
    /// Resolved source paths, in load order
    #[serde(rename = "src")]
    pub sources: Vec<String>,
    /// Bundle written by the concatenation tool
    #[serde(rename = "dest")]
    pub destination: String,
}

/// One minification step: concatenated bundle into minified bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyDescriptor {
    /// Concatenation output
    #[serde(rename = "src")]
    pub source: String,
    /// Minified output
    #[serde(rename = "dest")]
    pub destination: String,
}

/// Input for the external obfuscator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObfuscationConfig {
    /// Site section
    pub website: ObfuscationWebsite,
}

/// Bundles handed to the obfuscator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObfuscationWebsite {
    /// One bundle path per set, ordered by set name
    pub areas: Vec<String>,
}

/// Concatenation descriptors for every declared set
///
/// Each file has `~` replaced with `..` and is resolved against `base`; the
/// destination is `<base>/scripts/<name>.built.js`. Empty sets produce an
/// empty source list.
///
/// ```
/// use scriptset::config::ResourceConfig;
/// use scriptset::resources::{build_concat_descriptors, Resources};
///
/// let config = ResourceConfig::default().with_set("admin", Vec::<String>::new());
/// let concat = build_concat_descriptors(&Resources::from_config(&config), "/base");
///
/// assert!(concat["admin"].sources.is_empty());
/// assert_eq!(concat["admin"].destination, "/base/scripts/admin.built.js");
/// ```
pub fn build_concat_descriptors(
    resources: &Resources,
    base: &str,
) -> BTreeMap<String, ConcatDescriptor> {
    resources
        .sets()
        .map(|set| (set.name().to_string(), set.concat_descriptor(base)))
        .collect()
}

/// Minification descriptors for every declared set
///
/// The source is the concatenation destination, so the concatenation step
/// must have run before the minifier reads it.
pub fn build_minify_descriptors(
    resources: &Resources,
    base: &str,
) -> BTreeMap<String, MinifyDescriptor> {
    resources
        .sets()
        .map(|set| (set.name().to_string(), set.minify_descriptor(base)))
        .collect()
}

/// Obfuscator input listing the bundle of every declared set
pub fn build_obfuscation_config(
    resources: &Resources,
    base: &str,
    use_minified: bool,
) -> ObfuscationConfig {
    let stage = if use_minified {
        BundleStage::Minified
    } else {
        BundleStage::Built
    };

    ObfuscationConfig {
        website: ObfuscationWebsite {
            areas: resources
                .sets()
                .map(|set| set.bundle_path(base, stage))
                .collect(),
        },
    }
}
