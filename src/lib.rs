#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! scriptset library
//!
//! One declaration of named script sets drives two consumers: the build,
//! which concatenates and minifies each set, and the page templates, which
//! need `<script>` tags for either the individual files or the bundles.
//!
//! # Basic Example
//!
//! ```
//! use scriptset::config::ResourceConfig;
//! use scriptset::resources::{render_tags, Resources};
//!
//! let config = ResourceConfig::default()
//!     .with_set("libs", ["scripts/libs/jquery.js", "scripts/libs/plugins/jquery.easing.js"])
//!     .with_set("public", ["scripts/areas/public/index.js"]);
//! let resources = Resources::from_config(&config);
//!
//! let html = render_tags(&resources, &["libs", "public"]).unwrap();
//! assert_eq!(html.matches("<script").count(), 3);
//! ```
//!
//! # Production Example
//!
//! The `prod` target bundles and minifies everything, both in the build plan
//! and in the rendered tags:
//!
//! ```
//! use scriptset::config::ResourceConfig;
//! use scriptset::pipeline::BuildPlan;
//! use scriptset::resources::{render_tags, Resources};
//! use scriptset::target::{BuildFlags, BuildTarget};
//!
//! let config = ResourceConfig::default().with_set("public", ["a.js", "b.js"]);
//! let flags = BuildFlags::resolve(&config, BuildTarget::Prod);
//! let resources = Resources::from_config(&config).with_flags(flags);
//!
//! let plan = BuildPlan::new(&resources, flags, "/srv/static");
//! assert_eq!(plan.uglify["public"].destination, "/srv/static/scripts/public.min.js");
//!
//! assert_eq!(
//!     render_tags(&resources, &["public"]).unwrap(),
//!     r#"<script src="/scripts/public.min.js"></script>"#
//! );
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Declaration loading, validation and templates
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Build plan for the external tools
pub mod pipeline;
/// Resource sets, tag rendering and build descriptors
pub mod resources;
/// Build target selection
pub mod target;
