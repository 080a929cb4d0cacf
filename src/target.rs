//! Build target selection
//!
//! The `prod` target forces bundling and minification on for every set; the
//! `dev` target uses the flags from the declaration.

use clap::ValueEnum;

use crate::config::ResourceConfig;

/// Build target selected by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildTarget {
    /// Use the declared flags
    #[default]
    Dev,
    /// Bundle and minify everything
    Prod,
}

impl BuildTarget {
    /// Target name as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

/// Effective bundling/minification flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildFlags {
    /// Concatenate each set into one bundle
    pub bundling: bool,
    /// Minify the bundles
    pub minification: bool,
}

impl BuildFlags {
    /// Both flags on
    pub fn all() -> Self {
        Self {
            bundling: true,
            minification: true,
        }
    }

    /// Flags from a declaration
    pub fn from_config(config: &ResourceConfig) -> Self {
        Self {
            bundling: config.bundling,
            minification: config.minification,
        }
    }

    /// Effective flags for a target
    ///
    /// The override is global: `prod` turns both flags on regardless of the
    /// declared values.
    ///
    /// ```
    /// use scriptset::config::ResourceConfig;
    /// use scriptset::target::{BuildFlags, BuildTarget};
    ///
    /// let config = ResourceConfig::default().with_flags(true, false);
    ///
    /// let dev = BuildFlags::resolve(&config, BuildTarget::Dev);
    /// assert!(dev.bundling && !dev.minification);
    ///
    /// assert_eq!(BuildFlags::resolve(&config, BuildTarget::Prod), BuildFlags::all());
    /// ```
    pub fn resolve(config: &ResourceConfig, target: BuildTarget) -> Self {
        match target {
            BuildTarget::Dev => Self::from_config(config),
            BuildTarget::Prod => Self::all(),
        }
    }
}
