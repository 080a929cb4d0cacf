//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for build scripts and CI
//!
//! # Examples
//!
//! ```
//! use scriptset::config::ResourceConfig;
//! use scriptset::error::ScriptSetError;
//! use scriptset::resources::{render_tags, Resources};
//!
//! let resources = Resources::from_config(&ResourceConfig::default());
//!
//! match render_tags(&resources, &["public"]) {
//!     Ok(tags) => println!("{}", tags),
//!     Err(ScriptSetError::UnknownResourceSet { name, .. }) => {
//!         assert_eq!(name, "public");
//!     }
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

const EXPECTED_KEYS: &str = concat!(
    "Expected keys: \"bundling\" (bool), \"minification\" (bool), ",
    "\"sets\" (map of name to file list)"
);

/// scriptset errors with contextual suggestions
#[derive(Error, Debug)]
pub enum ScriptSetError {
    /// A requested set name is not declared in the configuration
    #[error("Unknown resource set: '{name}'")]
    UnknownResourceSet {
        /// Requested set name
        name: String,
        /// Names that are declared
        available: Vec<String>,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to config file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// No configuration file could be discovered
    #[error("No scripts configuration found in {dir}")]
    ConfigMissing {
        /// Directory that was searched
        dir: PathBuf,
        /// File names that were tried
        tried: Vec<String>,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse {path}: {message}")]
    ConfigParse {
        /// Path to config file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Configuration file extension is not one of the supported formats
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {errors} error(s) found")]
    InvalidConfig {
        /// Number of error-level issues
        errors: usize,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ScriptSetError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptset::error::ScriptSetError;
    ///
    /// let error = ScriptSetError::UnknownResourceSet {
    ///     name: "pubic".to_string(),
    ///     available: vec!["libs".to_string(), "public".to_string()],
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("libs, public"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownResourceSet { available, .. } => {
                if available.is_empty() {
                    Some("No sets are declared; add one under \"sets\"".to_string())
                } else {
                    Some(format!("Declared sets: {}", available.join(", ")))
                }
            }
            Self::ConfigNotFound { .. } => {
                Some("Run 'scriptset init' to create a configuration file".to_string())
            }
            Self::ConfigMissing { tried, .. } => Some(format!(
                "Create one of: {}\nOr pass --config <PATH>",
                tried.join(", ")
            )),
            Self::ConfigParse { .. } => Some(EXPECTED_KEYS.to_string()),
            Self::UnsupportedFormat { .. } => {
                Some("Use a .json, .js (module.exports) or .toml file".to_string())
            }
            Self::InvalidConfig { .. } => {
                Some("Run 'scriptset check' to list the issues".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// ```
    /// use scriptset::error::ScriptSetError;
    ///
    /// let error = ScriptSetError::UnknownResourceSet {
    ///     name: "admin".to_string(),
    ///     available: vec![],
    /// };
    /// assert_eq!(error.exit_code(), 65);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownResourceSet { .. } => 65, // EX_DATAERR
            Self::ConfigNotFound { .. } => 66,     // EX_NOINPUT
            Self::ConfigMissing { .. } => 66,      // EX_NOINPUT
            Self::ConfigParse { .. } => 65,        // EX_DATAERR
            Self::UnsupportedFormat { .. } => 64,  // EX_USAGE
            Self::InvalidConfig { .. } => 78,      // EX_CONFIG
            Self::Io { .. } => 74,                 // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(ss_error) = Self::find(error) {
            if let Some(suggestion) = ss_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map(ScriptSetError::exit_code).unwrap_or(1)
    }

    // Context layers wrap the typed error, so walk the whole chain.
    fn find(error: &anyhow::Error) -> Option<&ScriptSetError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ScriptSetError>())
    }
}
