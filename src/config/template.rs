//! Starter declarations written by `scriptset init`

use std::str::FromStr;

use super::file::ResourceConfig;

/// Template type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateType {
    /// Library, public-area and admin sets
    Starter,
    /// Flags only, no sets
    Empty,
}

impl FromStr for TemplateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "empty" => Ok(Self::Empty),
            _ => Err(format!("Unknown template type: {}", s)),
        }
    }
}

impl TemplateType {
    /// Get template name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Empty => "empty",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Starter => "Vendor libraries plus public and admin area sets",
            Self::Empty => "Bundling flags only; add sets yourself",
        }
    }

    /// All templates, in display order
    pub fn all() -> [TemplateType; 2] {
        [Self::Starter, Self::Empty]
    }

    /// Build the declaration for this template
    ///
    /// ```
    /// use scriptset::config::TemplateType;
    ///
    /// let config = TemplateType::Starter.config();
    /// assert!(!config.bundling);
    /// assert_eq!(config.sets["libs"][0], "scripts/libs/jquery.js");
    /// ```
    pub fn config(&self) -> ResourceConfig {
        match self {
            Self::Empty => ResourceConfig::default(),
            Self::Starter => ResourceConfig::default()
                .with_set(
                    "libs",
                    [
                        "scripts/libs/jquery.js",
                        "scripts/libs/bootstrap.js",
                        "scripts/libs/lodash.js",
                        "scripts/libs/plugins/jquery.easing.js",
                    ],
                )
                .with_set("public", ["scripts/areas/public/index.js"])
                .with_set("admin", Vec::<String>::new())
                .with_set("admin-login", Vec::<String>::new()),
        }
    }
}
