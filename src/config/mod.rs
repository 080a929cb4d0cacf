//! Declaration loading, validation and templates
//!
//! This module provides:
//! - The on-disk declaration shape (`bundling`, `minification`, `sets`)
//! - Loading from JSON, CommonJS `scripts.js` or TOML
//! - Validation rules and `init` templates

pub mod file;
pub mod js_module;
pub mod loader;
pub mod template;
pub mod validator;

pub use file::{ConfigFormat, ResourceConfig, CONFIG_FILE_NAME, CONFIG_FILE_NAMES};
pub use loader::ConfigLoader;
pub use template::TemplateType;
pub use validator::{
    ConfigValidator, ValidationIssue, ValidationResult, ValidationSeverity, ValidatorRegistry,
};
