//! Declaration validation
//!
//! Reports suspicious declarations without touching the file system: file
//! existence is the concern of the external build tools.

use std::collections::HashSet;

use super::file::ResourceConfig;

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Informational message
    Info,
    /// Warning - should be addressed but not blocking
    Warning,
    /// Error - must be fixed
    Error,
}

impl ValidationSeverity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationSeverity::Info => "INFO",
            ValidationSeverity::Warning => "WARNING",
            ValidationSeverity::Error => "ERROR",
        }
    }
}

/// A validation issue found in a declaration
///
/// # Examples
///
/// ```
/// use scriptset::config::validator::{ValidationIssue, ValidationSeverity};
///
/// let issue = ValidationIssue::warning("sets.libs", "Duplicate file 'jquery.js'")
///     .with_suggestion("Remove the second entry");
/// assert_eq!(issue.severity, ValidationSeverity::Warning);
/// assert!(issue.suggestion.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: ValidationSeverity,
    /// Field or section that has the issue
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Suggested fix (if available)
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: ValidationSeverity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create an error issue
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Error, field, message)
    }

    /// Create a warning issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Warning, field, message)
    }

    /// Create an info issue
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Info, field, message)
    }
}

/// Result of declaration validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors)
    pub valid: bool,
    /// Issues found during validation
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        if issue.severity == ValidationSeverity::Error {
            self.valid = false;
        }
        self.issues.push(issue);
    }

    /// Get only errors
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.by_severity(ValidationSeverity::Error)
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.by_severity(ValidationSeverity::Warning)
    }

    fn by_severity(&self, severity: ValidationSeverity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }
}

/// A single validation rule over a declaration
pub trait ConfigValidator {
    /// Validator name
    fn name(&self) -> &str;

    /// Push any issues found into `result`
    fn validate(&self, config: &ResourceConfig, result: &mut ValidationResult);
}

/// Set names become bundle file names, so they must be usable as one
pub struct SetNameValidator;

impl ConfigValidator for SetNameValidator {
    fn name(&self) -> &str {
        "set-names"
    }

    fn validate(&self, config: &ResourceConfig, result: &mut ValidationResult) {
        for name in config.sets.keys() {
            if name.is_empty() {
                result.add_issue(ValidationIssue::error("sets", "Set name is empty"));
            } else if name.contains(&['/', '\\'][..]) || name.chars().any(char::is_whitespace) {
                result.add_issue(
                    ValidationIssue::error(
                        format!("sets.{}", name),
                        format!("Set name '{}' is not a valid bundle file name", name),
                    )
                    .with_suggestion("Use letters, digits, '-' or '_' only"),
                );
            }
        }
    }
}

/// Checks the file lists of every set
pub struct FileListValidator;

impl ConfigValidator for FileListValidator {
    fn name(&self) -> &str {
        "file-lists"
    }

    fn validate(&self, config: &ResourceConfig, result: &mut ValidationResult) {
        for (name, files) in &config.sets {
            let field = format!("sets.{}", name);

            if files.is_empty() {
                result.add_issue(ValidationIssue::info(
                    field.clone(),
                    "Set is empty; its bundle will be empty",
                ));
                continue;
            }

            let mut seen = HashSet::new();
            for (index, file) in files.iter().enumerate() {
                if file.trim().is_empty() {
                    result.add_issue(ValidationIssue::error(
                        format!("{}[{}]", field, index),
                        "File entry is empty",
                    ));
                } else if !seen.insert(file.as_str()) {
                    result.add_issue(
                        ValidationIssue::warning(
                            format!("{}[{}]", field, index),
                            format!("Duplicate file '{}'", file),
                        )
                        .with_suggestion("The file would be loaded twice; remove one entry"),
                    );
                }
            }
        }
    }
}

/// Checks flag combinations
pub struct FlagValidator;

impl ConfigValidator for FlagValidator {
    fn name(&self) -> &str {
        "flags"
    }

    fn validate(&self, config: &ResourceConfig, result: &mut ValidationResult) {
        if config.minification && !config.bundling {
            result.add_issue(
                ValidationIssue::warning(
                    "minification",
                    "Minification is on but bundling is off; individual files are served",
                )
                .with_suggestion("Enable \"bundling\" as well, or use the prod target"),
            );
        }
    }
}

/// Ordered collection of validators
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn ConfigValidator>>,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self {
            validators: vec![
                Box::new(SetNameValidator),
                Box::new(FileListValidator),
                Box::new(FlagValidator),
            ],
        }
    }
}

impl ValidatorRegistry {
    /// Create a registry with no validators
    pub fn empty() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Register an additional validator
    pub fn register(&mut self, validator: Box<dyn ConfigValidator>) {
        self.validators.push(validator);
    }

    /// Names of the registered validators, in run order
    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run all validators
    ///
    /// ```
    /// use scriptset::config::{ResourceConfig, ValidatorRegistry};
    ///
    /// let config = ResourceConfig::default()
    ///     .with_set("libs", ["jquery.js", "jquery.js"])
    ///     .with_set("bad name", ["a.js"]);
    ///
    /// let result = ValidatorRegistry::default().validate_all(&config);
    /// assert!(!result.valid);
    /// assert_eq!(result.errors().len(), 1);
    /// assert_eq!(result.warnings().len(), 1);
    /// ```
    pub fn validate_all(&self, config: &ResourceConfig) -> ValidationResult {
        let mut result = ValidationResult::success();
        for validator in &self.validators {
            validator.validate(config, &mut result);
        }
        result
    }
}
