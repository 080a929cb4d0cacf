//! Check command implementation
//!
//! Runs the declaration validators and fails when any error-level issue is
//! found.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use super::load_resources;
use crate::config::{ValidationIssue, ValidationResult, ValidationSeverity, ValidatorRegistry};
use crate::error::ScriptSetError;
use crate::fmt::{format_count, CHECKMARK, CROSSMARK, INFO, WARNING};

/// Validate the declaration and report issues
pub fn cmd_check(config: Option<&Path>) -> Result<()> {
    let project_root = env::current_dir()?;
    let (path, declaration) = load_resources(config, &project_root)?;

    let result = ValidatorRegistry::default().validate_all(&declaration);

    println!(
        "Checked {} ({})",
        style(path.display()).bold(),
        format_count(declaration.sets.len(), "set")
    );
    for issue in &result.issues {
        println!("{}", format_issue(issue));
    }

    finish(&result)
}

/// One report line for an issue, with its suggestion on a second line
pub fn format_issue(issue: &ValidationIssue) -> String {
    let marker = match issue.severity {
        ValidationSeverity::Error => CROSSMARK,
        ValidationSeverity::Warning => WARNING,
        ValidationSeverity::Info => INFO,
    };

    let mut line = format!(
        "   {} {} {}: {}",
        marker,
        issue.severity.as_str(),
        style(&issue.field).cyan(),
        issue.message
    );
    if let Some(suggestion) = &issue.suggestion {
        line.push_str(&format!("\n      {}", style(suggestion).dim()));
    }
    line
}

fn finish(result: &ValidationResult) -> Result<()> {
    let errors = result.errors().len();
    if errors > 0 {
        return Err(ScriptSetError::InvalidConfig { errors }.into());
    }

    println!(
        "{} Configuration is valid ({})",
        CHECKMARK,
        format_count(result.warnings().len(), "warning")
    );
    Ok(())
}
