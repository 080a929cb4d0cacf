//! Build pipeline planning
//!
//! The pipeline itself is run by external tools:
//! 1. concatenation of every set into `<base>/scripts/<name>.built.js`
//! 2. minification of each bundle into `<base>/scripts/<name>.min.js`
//!
//! This module only decides which steps run and with which paths.

pub mod plan;

pub use plan::{BuildPlan, PlanStep, Task};
