//! Common test utilities and helpers
//!
//! Shared functionality for integration tests:
//! - Fixture projects with a declaration in each supported format
//! - Helpers for picking apart rendered tags
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let (temp_dir, path) = fixtures::create_json_project(fixtures::SITE_DECLARATION)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assertions;
pub mod fixtures;
