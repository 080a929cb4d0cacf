//! Path-string assembly for bundles and build sources
//!
//! Paths are handled as `/`-separated strings rather than `std::path` values:
//! they end up in URLs and in descriptors consumed by JavaScript tooling, so
//! the separator must not depend on the host platform.

/// Directory, relative to the base path or site root, that receives bundles
pub const SCRIPTS_DIR: &str = "scripts";

/// Placeholder in declared file paths that stands for a parent directory
pub const PARENT_MARKER: char = '~';

/// Output stage of a bundled set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleStage {
    /// Concatenated output: `<name>.built.js`
    Built,
    /// Minified output: `<name>.min.js`
    Minified,
}

impl BundleStage {
    /// File-name suffix placed between the set name and the extension
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Built => ".built",
            Self::Minified => ".min",
        }
    }
}

/// Replace every parent marker with `..`
///
/// ```
/// use scriptset::resources::paths::expand_parent_marker;
///
/// assert_eq!(expand_parent_marker("~/shared/util.js"), "../shared/util.js");
/// assert_eq!(expand_parent_marker("scripts/app.js"), "scripts/app.js");
/// ```
pub fn expand_parent_marker(file: &str) -> String {
    file.replace(PARENT_MARKER, "..")
}

/// Join two paths and normalize the result
///
/// `.` segments and repeated separators are dropped and `..` removes the
/// preceding segment. Leading `..` segments of relative paths are kept; on
/// absolute paths they stop at the root.
///
/// ```
/// use scriptset::resources::paths::join;
///
/// assert_eq!(
///     join("../../app/static", "scripts/libs/jquery.js"),
///     "../../app/static/scripts/libs/jquery.js"
/// );
/// assert_eq!(join("../../app/static", "../shared/util.js"), "../../app/shared/util.js");
/// assert_eq!(join("/base", "./a//b.js"), "/base/a/b.js");
/// ```
pub fn join(base: &str, relative: &str) -> String {
    let joined = match (base.is_empty(), relative.is_empty()) {
        (true, _) => relative.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, relative),
    };
    normalize(&joined)
}

/// Normalize a `/`-separated path
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if absolute {
        format!("/{}", body)
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Resolve a declared file against the build base path
pub fn resolve_source(base: &str, file: &str) -> String {
    join(base, &expand_parent_marker(file))
}

/// Bundle file path under `base`: `<base>/scripts/<name><suffix>.<extension>`
///
/// A trailing `/` on `base` is not doubled; an empty `base` yields a relative
/// `scripts/...` path.
///
/// ```
/// use scriptset::resources::paths::{bundle_file, BundleStage};
///
/// assert_eq!(
///     bundle_file("/base", "admin", BundleStage::Built, "js"),
///     "/base/scripts/admin.built.js"
/// );
/// assert_eq!(
///     bundle_file("/base/", "admin", BundleStage::Minified, "js"),
///     "/base/scripts/admin.min.js"
/// );
/// assert_eq!(
///     bundle_file("", "admin", BundleStage::Built, "js"),
///     "scripts/admin.built.js"
/// );
/// ```
pub fn bundle_file(base: &str, name: &str, stage: BundleStage, extension: &str) -> String {
    let file = format!("{}/{}{}.{}", SCRIPTS_DIR, name, stage.suffix(), extension);
    if base.is_empty() {
        file
    } else {
        format!("{}/{}", base.trim_end_matches('/'), file)
    }
}

/// Site-absolute URL of a bundle: `/scripts/<name><suffix>.<extension>`
pub fn bundle_url(name: &str, stage: BundleStage, extension: &str) -> String {
    bundle_file("/", name, stage, extension)
}
