//! CommonJS declaration support
//!
//! The same `scripts.js` file is `require`d by the JavaScript build and read
//! here. Its payload must be a JSON object literal; comments, the
//! `module.exports =` prefix and the trailing semicolon are removed before
//! handing it to `serde_json`.

use regex::Regex;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // String literals come first so comment markers inside them survive.
    RE.get_or_init(|| {
        Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|//[^\n]*|/\*(?s:.*?)\*/"#)
            .expect("static regex is valid")
    })
}

fn exports_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:module\.exports|export\s+default)\s*=?\s*")
            .expect("static regex is valid")
    })
}

/// Remove `//` and `/* */` comments, leaving string literals untouched
///
/// Block comments spanning lines collapse to a newline, others to a space.
pub fn strip_comments(source: &str) -> String {
    token_regex()
        .replace_all(source, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            if token.starts_with("//") {
                String::new()
            } else if token.starts_with("/*") {
                if token.contains('\n') {
                    "\n".to_string()
                } else {
                    " ".to_string()
                }
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// Extract the JSON payload from a CommonJS module declaration
///
/// ```
/// use scriptset::config::js_module::extract_payload;
///
/// let source = r#"
/// /** Configuration file for JavaScript resources. */
/// module.exports = {
///   "bundling": false, // toggled by the build
///   "sets": { "public": ["scripts/areas/public/index.js"] }
/// };"#;
///
/// let payload = extract_payload(source);
/// assert!(payload.starts_with('{'));
/// assert!(payload.ends_with('}'));
/// assert!(!payload.contains("toggled"));
/// ```
pub fn extract_payload(source: &str) -> String {
    let stripped = strip_comments(source);
    let body = exports_regex().replace(&stripped, "");
    body.trim().trim_end_matches(';').trim_end().to_string()
}
