//! Assertion helpers for rendered tags

#![allow(dead_code)]

/// `src` attributes of every script tag in `html`, in order
pub fn script_sources(html: &str) -> Vec<String> {
    html.split("<script src=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once("\"></script>").map(|(src, _)| src.to_string()))
        .collect()
}

/// Assert that `html` is exactly the tags for `expected`, in order
pub fn assert_script_sources(html: &str, expected: &[&str]) {
    let actual = script_sources(html);
    assert_eq!(
        actual, expected,
        "Rendered tags differ from expected sources:\n{}",
        html
    );
}
