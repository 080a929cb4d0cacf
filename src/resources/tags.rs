//! `<script>` tag rendering

use super::Resources;
use crate::error::ScriptSetError;

/// Wrap a URL in a script tag: `<script src="URL"></script>`
///
/// The URL is emitted verbatim.
pub fn script_tag(url: &str) -> String {
    format!("<script src=\"{}\"></script>", url)
}

/// Render the tags for the given sets, in order, with no separator
///
/// With bundling off every declared file gets its own tag; with bundling on
/// each set gets one tag pointing at `/scripts/<name>.built.js`, or
/// `/scripts/<name>.min.js` when minification is also on.
///
/// Fails on the first undeclared name; nothing is rendered in that case.
///
/// # Examples
///
/// ```
/// use scriptset::config::ResourceConfig;
/// use scriptset::resources::{render_tags, Resources};
///
/// let config = ResourceConfig::default()
///     .with_flags(true, true)
///     .with_set("public", ["a.js", "b.js"]);
/// let resources = Resources::from_config(&config);
///
/// assert_eq!(
///     render_tags(&resources, &["public"]).unwrap(),
///     r#"<script src="/scripts/public.min.js"></script>"#
/// );
/// assert!(render_tags(&resources, &["nonexistent"]).is_err());
/// ```
pub fn render_tags<S: AsRef<str>>(
    resources: &Resources,
    names: &[S],
) -> Result<String, ScriptSetError> {
    let stage = resources.served_stage();
    let mut html = String::new();

    for name in names {
        let set = resources.get(name.as_ref())?;
        match stage {
            Some(stage) => html.push_str(&script_tag(&set.bundle_url(stage))),
            None => {
                for file in set.files() {
                    html.push_str(&script_tag(file));
                }
            }
        }
    }

    Ok(html)
}
