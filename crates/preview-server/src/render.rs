//! HTML rendering for the preview page.
//!
//! The page is an embedded template with `{{name}}` placeholders. Values are
//! substituted in a single pass, so text coming from the component file can
//! never be mistaken for another placeholder.

use crate::source::FileSnapshot;
use rust_embed::RustEmbed;
use std::path::Path;
use std::time::Duration;

#[derive(RustEmbed)]
#[folder = "assets"]
struct PreviewAssets;

const PAGE_TEMPLATE: &str = "preview.html";

/// Render the preview page for a snapshot of the component file.
///
/// # Errors
///
/// Returns an error message if the embedded template is missing, which
/// indicates a broken build rather than a runtime condition.
pub fn render(
    snapshot: &FileSnapshot,
    component_path: &Path,
    poll_interval: Duration,
) -> Result<String, String> {
    let asset = PreviewAssets::get(PAGE_TEMPLATE)
        .ok_or_else(|| format!("Missing embedded template '{}'", PAGE_TEMPLATE))?;
    let template = String::from_utf8_lossy(asset.data.as_ref());

    let source = html_escape(&snapshot.content);
    let path = html_escape(&component_path.display().to_string());
    let size = snapshot.stat.size.to_string();
    let modified = html_escape(&snapshot.stat.modified_display());
    let poll_ms = poll_interval.as_millis().to_string();

    Ok(substitute(&template, |key| match key {
        "component_source" => Some(source.as_str()),
        "component_path" => Some(path.as_str()),
        "component_size" => Some(size.as_str()),
        "component_modified" => Some(modified.as_str()),
        "poll_interval_ms" => Some(poll_ms.as_str()),
        _ => None,
    }))
}

/// Escape HTML special characters.
///
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replace `{{key}}` placeholders using `lookup`. Unknown keys are kept as-is.
fn substitute<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after_open[..end].trim();
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
