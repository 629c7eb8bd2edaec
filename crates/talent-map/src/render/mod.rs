//! Render a [`TalentMap`] into a single self-contained HTML page.
//!
//! The page embeds the data model as JSON and draws the globe and org-chart
//! panel client-side. No classification happens in the page.

use crate::aggregate::TalentMap;
use crate::error::Result;

const TEMPLATE: &str = include_str!("template.html");

/// Render the talent map page.
pub fn render_html(map: &TalentMap) -> Result<String> {
    let data = script_safe_json(&serde_json::to_string(map)?);
    let company = escape_html(&map.company_name);
    let total = map.total_employees.to_string();
    let location_count = map.locations.len().to_string();

    Ok(fill_template(TEMPLATE, |name| match name {
        "COMPANY_NAME" => Some(company.as_str()),
        "TOTAL_EMPLOYEES" => Some(total.as_str()),
        "LOCATION_COUNT" => Some(location_count.as_str()),
        "DATA_JSON" => Some(data.as_str()),
        _ => None,
    }))
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Make serialized JSON safe to place inside a `<script>` block.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Replace `{{NAME}}` placeholders in one pass, so substituted values are never
/// rescanned. Unknown placeholders are left as-is.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}").and_then(|end| Some((end, lookup(&after[..end])?))) {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
