//! Value coercion helpers for configuration strings.

use once_cell::sync::Lazy;

/// Commas not escaped with a backslash.
static LIST_SEPARATOR: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(r"(?<!\\),").expect("valid regex"));

/// Split a list-valued setting on unescaped commas.
///
/// Items are trimmed and `\,` is unescaped to `,`. An empty or blank value
/// yields an empty list.
pub fn parse_list(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut last = 0;
    for found in LIST_SEPARATOR.find_iter(value) {
        // The pattern is a fixed look-behind and cannot fail at runtime.
        let Ok(found) = found else { break };
        items.push(unescape(&value[last..found.start()]));
        last = found.end();
    }
    items.push(unescape(&value[last..]));
    items
}

fn unescape(item: &str) -> String {
    item.trim().replace("\\,", ",")
}

/// `true` only for a (trimmed, case-insensitive) `TRUE`.
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
