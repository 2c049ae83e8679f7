//! Shared CLI utilities.

/// Namespace names from a comma-separated `--namespaces` value, trimmed, with
/// blank entries dropped. Names already in `seen` (compared ignoring case)
/// are skipped.
pub fn split_namespaces(value: Option<&str>, seen: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in value.unwrap_or("").split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let duplicate = seen.iter().chain(names.iter()).any(|known| known.eq_ignore_ascii_case(name));
        if !duplicate {
            names.push(name.to_string());
        }
    }
    names
}
