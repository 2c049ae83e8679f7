//! Flattening of generic ("genconf") files for one flow.

use crate::domain::MergedConfig;
use crate::source::{split_header, ConfigSource};

/// Flatten `source` into the view of `flow_id`.
///
/// Unqualified sections form the base. Sections qualified with `flow_id`
/// (compared case-insensitively) are layered over the base section of the same
/// name, key by key. Sections qualified for any other flow are ignored.
pub fn flatten(source: &ConfigSource, flow_id: &str) -> MergedConfig {
    let flow = flow_id.to_lowercase();
    let mut flat: MergedConfig = source.entries().collect();

    for header in source.headers() {
        let (base, qualifier) = split_header(header);
        let Some(qualifier) = qualifier else { continue };
        if qualifier.to_lowercase() != flow {
            continue;
        }
        let Some(overrides) = source.section(header) else { continue };
        tracing::debug!("Applying '{}' over base section '{}'", header, base);
        for (key, value) in overrides.iter() {
            flat.insert(base, key, value.as_str());
        }
    }
    flat
}
