//! Human-readable and JSON dumps of a `ConfigManager`.

use super::ConfigManager;
use crate::store::FileStore;
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 3;

impl<S: FileStore> ConfigManager<S> {
    /// Entries grouped by section, keys sorted within a section, columns
    /// padded to the widest section and key. Sections are separated by a blank
    /// line.
    pub fn render(&self) -> String {
        let sections = self.sections();
        let Some(section_width) = sections.iter().map(|s| s.width()).max() else {
            return String::new();
        };
        let section_width = section_width + COLUMN_GAP;
        let key_width = self.iter().map(|(k, _)| k.key.width()).max().unwrap_or(0) + COLUMN_GAP;

        let mut out = String::new();
        for section in &sections {
            let Ok(view) = self.section(section) else { continue };
            for (idx, (key, value)) in view.iter().enumerate() {
                let label = if idx == 0 { section.as_str() } else { "" };
                out.push_str(&format!(
                    "{} {} \t {}\n",
                    pad(label, section_width),
                    pad(key, key_width),
                    value
                ));
            }
            out.push('\n');
        }
        out
    }

    /// `{section: {key: value}}`.
    pub fn to_json(&self) -> Value {
        let mut doc = Map::new();
        for section in self.sections() {
            let Ok(view) = self.section(&section) else { continue };
            let keys: Map<String, Value> =
                view.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect();
            doc.insert(section, Value::Object(keys));
        }
        Value::Object(doc)
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}
