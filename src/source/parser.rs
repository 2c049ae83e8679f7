//! Line-oriented `.prm` parser.
//!
//! ```text
//! # comment
//! [flow_setup]
//! for_flows = SALES, RETURNS
//!
//! [extract::sales]
//! db = sales_db
//! ```
//!
//! A file without any `[header]` line is a flat `SIMPLE` source.

use super::{ConfigSource, ParseStyle};
use crate::domain::{CaseInsensitiveMap, SectionView};
use crate::error::{Error, Result};
use std::path::Path;

pub fn parse_source(path: &Path, text: &str) -> Result<ConfigSource> {
    let mut headers: Vec<String> = Vec::new();
    let mut sections: CaseInsensitiveMap<String, SectionView> = CaseInsensitiveMap::new();
    let mut current: Option<String> = None;
    let mut flat = SectionView::new();

    let fail = |line: usize, message: &str| Error::Parse {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    };

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(inner) = line.strip_prefix('[') {
            let Some(header) = inner.strip_suffix(']') else {
                return Err(fail(line_no, "unterminated section header"));
            };
            let header = header.trim();
            if super::split_header(header).0.is_empty() {
                return Err(fail(line_no, "empty section name"));
            }
            if !flat.is_empty() {
                return Err(fail(line_no, "key outside of any section"));
            }
            let header = header.to_string();
            if !sections.contains_key(&header) {
                headers.push(header.clone());
                sections.insert(header.clone(), SectionView::new());
            }
            current = Some(header);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(fail(line_no, "expected 'key = value'"));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(fail(line_no, "empty key"));
        }
        let value = value.trim().to_string();

        match &current {
            Some(header) => {
                if let Some(section) = sections.get_mut(header) {
                    section.insert(key.to_string(), value);
                }
            }
            None => {
                flat.insert(key.to_string(), value);
            }
        }
    }

    let style = if headers.is_empty() { ParseStyle::Simple } else { ParseStyle::Full };
    if style == ParseStyle::Simple {
        sections.insert(String::new(), flat);
    }

    Ok(ConfigSource { path: path.to_path_buf(), style, headers, sections })
}
