//! Filename to flow ID normalization.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Date and version suffixes; everything from the first match onwards is cut.
static VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9]{8}.*|[0-9]{6}_.*|WE[0-9]{6}.*|D[0-9]{6}.*").expect("valid regex")
});

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ ._]").expect("valid regex"));

/// Derive the canonical flow ID from an arbitrary filename.
///
/// Strips directories and the extension, drops a trailing date/version tag,
/// splits on spaces, dots and underscores and joins the non-empty tokens
/// upper-cased with `_`.
///
/// ```
/// use flow_config::flow_id;
/// assert_eq!(flow_id("/landing/SALES_20230501_extract.csv").unwrap(), "SALES");
/// ```
pub fn flow_id(filename: &str) -> Result<String> {
    let stem = strip_extension(base_name(filename));
    let trimmed = VERSION_SUFFIX.replace_all(stem, "");
    let normalized = SEPARATORS
        .split(&trimmed.to_uppercase())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    tracing::debug!("Processed filename '{}' to flow name '{}'", filename, normalized);
    if normalized.is_empty() {
        let err = Error::Normalization { filename: filename.to_string() };
        tracing::error!("{}", err);
        return Err(err);
    }
    Ok(normalized)
}

/// Last component of a `/`- or `\`-separated path.
fn base_name(filename: &str) -> &str {
    filename.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(filename)
}

/// Drop everything from the last `.` unless that text contains a space. A
/// leading dot does not start an extension.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => {
            let ext = &name[pos + 1..];
            if !ext.contains(' ') {
                &name[..pos]
            } else {
                name
            }
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_date_suffix_and_extension() {
        assert_eq!(flow_id("SALES_20230501_extract.csv").unwrap(), "SALES");
    }

    #[test]
    fn test_splits_on_separators() {
        assert_eq!(flow_id("a.b c_d").unwrap(), "A_B_C_D");
    }

    #[test]
    fn test_extension_may_carry_underscores() {
        assert_eq!(flow_id("sales.csv_20230501").unwrap(), "SALES");
        assert_eq!(flow_id("/drop/claims.dat_v2").unwrap(), "CLAIMS");
        assert_eq!(flow_id("claims.").unwrap(), "CLAIMS");
    }

    #[test]
    fn test_strips_directories() {
        assert_eq!(flow_id("/data/in/ret_prem_gl_extrct.txt").unwrap(), "RET_PREM_GL_EXTRCT");
        assert_eq!(flow_id(r"C:\drop\ret prem.txt").unwrap(), "RET_PREM");
    }

    #[test]
    fn test_six_digit_date_needs_underscore() {
        assert_eq!(flow_id("claims_230501_x.dat").unwrap(), "CLAIMS");
        assert_eq!(flow_id("claims230501.dat").unwrap(), "CLAIMS230501");
    }

    #[test]
    fn test_week_ending_and_day_tags_are_case_insensitive() {
        assert_eq!(flow_id("medsup_we230507.csv").unwrap(), "MEDSUP");
        assert_eq!(flow_id("medsup_WE230507.csv").unwrap(), "MEDSUP");
        assert_eq!(flow_id("pharmacy_d230507.csv").unwrap(), "PHARMACY");
    }

    #[test]
    fn test_empty_result_is_error() {
        let err = flow_id("20230501.csv").unwrap_err();
        assert!(matches!(err, Error::Normalization { .. }));
        assert!(err.to_string().contains("20230501.csv"));

        assert!(flow_id("").is_err());
        assert!(flow_id("_ . _").is_err());
    }

    #[test]
    fn test_hidden_file_name_is_not_an_extension() {
        assert_eq!(flow_id(".flows").unwrap(), "FLOWS");
    }
}
