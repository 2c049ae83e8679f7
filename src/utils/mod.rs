//! Shared helpers: text decoding, path handling and value coercion

pub mod encoding;
pub mod paths;
pub mod values;

pub use encoding::{decode_text, read_text};
pub use paths::{file_name, normalize_path};
pub use values::{parse_bool, parse_list};
