/// Export formats for a finished tree.
pub mod json;

pub use json::{to_json_string, write_json};
