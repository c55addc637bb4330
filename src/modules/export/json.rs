//! JSON export of built segments
//!
//! ```rust
//! use snow_trail::{modules::export::json, segment};
//!
//! let text = json::segments_to_json(&[segment![(0, 0), (1, 1)], segment![]]).unwrap();
//! assert_eq!(text, r#"[[{"x":0,"y":0},{"x":1,"y":1}],[]]"#);
//! ```

use crate::data::Segment;
use crate::error::TraceResult;

/// Serialize segments to a compact JSON string
pub fn segments_to_json(segments: &[Segment]) -> TraceResult<String> {
    Ok(serde_json::to_string(segments)?)
}

/// Serialize segments to an indented JSON string
pub fn segments_to_json_pretty(segments: &[Segment]) -> TraceResult<String> {
    Ok(serde_json::to_string_pretty(segments)?)
}

/// Read segments back from JSON produced by [`segments_to_json`]
pub fn segments_from_json(text: &str) -> TraceResult<Vec<Segment>> {
    Ok(serde_json::from_str(text)?)
}
