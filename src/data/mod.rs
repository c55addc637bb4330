//! Core data structures: points, trace entries and segments.

pub mod entry;
pub mod macros;
pub mod point;
pub mod segment;

pub use entry::{entries_from_raw, TraceEntry};
pub use point::Point;
pub use segment::Segment;
