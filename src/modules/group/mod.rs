//! Grouping a flat trace into segments
//!
//! A trace is an ordered list of [`TraceEntry`] values. Every
//! [`TraceEntry::EndOfSegment`] opens a new, empty segment and every point is
//! appended to the most recently opened one. The first entry of a non-empty
//! trace must therefore be a boundary.
//!
//! # Example
//!
//! ```rust
//! use snow_trail::{build_segments, pt, trail};
//!
//! let segments = build_segments(&trail![(-1, -1), (0, 0), (-1, -1), (1, 1)]).unwrap();
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].points(), &[pt!(0, 0)]);
//! assert_eq!(segments[1].points(), &[pt!(1, 1)]);
//! ```

use crate::data::{entries_from_raw, Segment, TraceEntry};
use crate::error::{TraceError, TraceResult};
use log::debug;

/// Split a trace into segments at every boundary marker
///
/// Returns [`TraceError::NoActiveSegment`] if a point shows up before the
/// first boundary. An empty trace yields no segments.
pub fn build_segments(entries: &[TraceEntry]) -> TraceResult<Vec<Segment>> {
    let mut segments: Vec<Segment> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match entry {
            TraceEntry::EndOfSegment => segments.push(Segment::default()),
            TraceEntry::Point(point) => match segments.last_mut() {
                Some(current) => current.push(*point),
                None => return Err(TraceError::NoActiveSegment { index }),
            },
        }
    }

    debug!(
        "built {} segments holding {} points",
        segments.len(),
        segments.iter().map(Segment::len).sum::<usize>()
    );

    Ok(segments)
}

/// Build segments from raw coordinate pairs, `(-1, -1)` marking boundaries
pub fn build_segments_from_raw(raw: &[(i32, i32)]) -> TraceResult<Vec<Segment>> {
    build_segments(&entries_from_raw(raw))
}
