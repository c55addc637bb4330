//! Trace entry: either a real point or an explicit segment boundary.
//!
//! Raw coordinate data marks boundaries with the sentinel pair `(-1, -1)`.
//! The conversion happens once, here; everything downstream works with
//! [`TraceEntry::EndOfSegment`] and never compares coordinates against the
//! sentinel. A consequence is that raw data cannot carry a genuine point at
//! `(-1, -1)`, while typed producers can.

use crate::constants::SENTINEL;
use crate::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEntry {
    /// A coordinate that belongs to the current segment
    Point(Point),
    /// Closes the current segment and opens a new, empty one
    EndOfSegment,
}

impl TraceEntry {
    /// Convert a raw coordinate pair, treating the sentinel as a boundary
    pub fn from_raw(raw: (i32, i32)) -> Self {
        if raw == SENTINEL {
            Self::EndOfSegment
        } else {
            Self::Point(raw.into())
        }
    }

    /// Convert back to the raw pair representation
    pub fn to_raw(&self) -> (i32, i32) {
        match self {
            Self::Point(p) => (*p).into(),
            Self::EndOfSegment => SENTINEL,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::EndOfSegment)
    }
}

impl From<Point> for TraceEntry {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

/// Convert a whole raw trace
pub fn entries_from_raw(raw: &[(i32, i32)]) -> Vec<TraceEntry> {
    raw.iter().copied().map(TraceEntry::from_raw).collect()
}
