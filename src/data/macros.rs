//! This module provides convenient macros for creating points and traces.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x, $y)
    };
}

/// Macro for creating a trace from raw coordinate pairs
///
/// The pair `(-1, -1)` becomes an end-of-segment marker, every other pair a point.
///
/// ```
/// use snow_trail::{trail, TraceEntry};
///
/// let entries = trail![(-1, -1), (0, 0), (1, 1)];
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[0], TraceEntry::EndOfSegment);
/// ```
#[macro_export]
macro_rules! trail {
    () => {
        ::std::vec::Vec::<$crate::data::TraceEntry>::new()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        vec![$($crate::data::TraceEntry::from_raw(($x, $y))),+]
    };
}

/// Macro for creating a Segment from a list of coordinate pairs
#[macro_export]
macro_rules! segment {
    () => {
        $crate::data::Segment::default()
    };
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        $crate::data::Segment::new(vec![$($crate::pt!($x, $y)),+])
    };
}
