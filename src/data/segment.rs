//! Segment: an ordered run of points drawn as one connected line

use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// An ordered sequence of points, possibly empty.
///
/// Insertion order is the line-drawing order. Segments are filled by the
/// builder and read-only for everyone else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment {
    points: Vec<Point>,
}

impl Segment {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Smallest and largest corner of the box around the points, if any
    pub fn extent(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl<'a> IntoIterator for &'a Segment {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Segment {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pt, segment};

    #[test]
    fn test_extent() {
        let s = segment![(20, 6), (18, 6), (16, 4), (16, 2), (18, 0), (20, 0)];
        assert_eq!(s.extent(), Some((pt!(16, 0), pt!(20, 6))));
        assert_eq!(Segment::default().extent(), None);
    }

    #[test]
    fn test_single_point_extent() {
        let s = segment![(6, 5)];
        assert_eq!(s.extent(), Some((pt!(6, 5), pt!(6, 5))));
        assert_eq!(s.first(), s.last());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&segment![(0, 0), (1, 1)]).unwrap();
        assert_eq!(json, r#"[{"x":0,"y":0},{"x":1,"y":1}]"#);
    }
}
