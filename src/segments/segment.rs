use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Identifier of a segment, assigned in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

/// A maximal 8-connected set of edge pixels.
///
/// Points are stored in flood-fill (breadth-first) order; the voting search
/// does not depend on it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub points: Vec<Point>,
}

impl Segment {
    pub fn new(id: SegmentId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)` corners, `None` for an empty segment.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}
