//! Bounding box of touched pixels

use crate::clip::Rect;
use crate::clip::Segment;

/// Accumulated extent of the pixels written by one drawing operation
///
/// Starts empty and only ever grows.
///
///     use pixdraw::{BoundingBox, Rect};
///     let mut b = BoundingBox::new();
///     assert!(b.is_empty());
///     assert_eq!(b.to_rect(3, 4), Rect::new(3, 4, 0, 0));
///     b.add(5, 1);
///     b.add(2, 7);
///     assert_eq!(b.to_rect(3, 4), Rect::new(2, 1, 4, 7));
///
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct BoundingBox {
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    /// Empty box
    pub fn new() -> Self {
        Self { xmin: i64::max_value(), ymin: i64::max_value(),
               xmax: i64::min_value(), ymax: i64::min_value() }
    }
    /// True if nothing was added
    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }
    /// Grow to include the pixel (`x`,`y`)
    pub fn add(&mut self, x: i64, y: i64) {
        if x < self.xmin { self.xmin = x; }
        if x > self.xmax { self.xmax = x; }
        if y < self.ymin { self.ymin = y; }
        if y > self.ymax { self.ymax = y; }
    }
    /// Grow to include both endpoints of `seg`
    pub fn add_segment(&mut self, seg: &Segment<i64>) {
        self.add(seg.x1, seg.y1);
        self.add(seg.x2, seg.y2);
    }
    /// Grow to include another box
    pub fn union(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        self.add(other.xmin, other.ymin);
        self.add(other.xmax, other.ymax);
    }
    /// Final rectangle; a zero sized rect at (`x`,`y`) if nothing was added
    pub fn to_rect(&self, x: i64, y: i64) -> Rect {
        if self.is_empty() {
            return Rect::empty_at(x, y);
        }
        Rect::new(self.xmin, self.ymin,
                  self.xmax - self.xmin + 1,
                  self.ymax - self.ymin + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn union_ignores_empty() {
        let mut a = BoundingBox::new();
        a.add(1, 1);
        a.union(&BoundingBox::new());
        assert_eq!(a.to_rect(0, 0), Rect::new(1, 1, 1, 1));
        let mut b = BoundingBox::new();
        b.add_segment(&Segment::new(4, 9, -2, 3));
        a.union(&b);
        assert_eq!(a.to_rect(0, 0), Rect::new(-2, 1, 7, 9));
    }
}
