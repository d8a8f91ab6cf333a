//! Thick Lines
//!
//! Lines wider than one pixel are drawn as parallel copies of the center
//! line, offset across the dominant direction so the line ends stay flat.
//!
//! # Example
//!
//!     use pixdraw::{Surface, PixelFormat, Polyline, Rgba8};
//!
//!     let mut surf = Surface::new(20, 20, PixelFormat::Rgb24);
//!     let p = surf.map_rgba(Rgba8::white());
//!     let pts = [(2, 2), (15, 2), (15, 15)];
//!
//!     let mut line = Polyline::new(&pts);
//!     line.width(3);
//!     line.closed(true);
//!
//!     let mut ren = surf.lock();
//!     let bbox = line.draw(&mut ren, p);
//!     assert_eq!(bbox.to_rect(0, 0), pixdraw::Rect::new(1, 1, 16, 15));
//!

use crate::base::RenderingBase;
use crate::bounds::BoundingBox;
use crate::clip::Segment;
use crate::line::clip_and_draw_line;

/// Draw `seg` with a thickness of `width` pixels
///
/// The center line is drawn first, then copies at offsets 1, -1, 2, -2, ...
/// until `width` lines have been drawn.  Copies move along y when the
/// segment is more horizontal than vertical and along x otherwise.  Each
/// copy is clipped on its own.
///
/// Returns the extent of the clipped copies, or None if every copy was
/// clipped away.  A `width` below 1 draws nothing.
pub fn clip_and_draw_line_width(ren: &mut RenderingBase, p: u32, width: i64, seg: Segment<i64>) -> Option<BoundingBox> {
    if width < 1 {
        return None;
    }
    let (xinc, yinc) = if (seg.x1 - seg.x2).abs() > (seg.y1 - seg.y2).abs() {
        (0, 1)
    } else {
        (1, 0)
    };
    let mut range = BoundingBox::new();
    let mut draw = |ren: &mut RenderingBase, s: Segment<i64>| {
        if let Some(s) = clip_and_draw_line(ren, p, s) {
            range.add_segment(&s);
        }
    };
    draw(ren, seg);
    let mut n = 1;
    while n < width {
        let k = n / 2 + 1;
        draw(ren, seg.offset(xinc * k, yinc * k));
        if n + 1 < width {
            draw(ren, seg.offset(-xinc * k, -yinc * k));
        }
        n += 2;
    }
    if range.is_empty() {
        None
    } else {
        Some(range)
    }
}

/// Connected run of line segments through a list of points
///
/// Shared by open and closed polylines, and by polygon and rectangle
/// outlines.
#[derive(Debug,Clone)]
pub struct Polyline<'p> {
    points: &'p [(i64, i64)],
    width: i64,
    closed: bool,
}

impl<'p> Polyline<'p> {
    /// Create an open, one pixel wide polyline
    pub fn new(points: &'p [(i64, i64)]) -> Self {
        Self { points, width: 1, closed: false }
    }
    /// Set the line width
    pub fn width(&mut self, width: i64) -> &mut Self {
        self.width = width;
        self
    }
    /// Join the last point back to the first
    ///
    /// Only applied with more than 2 points
    pub fn closed(&mut self, closed: bool) -> &mut Self {
        self.closed = closed;
        self
    }
    /// Segments in drawing order
    pub fn segments(&self) -> impl Iterator<Item=Segment<i64>> + 'p {
        let pts = self.points;
        let close = if self.closed && pts.len() > 2 {
            Some(Segment::new(pts[pts.len()-1].0, pts[pts.len()-1].1, pts[0].0, pts[0].1))
        } else {
            None
        };
        pts.windows(2)
            .map(|w| Segment::new(w[0].0, w[0].1, w[1].0, w[1].1))
            .chain(close)
    }
    /// Draw every segment with the pixel value `p`
    ///
    /// Returns the combined extent of what was drawn
    pub fn draw(&self, ren: &mut RenderingBase, p: u32) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        for seg in self.segments() {
            if let Some(b) = clip_and_draw_line_width(ren, p, self.width, seg) {
                bbox.union(&b);
            }
        }
        bbox
    }
}
