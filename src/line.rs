//! Line Rasterizers
//!
//! Single pixel wide lines in two flavors:
//!
//! - aliased, stepped with integer [Bresenham] error accumulation
//! - anti-aliased, traced with Wu's two pixel coverage split
//!
//! Both have a `clip_and_` variant that clips the segment to the active clip
//! rect of the [RenderingBase] first.
//!
//! [Bresenham]: struct.Bresenham.html
//! [RenderingBase]: ../base/struct.RenderingBase.html

use crate::base::RenderingBase;
use crate::clip::clip_aaline;
use crate::clip::clip_line;
use crate::clip::Segment;
use crate::color::Rgba8;
use crate::math::frac;
use crate::math::invfrac;

/// Integer line stepper
///
/// Yields every pixel from the first endpoint to the last, inclusive.  The
/// error term starts at zero and the minor axis advances once the
/// accumulated error reaches the major axis length.
///
///     use pixdraw::Bresenham;
///     let pts : Vec<_> = Bresenham::new(0, 0, 4, 2).collect();
///     assert_eq!(pts, vec![(0,0),(1,0),(2,1),(3,1),(4,2)]);
///
#[derive(Debug,Clone)]
pub struct Bresenham {
    x: i64,
    y: i64,
    /// Step along the major axis
    major: (i64, i64),
    /// Step along the minor axis
    minor: (i64, i64),
    /// Pixels along the major axis
    dmajor: i64,
    /// Pixels along the minor axis
    dminor: i64,
    err: i64,
    count: i64,
}

impl Bresenham {
    /// Create a stepper from (`x1`,`y1`) to (`x2`,`y2`)
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let sx = if x2 < x1 { -1 } else { 1 };
        let sy = if y2 < y1 { -1 } else { 1 };
        let dx = (x2 - x1).abs() + 1;
        let dy = (y2 - y1).abs() + 1;
        let (major, minor, dmajor, dminor) = if dx < dy {
            ((0, sy), (sx, 0), dy, dx)
        } else {
            ((sx, 0), (0, sy), dx, dy)
        };
        Self { x: x1, y: y1, major, minor, dmajor, dminor, err: 0, count: 0 }
    }
}

impl Iterator for Bresenham {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.count >= self.dmajor {
            return None;
        }
        let out = (self.x, self.y);
        self.count += 1;
        self.err += self.dminor;
        if self.err >= self.dmajor {
            self.err -= self.dmajor;
            self.x += self.minor.0;
            self.y += self.minor.1;
        }
        self.x += self.major.0;
        self.y += self.major.1;
        Some(out)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.dmajor - self.count) as usize;
        (n, Some(n))
    }
}

/// Draw an aliased line between two points inside of the clip rect
///
/// Pixels are written without a clip check
pub fn draw_line(ren: &mut RenderingBase, p: u32, seg: Segment<i64>) {
    for (x, y) in Bresenham::new(seg.x1, seg.y1, seg.x2, seg.y2) {
        ren.put(x, y, p);
    }
}

/// Clip `seg` to the clip rect and draw what is left
///
/// Horizontal and vertical segments are drawn as runs.  Returns the clipped
/// segment, or None if nothing was inside
pub fn clip_and_draw_line(ren: &mut RenderingBase, p: u32, seg: Segment<i64>) -> Option<Segment<i64>> {
    let s = clip_line(seg, &ren.limits())?;
    if s.y1 == s.y2 {
        ren.hline(p, s.x1, s.y1, s.x2);
    } else if s.x1 == s.x2 {
        ren.vline(p, s.x1, s.y1, s.y2);
    } else {
        draw_line(ren, p, s);
    }
    Some(s)
}

/// Draw an anti-aliased line
///
/// Every step along the dominant axis splits full coverage between the two
/// pixels straddling the exact position on the other axis.  The two end
/// pixels are weighted by how much of the pixel the segment covers along
/// the dominant axis.  The second pixel of a pair is skipped when it falls
/// past the far edge of the clip rect.
///
/// A zero length segment writes a single pixel of `c` with no blending.
/// With `blend` off the alpha of `c` is treated as opaque.
pub fn draw_aaline(ren: &mut RenderingBase, c: Rgba8, seg: Segment<f64>, blend: bool) {
    let c = if blend { c } else { c.with_alpha(255) };
    let lim = ren.limits();
    let Segment { x1, y1, x2, y2 } = seg;
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0.0 && dy == 0.0 {
        let p = ren.map_rgba(c);
        ren.set_at(x1.trunc() as i64, y1.trunc() as i64, p);
        return;
    }

    if dx.abs() > dy.abs() {
        wu_trace(ren, c, blend, (x1, y1), (x2, y2), lim.y2, false);
    } else {
        wu_trace(ren, c, blend, (y1, x1), (y2, x2), lim.x2, true);
    }
}

/// Wu tracer in (major, minor) axis coordinates
///
/// `far` is the last minor axis position inside of the clip rect, and
/// `steep` maps the pair back to (x,y) as (minor, major)
fn wu_trace(ren: &mut RenderingBase, c: Rgba8, blend: bool,
            from: (f64, f64), to: (f64, f64), far: i64, steep: bool) {
    let (from, to) = if from.0 > to.0 { (to, from) } else { (from, to) };
    let slope = (to.1 - from.1) / (to.0 - from.0);
    let plot = |ren: &mut RenderingBase, a: i64, b: f64, br: f64| {
        let ib = b as i64;
        let pair = [(ib, invfrac(b) * br), (ib + 1, frac(b) * br)];
        let n = if ib < far { 2 } else { 1 };
        for &(ib, br) in pair[..n].iter() {
            let (x, y) = if steep { (ib, a) } else { (a, ib) };
            ren.draw_pixel_32(x, y, c, br, blend);
        }
    };
    let mut ends = [(0, 0.0); 2];
    for (end, &(a, b)) in ends.iter_mut().zip([from, to].iter()) {
        let pa = a.trunc() + 0.5;
        let pb = b + slope * (pa - a);
        plot(ren, pa as i64, pb, invfrac(a));
        *end = (pa as i64, pb);
    }
    let mut bf = ends[0].1 + slope;
    for a in ends[0].0 + 1 .. ends[1].0 {
        plot(ren, a, bf, 1.0);
        bf += slope;
    }
}

/// Clip `seg` to the clip rect and draw what is left anti-aliased
///
/// Returns true if any part of the segment was inside
pub fn clip_and_draw_aaline(ren: &mut RenderingBase, c: Rgba8, seg: Segment<f64>, blend: bool) -> bool {
    match clip_aaline(seg, &ren.limits()) {
        Some(s) => {
            draw_aaline(ren, c, s, blend);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PixelFormat, Rect, Surface};

    #[test]
    fn bresenham_reaches_endpoints() {
        let ends = [(0,0,7,3),(7,3,0,0),(2,9,5,-4),(-3,-3,-3,4),(1,1,1,1),(0,5,9,5)];
        for &(x1,y1,x2,y2) in ends.iter() {
            let pts : Vec<_> = Bresenham::new(x1, y1, x2, y2).collect();
            let n = (x2 - x1).abs().max((y2 - y1).abs()) + 1;
            assert_eq!(pts.len() as i64, n);
            assert_eq!(pts[0], (x1, y1));
            assert_eq!(*pts.last().unwrap(), (x2, y2), "{:?}", (x1,y1,x2,y2));
            for w in pts.windows(2) {
                assert!((w[1].0 - w[0].0).abs() <= 1 && (w[1].1 - w[0].1).abs() <= 1);
            }
        }
    }

    #[test]
    fn steep_line() {
        let pts : Vec<_> = Bresenham::new(0, 0, 1, 3).collect();
        assert_eq!(pts, vec![(0,0),(0,1),(1,2),(1,3)]);
    }

    #[test]
    fn clipped_away() {
        let mut s = Surface::new(10, 10, PixelFormat::Rgb24);
        let mut ren = s.lock();
        assert!(clip_and_draw_line(&mut ren, 1, Segment::new(-5, -5, -1, 20)).is_none());
        assert!(!clip_and_draw_aaline(&mut ren, Rgba8::white(), Segment::new(11.0, 0.0, 20.0, 9.0), true));
        assert!(ren.bbox().is_empty());
    }

    #[test]
    fn aaline_horizontal_on_pixel_centers() {
        let mut s = Surface::new(10, 4, PixelFormat::Argb32);
        let r = {
            let mut ren = s.lock();
            draw_aaline(&mut ren, Rgba8::white(), Segment::new(1.0, 1.0, 6.0, 1.0), false);
            ren.finish(0, 0)
        };
        // y is exact, so the lower pixel of each pair gets no coverage
        assert_eq!(s.get_at(3, 1), Some(Rgba8::white()));
        assert_eq!(s.get_at(3, 2), Some(Rgba8::new(0, 0, 0, 0)));
        assert_eq!(s.get_at(0, 1), Some(Rgba8::new(0, 0, 0, 0)));
        assert_eq!(r, Rect::new(1, 1, 6, 1));
    }

    #[test]
    fn aaline_single_point() {
        let mut s = Surface::new(4, 4, PixelFormat::Rgb24);
        let r = {
            let mut ren = s.lock();
            draw_aaline(&mut ren, Rgba8::rgb(9, 8, 7), Segment::new(2.7, 1.2, 2.7, 1.2), true);
            ren.finish(0, 0)
        };
        assert_eq!(r, Rect::new(2, 1, 1, 1));
        assert_eq!(s.get_at(2, 1), Some(Rgba8::rgb(9, 8, 7)));
    }
}
