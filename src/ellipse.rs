//! Ellipses and Arcs
//!
//! Ellipses are traced with a 6 bit fixed point incremental walk around one
//! octant, mirrored four ways.  Rows already drawn by an earlier step are
//! remembered so solid ellipses never fill a row twice.
//!
//! Sizes are full widths and heights.  An even size has no center pixel, so
//! the right and bottom halves are pulled in by one to keep the result
//! symmetric.

use std::f64::consts::PI;

use crate::base::RenderingBase;
use crate::clip::Segment;
use crate::line::clip_and_draw_line;

/// Marker for a row that has not been drawn yet
const UNSET: i64 = 0xFFFF;

/// Draw a solid or outlined ellipse centered at (`x`,`y`)
///
/// A zero radius on either axis collapses the ellipse to a single pixel or
/// a straight clipped run.
///
///     use pixdraw::{Surface, PixelFormat, Rgba8, draw_ellipse};
///     let mut surf = Surface::new(20, 20, PixelFormat::Rgb24);
///     let p = surf.map_rgba(Rgba8::white());
///     let mut ren = surf.lock();
///     draw_ellipse(&mut ren, 10, 10, 10, 6, true, p);
///     assert_eq!(ren.finish(0, 0), pixdraw::Rect::new(5, 7, 10, 6));
///
pub fn draw_ellipse(ren: &mut RenderingBase, x: i64, y: i64, width: i64, height: i64, solid: bool, p: u32) {
    let xoff = (width & 1) ^ 1;
    let yoff = (height & 1) ^ 1;
    let rx = width >> 1;
    let mut ry = height >> 1;

    if rx == 0 && ry == 0 {
        ren.set_at(x, y, p);
        return;
    }
    if rx == 0 {
        ren.vline_clip(p, x, y - ry, y + ry + (height & 1));
        return;
    }
    if ry == 0 {
        ren.hline_clip(p, x - rx, y, x + rx + (width & 1));
        return;
    }

    ry += i64::from(solid) - yoff;

    // Draw the pair of rows y + dy and y - dy - yoff, spanning x - dx
    // to x + dx - xoff
    let rows = |ren: &mut RenderingBase, dx: i64, dy: i64| {
        for &row in [y + dy, y - dy - yoff].iter() {
            if solid {
                ren.hline_clip(p, x - dx, row, x + dx - xoff);
            } else {
                ren.set_at(x - dx, row, p);
                ren.set_at(x + dx - xoff, row, p);
            }
        }
    };

    let (mut oh, mut oi, mut oj, mut ok) = (UNSET, UNSET, UNSET, UNSET);
    let mut ix = 0;
    if rx >= ry {
        let mut iy = rx * 64;
        loop {
            let h = (ix + 8) >> 6;
            let i = (iy + 8) >> 6;
            let j = (h * ry) / rx;
            let k = (i * ry) / rx;
            if (ok != k && oj != k && k < ry) || !solid {
                rows(ren, h, k);
                ok = k;
            }
            if (oj != j && ok != j && k != j) || !solid {
                rows(ren, i, j);
                oj = j;
            }
            ix += iy / rx;
            iy -= ix / rx;
            if i <= h {
                break;
            }
        }
    } else {
        let mut iy = ry * 64;
        loop {
            let h = (ix + 8) >> 6;
            let i = (iy + 8) >> 6;
            let j = (h * rx) / ry;
            let k = (i * rx) / ry;
            if (oi != i && oh != i && i < ry) || !solid {
                rows(ren, j, i);
                oi = i;
            }
            if (oh != h && oi != h && i != h) || !solid {
                rows(ren, k, h);
                oh = h;
            }
            ix += iy / ry;
            iy -= ix / ry;
            if i <= h {
                break;
            }
        }
    }
}

/// Draw an elliptical arc centered at (`x`,`y`) with radii `rx` and `ry`
///
/// Angles are in radians, counterclockwise from the positive x axis with y
/// pointing down the surface.  The arc is a chain of clipped line segments
/// with an angular step chosen so each segment spans about two pixels of
/// the smaller radius.  `stop` is expected to be no less than `start`.
///
/// At most one full turn is traced; non-finite angles draw nothing.
pub fn draw_arc(ren: &mut RenderingBase, x: i64, y: i64, rx: i64, ry: i64, start: f64, stop: f64, p: u32) {
    if !start.is_finite() || !stop.is_finite() {
        return;
    }
    let span = (stop - start).min(2.0 * PI);
    let start = if start.abs() > 2.0 * PI { start.rem_euclid(2.0 * PI) } else { start };
    let stop = start + span;

    let r = rx.min(ry) as f64;
    // Radii below 2 take a quarter turn per step
    let step = if r < 1.0e-4 { 1.0 } else { (2.0 / r).min(1.0).asin() };
    let step = step.max(0.05);

    let point = |a: f64| {
        ((x as f64 + a.cos() * rx as f64) as i64,
         (y as f64 - a.sin() * ry as f64) as i64)
    };
    let mut last = point(start);
    let mut a = start + step;
    while a <= stop {
        let next = point(a);
        clip_and_draw_line(ren, p, Segment::new(last.0, last.1, next.0, next.1));
        last = next;
        a += step;
    }
}
