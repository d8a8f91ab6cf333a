//! Drawing Primitives
//!
//! Entry points that validate their arguments, lock the surface, trace one
//! shape and report the rectangle of pixels touched.
//!
//! # Example
//!
//!     use pixdraw::{Surface, PixelFormat, RendererPrimitives, Rgba8, Rect};
//!
//!     let mut surf = Surface::new(64, 64, PixelFormat::Argb32);
//!     let mut ren = RendererPrimitives::with_surface(&mut surf);
//!
//!     let r = ren.line(Rgba8::white(), (2, 5), (10, 5), 1).unwrap();
//!     assert_eq!(r, Rect::new(2, 5, 9, 1));
//!
//!     let r = ren.circle(Rgba8::rgb(255, 0, 0), (32, 32), 10, 0).unwrap();
//!     assert_eq!(r, Rect::new(22, 22, 20, 20));
//!
//!     // Entirely outside of the surface
//!     let r = ren.line(Rgba8::white(), (-9, -9), (-2, -4), 3).unwrap();
//!     assert_eq!(r, Rect::new(-9, -9, 0, 0));
//!

use std::f64::consts::PI;

use log::debug;
use log::trace;

use crate::base::RenderingBase;
use crate::clip::Rect;
use crate::clip::Segment;
use crate::color::Rgba8;
use crate::ellipse::draw_arc;
use crate::ellipse::draw_ellipse;
use crate::error::DrawError;
use crate::error::Result;
use crate::line::clip_and_draw_aaline;
use crate::scan::draw_fillpoly;
use crate::stroke::clip_and_draw_line_width;
use crate::stroke::Polyline;
use crate::surface::Surface;

/// Shape drawing on a borrowed [Surface]
///
/// Every method returns the smallest rectangle containing every pixel it
/// changed.  When nothing changed, because of clipping or a zero width, the
/// rectangle has no size and sits at the start of the shape.
///
/// [Surface]: ../surface/struct.Surface.html
#[derive(Debug)]
pub struct RendererPrimitives<'a> {
    surface: &'a mut Surface,
    blend: bool,
}

impl<'a> RendererPrimitives<'a> {
    /// Draw on `surface`, with anti-aliased blending on
    pub fn with_surface(surface: &'a mut Surface) -> Self {
        Self { surface, blend: true }
    }
    /// Blend anti-aliased lines with the destination
    ///
    /// When off, coverage scales the line color and the destination is
    /// ignored
    pub fn blend(&mut self, blend: bool) -> &mut Self {
        self.blend = blend;
        self
    }
    fn lock(&mut self) -> (RenderingBase<'_>, bool) {
        (self.surface.lock(), self.blend)
    }

    /// Draw a straight line `width` pixels thick
    ///
    /// A `width` below 1 draws nothing
    pub fn line<C: Into<Rgba8>>(&mut self, color: C, start: (i64, i64), end: (i64, i64), width: i64) -> Result<Rect> {
        if width < 1 {
            debug!("line width {} below 1, nothing drawn", width);
            return Ok(Rect::empty_at(start.0, start.1));
        }
        let p = self.surface.map_rgba(color.into());
        let (mut ren, _) = self.lock();
        let seg = Segment::new(start.0, start.1, end.0, end.1);
        let r = match clip_and_draw_line_width(&mut ren, p, width, seg) {
            Some(bbox) => bbox.to_rect(start.0, start.1),
            None => Rect::empty_at(start.0, start.1),
        };
        trace!("line {:?} -> {:?} width {}: {:?}", start, end, width, r);
        Ok(r)
    }

    /// Draw an anti-aliased line between two sub-pixel positions
    ///
    ///     use pixdraw::{Surface, PixelFormat, RendererPrimitives, Rgba8, Rect};
    ///     let mut surf = Surface::new(16, 16, PixelFormat::Rgba32);
    ///     let r = RendererPrimitives::with_surface(&mut surf)
    ///         .blend(false)
    ///         .aaline(Rgba8::white(), (2.0, 2.0), (2.0, 12.0))
    ///         .unwrap();
    ///     assert_eq!(r, Rect::new(2, 2, 1, 11));
    ///     assert_eq!(surf.get_at(2, 7), Some(Rgba8::white()));
    ///
    pub fn aaline<C: Into<Rgba8>>(&mut self, color: C, start: (f64, f64), end: (f64, f64)) -> Result<Rect> {
        let c = color.into();
        let (mut ren, blend) = self.lock();
        let seg = Segment::new(start.0, start.1, end.0, end.1);
        clip_and_draw_aaline(&mut ren, c, seg, blend);
        let r = ren.finish(start.0.trunc() as i64, start.1.trunc() as i64);
        trace!("aaline {:?} -> {:?} blend {}: {:?}", start, end, blend, r);
        Ok(r)
    }

    /// Draw connected lines through `points`
    ///
    /// At least 2 points are needed.  With `closed` and more than 2 points
    /// the last point connects back to the first.
    pub fn lines<C: Into<Rgba8>>(&mut self, color: C, closed: bool, points: &[(i64, i64)], width: i64) -> Result<Rect> {
        check_points(points, 2)?;
        let r = self.polyline(color.into(), closed, points, width);
        trace!("lines n {} closed {} width {}: {:?}", points.len(), closed, width, r);
        Ok(r)
    }

    /// Draw connected anti-aliased lines through `points`
    ///
    /// At least 2 points are needed.  With `closed` and more than 2 points
    /// the last point connects back to the first.
    pub fn aalines<C: Into<Rgba8>>(&mut self, color: C, closed: bool, points: &[(f64, f64)]) -> Result<Rect> {
        check_points(points, 2)?;
        let c = color.into();
        let (x0, y0) = points.iter().fold((std::f64::MAX, std::f64::MAX), |(x, y), p| (x.min(p.0), y.min(p.1)));
        let (mut ren, blend) = self.lock();
        let close = if closed && points.len() > 2 {
            Some((points[points.len()-1], points[0]))
        } else {
            None
        };
        let pairs = points.windows(2).map(|w| (w[0], w[1])).chain(close);
        for (a, b) in pairs {
            clip_and_draw_aaline(&mut ren, c, Segment::new(a.0, a.1, b.0, b.1), blend);
        }
        let r = ren.finish(x0.trunc() as i64, y0.trunc() as i64);
        trace!("aalines n {} closed {} blend {}: {:?}", points.len(), closed, blend, r);
        Ok(r)
    }

    /// Draw a polygon through `points`
    ///
    /// A `width` of 0 fills the polygon, a larger width draws the closed
    /// outline that thick.  A negative width draws nothing, like
    /// [lines](#method.lines).  At least 3 points are needed.
    ///
    ///     use pixdraw::{Surface, PixelFormat, RendererPrimitives, Rgba8, Rect};
    ///     let mut surf = Surface::new(16, 16, PixelFormat::Rgb565);
    ///     let mut ren = RendererPrimitives::with_surface(&mut surf);
    ///     let tri = [(0, 0), (10, 0), (5, 10)];
    ///     assert_eq!(ren.polygon(Rgba8::white(), &tri, 0).unwrap(), Rect::new(0, 0, 11, 11));
    ///     assert!(ren.polygon(Rgba8::white(), &tri[..2], 0).is_err());
    ///     assert_eq!(ren.polygon(Rgba8::white(), &tri, -1).unwrap(), Rect::new(0, 0, 0, 0));
    ///
    pub fn polygon<C: Into<Rgba8>>(&mut self, color: C, points: &[(i64, i64)], width: i64) -> Result<Rect> {
        check_points(points, 3)?;
        let c = color.into();
        let r = if width != 0 {
            self.polyline(c, true, points, width)
        } else {
            let (x0, y0) = min_corner(points);
            let p = self.surface.map_rgba(c);
            let (mut ren, _) = self.lock();
            draw_fillpoly(&mut ren, points, p)?;
            ren.finish(x0, y0)
        };
        trace!("polygon n {} width {}: {:?}", points.len(), width, r);
        Ok(r)
    }

    /// Draw a rectangle, filled with a `width` of 0
    ///
    /// The rectangle covers `rect.w` by `rect.h` pixels
    pub fn rect<C: Into<Rgba8>>(&mut self, color: C, rect: Rect, width: i64) -> Result<Rect> {
        if rect.w < 0 || rect.h < 0 {
            debug!("rect rejected, {:?}", rect);
            return Err(DrawError::InvalidGeometry(format!("negative rect size {}x{}", rect.w, rect.h)));
        }
        let (l, t) = (rect.x, rect.y);
        let (r, b) = (rect.x + rect.w - 1, rect.y + rect.h - 1);
        self.polygon(color, &[(l, t), (r, t), (r, b), (l, b)], width)
    }

    /// Draw a circle centered at `center`
    ///
    /// A `width` of 0 fills the circle, a larger width draws that many
    /// rings inward from `radius`.
    pub fn circle<C: Into<Rgba8>>(&mut self, color: C, center: (i64, i64), radius: i64, width: i64) -> Result<Rect> {
        if radius < 0 {
            debug!("circle rejected, radius {}", radius);
            return Err(DrawError::InvalidGeometry(format!("negative radius {}", radius)));
        }
        check_width(width, radius)?;
        let p = self.surface.map_rgba(color.into());
        let (x, y) = center;
        let (mut ren, _) = self.lock();
        if width == 0 {
            draw_ellipse(&mut ren, x, y, radius * 2, radius * 2, true, p);
        } else {
            for ring in 0 .. width {
                let d = 2 * (radius - ring);
                draw_ellipse(&mut ren, x, y, d, d, false, p);
                // Second trace one pixel over covers the gaps between rings
                draw_ellipse(&mut ren, x + 1, y, d, d, false, p);
            }
        }
        let r = ren.finish(x, y);
        trace!("circle {:?} radius {} width {}: {:?}", center, radius, width, r);
        Ok(r)
    }

    /// Draw an ellipse inside of `rect`
    ///
    /// A `width` of 0 fills the ellipse, a larger width draws that many
    /// rings inward, each one pixel smaller across.
    pub fn ellipse<C: Into<Rgba8>>(&mut self, color: C, rect: Rect, width: i64) -> Result<Rect> {
        check_rect(&rect, width)?;
        let p = self.surface.map_rgba(color.into());
        let (x, y) = (rect.x + rect.w / 2, rect.y + rect.h / 2);
        let (mut ren, _) = self.lock();
        if width == 0 {
            draw_ellipse(&mut ren, x, y, rect.w, rect.h, true, p);
        } else {
            for ring in 0 .. width {
                draw_ellipse(&mut ren, x, y, rect.w - ring, rect.h - ring, false, p);
            }
        }
        let r = ren.finish(rect.x, rect.y);
        trace!("ellipse {:?} width {}: {:?}", rect, width, r);
        Ok(r)
    }

    /// Draw part of the ellipse inside of `rect`
    ///
    /// Angles are in radians, counterclockwise from the positive x axis.
    /// A `stop` before `start` wraps around by a full turn, and spans longer
    /// than a full turn are cut to one.  A `width` of 0 draws nothing.
    pub fn arc<C: Into<Rgba8>>(&mut self, color: C, rect: Rect, start: f64, stop: f64, width: i64) -> Result<Rect> {
        check_rect(&rect, width)?;
        if !start.is_finite() || !stop.is_finite() {
            debug!("arc rejected, angles {} .. {}", start, stop);
            return Err(DrawError::InvalidGeometry(format!("arc angles {} .. {} not finite", start, stop)));
        }
        let stop = if stop < start { stop + 2.0 * PI } else { stop };
        let p = self.surface.map_rgba(color.into());
        let (x, y) = (rect.x + rect.w / 2, rect.y + rect.h / 2);
        let (mut ren, _) = self.lock();
        for ring in 0 .. width {
            draw_arc(&mut ren, x, y, rect.w / 2 - ring, rect.h / 2 - ring, start, stop, p);
        }
        let r = ren.finish(rect.x, rect.y);
        trace!("arc {:?} {:.3} .. {:.3} width {}: {:?}", rect, start, stop, width, r);
        Ok(r)
    }

    /// Open or closed polyline shared by lines and polygon outlines
    fn polyline(&mut self, c: Rgba8, closed: bool, points: &[(i64, i64)], width: i64) -> Rect {
        let (x0, y0) = min_corner(points);
        if width < 1 {
            debug!("polyline width {} below 1, nothing drawn", width);
            return Rect::empty_at(x0, y0);
        }
        let p = self.surface.map_rgba(c);
        let (mut ren, _) = self.lock();
        Polyline::new(points).width(width).closed(closed).draw(&mut ren, p);
        ren.finish(x0, y0)
    }
}

fn check_points<T>(points: &[T], needed: usize) -> Result<()> {
    if points.len() < needed {
        debug!("rejected {} points, need {}", points.len(), needed);
        return Err(DrawError::TooFewPoints { needed, got: points.len() });
    }
    Ok(())
}

fn check_width(width: i64, radius: i64) -> Result<()> {
    if width < 0 {
        debug!("rejected width {}", width);
        return Err(DrawError::NegativeWidth);
    }
    if width > radius {
        debug!("rejected width {} for radius {}", width, radius);
        return Err(DrawError::WidthExceedsRadius { width, radius });
    }
    Ok(())
}

fn check_rect(rect: &Rect, width: i64) -> Result<()> {
    if rect.w < 0 || rect.h < 0 {
        debug!("rejected {:?}", rect);
        return Err(DrawError::InvalidGeometry(format!("negative rect size {}x{}", rect.w, rect.h)));
    }
    check_width(width, rect.w.min(rect.h) / 2)
}

fn min_corner(points: &[(i64, i64)]) -> (i64, i64) {
    points.iter().fold((i64::max_value(), i64::max_value()), |(x, y), p| (x.min(p.0), y.min(p.1)))
}
