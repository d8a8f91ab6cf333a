//! Rendering Base
//!
//! Exclusive access to a [Surface] for one drawing operation.  Every write
//! made through it grows a [BoundingBox], which the operation reports back
//! to the caller when it finishes.
//!
//! [Surface]: ../surface/struct.Surface.html
//! [BoundingBox]: ../bounds/struct.BoundingBox.html

use log::trace;

use crate::bounds::BoundingBox;
use crate::clip::Rect;
use crate::clip::Rectangle;
use crate::color::Rgba8;
use crate::surface::Surface;

/// Locked surface plus the extent of pixels written so far
#[derive(Debug)]
pub struct RenderingBase<'a> {
    surf: &'a mut Surface,
    bbox: BoundingBox,
}

impl<'a> RenderingBase<'a> {
    pub(crate) fn new(surf: &'a mut Surface) -> Self {
        trace!("lock surface {}x{}", surf.width(), surf.height());
        Self { surf, bbox: BoundingBox::new() }
    }
    /// Inclusive edges of the clip rectangle
    pub fn limits(&self) -> Rectangle<i64> {
        self.surf.clip().edges()
    }
    /// Pixels written so far
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }
    /// Pixel value of `c` for the locked surface
    pub fn map_rgba(&self, c: Rgba8) -> u32 {
        self.surf.map_rgba(c)
    }
    /// End the operation, returning the extent of written pixels
    ///
    /// If nothing was written the result is a zero sized rect at (`x`,`y`)
    pub fn finish(self, x: i64, y: i64) -> Rect {
        self.bbox.to_rect(x, y)
    }

    /// Write the pixel value `p` at (`x`,`y`) if it lies in the clip rect
    ///
    /// Returns true if the pixel was written.  Three byte pixels are stored
    /// one component at a time, at the bytes given by the channel layout.
    pub fn set_at(&mut self, x: i64, y: i64, p: u32) -> bool {
        if !self.surf.clip().contains(x, y) {
            return false;
        }
        let format = self.surf.format();
        let c = self.surf.unmap(p);
        let pix = &mut self.surf.rbuf_mut()[(x as usize, y as usize)];
        if format.bytes_per_pixel() == 3 {
            format.store_rgb(pix, c);
        } else {
            format.write_pixel(pix, p);
        }
        self.bbox.add(x, y);
        true
    }

    /// Write the pixel value `p` at (`x`,`y`) without a clip check
    ///
    /// Callers must have clipped the coordinates already
    pub(crate) fn put(&mut self, x: i64, y: i64, p: u32) {
        debug_assert!(self.surf.clip().contains(x, y), "put ({},{}) outside {:?}", x, y, self.surf.clip());
        let format = self.surf.format();
        format.write_pixel(&mut self.surf.rbuf_mut()[(x as usize, y as usize)], p);
        self.bbox.add(x, y);
    }

    /// Mix `c` into the pixel at (`x`,`y`) with coverage `br` in [0,1]
    ///
    /// Each component becomes `br * c + (1 - br) * dst`.  Locations outside
    /// of the clip rect and zero coverage are ignored.
    pub fn blend_at(&mut self, x: i64, y: i64, c: Rgba8, br: f64) {
        if br <= 0.0 || !self.surf.clip().contains(x, y) {
            return;
        }
        let format = self.surf.format();
        let dst = self.surf.unmap(format.read_pixel(&self.surf.rbuf()[(x as usize, y as usize)]));
        let p = self.surf.map_rgba(c.blend_over(dst, br));
        format.write_pixel(&mut self.surf.rbuf_mut()[(x as usize, y as usize)], p);
        self.bbox.add(x, y);
    }

    /// Draw `c` at (`x`,`y`) with coverage `br` in [0,1]
    ///
    /// With `blend` the destination is mixed through
    /// [blend_at](#method.blend_at).  Without it `br * c` is written
    /// directly and the destination is never read.  Zero coverage leaves
    /// the pixel alone.
    pub fn draw_pixel_32(&mut self, x: i64, y: i64, c: Rgba8, br: f64, blend: bool) {
        if blend {
            self.blend_at(x, y, c, br);
            return;
        }
        if br <= 0.0 || !self.surf.clip().contains(x, y) {
            return;
        }
        let format = self.surf.format();
        let p = self.surf.map_rgba(c.scale(br));
        format.write_pixel(&mut self.surf.rbuf_mut()[(x as usize, y as usize)], p);
        self.bbox.add(x, y);
    }

    /// Solid run from (`x1`,`y`) to (`x2`,`y`) inclusive
    ///
    /// The run must already lie in the clip rect; single pixel runs go
    /// through [set_at](#method.set_at)
    pub fn hline(&mut self, p: u32, x1: i64, y: i64, x2: i64) {
        if x1 == x2 {
            self.set_at(x1, y, p);
            return;
        }
        let (x1, x2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        debug_assert!(self.surf.clip().contains(x1, y) && self.surf.clip().contains(x2, y));
        let format = self.surf.format();
        let bpp = format.bytes_per_pixel();
        let row = self.surf.rbuf_mut().row_mut(y as usize);
        format.fill_run(&mut row[x1 as usize * bpp .. (x2 as usize + 1) * bpp], p);
        self.bbox.add(x1, y);
        self.bbox.add(x2, y);
    }

    /// Solid run from (`x`,`y1`) to (`x`,`y2`) inclusive
    ///
    /// The run must already lie in the clip rect
    pub fn vline(&mut self, p: u32, x: i64, y1: i64, y2: i64) {
        if y1 == y2 {
            self.set_at(x, y1, p);
            return;
        }
        let (y1, y2) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        debug_assert!(self.surf.clip().contains(x, y1) && self.surf.clip().contains(x, y2));
        let format = self.surf.format();
        let rbuf = self.surf.rbuf_mut();
        let mut i = rbuf.offset(x as usize, y1 as usize);
        for _ in y1 ..= y2 {
            format.write_pixel(&mut rbuf.data[i..], p);
            i += rbuf.pitch;
        }
        self.bbox.add(x, y1);
        self.bbox.add(x, y2);
    }

    /// Horizontal run clamped to the clip rect
    pub fn hline_clip(&mut self, p: u32, x1: i64, y: i64, x2: i64) {
        let clip = self.surf.clip();
        if y < clip.y || y >= clip.y + clip.h {
            return;
        }
        let (x1, x2) = if x2 < x1 { (x2, x1) } else { (x1, x2) };
        let x1 = x1.max(clip.x);
        let x2 = x2.min(clip.x + clip.w - 1);
        if x2 < clip.x || x1 >= clip.x + clip.w {
            return;
        }
        self.hline(p, x1, y, x2);
    }

    /// Vertical run clamped to the clip rect
    pub fn vline_clip(&mut self, p: u32, x: i64, y1: i64, y2: i64) {
        let clip = self.surf.clip();
        if x < clip.x || x >= clip.x + clip.w {
            return;
        }
        let (y1, y2) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
        let y1 = y1.max(clip.y);
        let y2 = y2.min(clip.y + clip.h - 1);
        if y2 < clip.y || y1 >= clip.y + clip.h {
            return;
        }
        self.vline(p, x, y1, y2);
    }
}

impl Drop for RenderingBase<'_> {
    fn drop(&mut self) {
        trace!("unlock surface, touched {:?}", self.bbox);
    }
}

#[cfg(test)]
mod tests {
    use crate::{PixelFormat, Rect, Rgba8, Surface};

    #[test]
    fn set_at_respects_clip() {
        let mut s = Surface::new(8, 8, PixelFormat::Rgb24);
        s.set_clip(Some(Rect::new(2, 2, 4, 4)));
        let white = Rgba8::white();
        let p = s.map_rgba(white);
        let r = {
            let mut ren = s.lock();
            assert!(!ren.set_at(1, 3, p));
            assert!(!ren.set_at(6, 3, p));
            assert!(ren.set_at(5, 5, p));
            assert!(ren.set_at(2, 2, p));
            ren.finish(0, 0)
        };
        assert_eq!(r, Rect::new(2, 2, 4, 4));
        assert_eq!(s.get_at(5, 5), Some(white));
        assert_eq!(s.get_at(1, 3), Some(Rgba8::black()));
    }

    #[test]
    fn clipped_runs() {
        let mut s = Surface::new(10, 10, PixelFormat::Rgb565);
        s.set_clip(Some(Rect::new(2, 0, 5, 10)));
        let red = Rgba8::rgb(255, 0, 0);
        let p = s.map_rgba(red);
        let r = {
            let mut ren = s.lock();
            ren.hline_clip(p, 9, 1, -3);
            ren.vline_clip(p, 8, 0, 9);
            ren.hline_clip(p, 7, 3, 9);
            ren.hline_clip(p, 0, 11, 9);
            ren.finish(0, 0)
        };
        assert_eq!(r, Rect::new(2, 1, 5, 1));
        for x in 0 .. 10 {
            let want = if x >= 2 && x <= 6 { red } else { Rgba8::black() };
            assert_eq!(s.get_at(x, 1), Some(want), "x {}", x);
        }
        assert_eq!(s.get_at(8, 5), Some(Rgba8::black()));
    }

    #[test]
    fn vertical_run_every_depth() {
        for f in [PixelFormat::Indexed8, PixelFormat::Rgb555, PixelFormat::Bgr24, PixelFormat::Rgba32].iter() {
            let mut s = Surface::from_vec(vec![0; 13 * 6], 3, 6, *f, 13).unwrap();
            let c = Rgba8::white();
            let p = s.map_rgba(c);
            s.lock().vline(p, 1, 4, 1);
            for y in 0 .. 6 {
                let want = if y >= 1 && y <= 4 { c } else { s.unmap(0) };
                assert_eq!(s.get_at(1, y), Some(want), "{:?} y {}", f, y);
                assert_eq!(s.get_at(0, y), Some(s.unmap(0)));
            }
        }
    }

    #[test]
    fn blended_pixel() {
        let mut s = Surface::new(2, 1, PixelFormat::Rgba32);
        s.fill(Rgba8::new(0, 0, 0, 255));
        let c = Rgba8::new(255, 255, 255, 255);
        {
            let mut ren = s.lock();
            ren.draw_pixel_32(0, 0, c, 0.5, true);
            ren.draw_pixel_32(1, 0, c, 0.5, false);
            ren.draw_pixel_32(2, 0, c, 0.5, false);
        }
        assert_eq!(s.get_at(0, 0), Some(Rgba8::new(127, 127, 127, 255)));
        assert_eq!(s.get_at(1, 0), Some(Rgba8::new(127, 127, 127, 127)));
    }

    #[test]
    fn zero_coverage_untouched() {
        let mut s = Surface::new(2, 1, PixelFormat::Rgba32);
        s.fill(Rgba8::new(9, 9, 9, 9));
        let r = {
            let mut ren = s.lock();
            ren.draw_pixel_32(0, 0, Rgba8::white(), 0.0, true);
            ren.draw_pixel_32(1, 0, Rgba8::white(), 0.0, false);
            ren.finish(5, 5)
        };
        assert_eq!(r, Rect::new(5, 5, 0, 0));
        assert_eq!(s.get_at(0, 0), Some(Rgba8::new(9, 9, 9, 9)));
        assert_eq!(s.get_at(1, 0), Some(Rgba8::new(9, 9, 9, 9)));
    }
}
