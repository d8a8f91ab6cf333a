//! Drawing surface

use log::debug;

use crate::base::RenderingBase;
use crate::buffer::RenderingBuffer;
use crate::clip::Rect;
use crate::color::Palette;
use crate::color::Rgba8;
use crate::error::Result;
use crate::pixfmt::PixelFormat;
use crate::PixelData;

/// Pixel grid in a fixed [PixelFormat] with an active clip rectangle
///
/// All drawing goes through [lock](#method.lock), which hands out a
/// [RenderingBase] with exclusive access for the length of one operation.
///
/// [PixelFormat]: enum.PixelFormat.html
/// [RenderingBase]: struct.RenderingBase.html
#[derive(Debug,Clone)]
pub struct Surface {
    rbuf: RenderingBuffer,
    format: PixelFormat,
    palette: Palette,
    clip: Rect,
}

impl Surface {
    /// Create a zeroed surface of `width` x `height`
    ///
    ///     use pixdraw::{Surface, PixelFormat, Rgba8};
    ///     let s = Surface::new(4, 3, PixelFormat::Rgb24);
    ///     assert_eq!(s.pitch(), 12);
    ///     assert_eq!(s.get_at(3, 2), Some(Rgba8::black()));
    ///     assert_eq!(s.get_at(4, 2), None);
    ///
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        let rbuf = RenderingBuffer::new(width, height, format.bytes_per_pixel());
        Self::with_buffer(rbuf, format)
    }
    /// Create a zeroed surface from a depth in bytes per pixel
    ///
    /// Depths outside of 1..=4 are rejected
    pub fn with_depth(width: usize, height: usize, bpp: usize) -> Result<Self> {
        let format = PixelFormat::from_bpp(bpp)?;
        Ok(Self::new(width, height, format))
    }
    /// Wrap existing pixel data with rows `pitch` bytes apart
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize,
                    format: PixelFormat, pitch: usize) -> Result<Self> {
        let rbuf = RenderingBuffer::from_vec(data, width, height,
                                             format.bytes_per_pixel(), pitch)?;
        Ok(Self::with_buffer(rbuf, format))
    }
    fn with_buffer(rbuf: RenderingBuffer, format: PixelFormat) -> Self {
        let clip = Rect::new(0, 0, rbuf.width as i64, rbuf.height as i64);
        debug!("surface {}x{} {:?} pitch {}", rbuf.width, rbuf.height, format, rbuf.pitch);
        Self { rbuf, format, palette: Palette::default(), clip }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Bytes between the start of consecutive rows
    pub fn pitch(&self) -> usize {
        self.rbuf.pitch
    }
    /// Pixel layout
    pub fn format(&self) -> PixelFormat {
        self.format
    }
    /// Underlying storage
    pub fn rbuf(&self) -> &RenderingBuffer {
        &self.rbuf
    }
    pub(crate) fn rbuf_mut(&mut self) -> &mut RenderingBuffer {
        &mut self.rbuf
    }
    /// Color table used by Indexed8 surfaces
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    /// Replace the color table
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
    /// Full extent of the surface
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.rbuf.width as i64, self.rbuf.height as i64)
    }
    /// Active clip rectangle
    pub fn clip(&self) -> Rect {
        self.clip
    }
    /// Restrict drawing to `clip`, or the whole surface for `None`
    ///
    /// The rectangle is reduced to the surface bounds
    ///
    ///     use pixdraw::{Surface, PixelFormat, Rect};
    ///     let mut s = Surface::new(10, 10, PixelFormat::Rgb24);
    ///     s.set_clip(Some(Rect::new(-5, 2, 10, 100)));
    ///     assert_eq!(s.clip(), Rect::new(0, 2, 5, 8));
    ///     s.set_clip(None);
    ///     assert_eq!(s.clip(), Rect::new(0, 0, 10, 10));
    ///
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        let bounds = self.bounds();
        self.clip = match clip {
            Some(r) => bounds.intersect(&r),
            None => bounds,
        };
        debug!("surface clip {:?}", self.clip);
    }
    /// Pixel value of `c` in this surface's format
    ///
    /// Indexed surfaces use the closest palette entry
    pub fn map_rgba(&self, c: Rgba8) -> u32 {
        if self.format.is_indexed() {
            u32::from(self.palette.nearest(c))
        } else {
            self.format.pack(c)
        }
    }
    /// Color of the pixel value `p`
    pub fn unmap(&self, p: u32) -> Rgba8 {
        if self.format.is_indexed() {
            self.palette.get(p as u8)
        } else {
            self.format.unpack(p)
        }
    }
    /// Raw pixel value at (`x`,`y`), None outside of the surface
    pub fn pixel(&self, x: i64, y: i64) -> Option<u32> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(self.format.read_pixel(&self.rbuf[(x as usize, y as usize)]))
    }
    /// Color at (`x`,`y`), None outside of the surface
    pub fn get_at(&self, x: i64, y: i64) -> Option<Rgba8> {
        self.pixel(x, y).map(|p| self.unmap(p))
    }
    /// Store the raw value `p` at (`x`,`y`) ignoring the clip rectangle
    ///
    /// Locations outside of the surface are ignored
    pub fn set_pixel(&mut self, x: i64, y: i64, p: u32) {
        if !self.bounds().contains(x, y) {
            return;
        }
        let format = self.format;
        format.write_pixel(&mut self.rbuf[(x as usize, y as usize)], p);
    }
    /// Set every pixel, ignoring the clip rectangle
    pub fn fill(&mut self, c: Rgba8) {
        let p = self.map_rgba(c);
        let format = self.format;
        for y in 0 .. self.rbuf.height {
            format.fill_run(self.rbuf.row_mut(y), p);
        }
    }
    /// Take exclusive access for a drawing operation
    ///
    /// Access ends when the returned value is dropped
    pub fn lock(&mut self) -> RenderingBase<'_> {
        RenderingBase::new(self)
    }
}

impl PixelData for Surface {
    fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
}
