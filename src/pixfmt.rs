//! Pixel Format
//!
//! Packed pixel values are `u32` with channels located by a shift and a
//! bit count. Multi-byte pixels are stored little-endian in the buffer, so a
//! channel with shift `s` (a multiple of 8) lives at byte `s >> 3`.

use crate::color::Rgba8;
use crate::error::DrawError;
use crate::error::Result;

/// Location of a single channel inside a packed pixel value
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Channel {
    /// Position of the least significant bit
    pub shift: u32,
    /// Number of bits, 0 if the channel is absent
    pub bits: u32,
}

impl Channel {
    const fn new(shift: u32, bits: u32) -> Self {
        Self { shift, bits }
    }
    const NONE: Channel = Channel::new(0, 0);

    /// Bit mask of the channel inside a packed value
    pub fn mask(&self) -> u32 {
        if self.bits == 0 {
            0
        } else {
            ((1u32 << self.bits) - 1) << self.shift
        }
    }
    /// Place an 8-bit component, dropping low bits
    fn pack(&self, v: u8) -> u32 {
        if self.bits == 0 {
            return 0;
        }
        (u32::from(v) >> (8 - self.bits)) << self.shift
    }
    /// Extract an 8-bit component, replicating high bits into the low ones
    fn unpack(&self, p: u32) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let v = (p & self.mask()) >> self.shift;
        let mut out = v << (8 - self.bits);
        let mut filled = self.bits;
        while filled < 8 {
            out |= out >> filled;
            filled *= 2;
        }
        Some(out as u8)
    }
}

/// Pixel layouts understood by the rasterizer
///
/// The set is closed; every drawing routine dispatches on it once per call
/// rather than per pixel where it can.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PixelFormat {
    /// 1 byte, index into a [Palette](struct.Palette.html)
    Indexed8,
    /// 2 bytes, x1r5g5b5
    Rgb555,
    /// 2 bytes, r5g6b5
    Rgb565,
    /// 3 bytes, memory order r,g,b
    Rgb24,
    /// 3 bytes, memory order b,g,r
    Bgr24,
    /// 4 bytes, x8r8g8b8, alpha ignored
    Rgb32,
    /// 4 bytes, a8r8g8b8
    Argb32,
    /// 4 bytes, memory order r,g,b,a
    Rgba32,
}

impl Default for PixelFormat {
    fn default() -> PixelFormat {
        PixelFormat::Argb32
    }
}

impl PixelFormat {
    /// Default format for a depth in bytes per pixel
    ///
    ///     use pixdraw::PixelFormat;
    ///     assert_eq!(PixelFormat::from_bpp(3).unwrap(), PixelFormat::Rgb24);
    ///     assert!(PixelFormat::from_bpp(5).is_err());
    ///
    pub fn from_bpp(bpp: usize) -> Result<Self> {
        match bpp {
            1 => Ok(PixelFormat::Indexed8),
            2 => Ok(PixelFormat::Rgb565),
            3 => Ok(PixelFormat::Rgb24),
            4 => Ok(PixelFormat::Argb32),
            _ => Err(DrawError::UnsupportedDepth(bpp)),
        }
    }
    /// Number of bytes used by a single pixel
    pub fn bytes_per_pixel(&self) -> usize {
        use PixelFormat::*;
        match *self {
            Indexed8 => 1,
            Rgb555 | Rgb565 => 2,
            Rgb24 | Bgr24 => 3,
            Rgb32 | Argb32 | Rgba32 => 4,
        }
    }
    /// Channel layout as (red, green, blue, alpha)
    ///
    /// Indexed8 has no channels, its values go through a palette
    pub fn channels(&self) -> [Channel;4] {
        use PixelFormat::*;
        let c = Channel::new;
        match *self {
            Indexed8 => [Channel::NONE;4],
            Rgb555 => [c(10,5), c(5,5), c(0,5), Channel::NONE],
            Rgb565 => [c(11,5), c(5,6), c(0,5), Channel::NONE],
            Rgb24  => [c(0,8), c(8,8), c(16,8), Channel::NONE],
            Bgr24  => [c(16,8), c(8,8), c(0,8), Channel::NONE],
            Rgb32  => [c(16,8), c(8,8), c(0,8), Channel::NONE],
            Argb32 => [c(16,8), c(8,8), c(0,8), c(24,8)],
            Rgba32 => [c(0,8), c(8,8), c(16,8), c(24,8)],
        }
    }
    /// True when the format is palette based
    pub fn is_indexed(&self) -> bool {
        *self == PixelFormat::Indexed8
    }
    /// Pack a color into a pixel value of a truecolor format
    ///
    /// Components lose their low bits on narrow channels.  Indexed formats
    /// need a palette, see [Surface::map_rgba](struct.Surface.html#method.map_rgba)
    ///
    ///     use pixdraw::{PixelFormat, Rgba8};
    ///     let red = Rgba8::new(255, 0, 0, 128);
    ///     assert_eq!(PixelFormat::Argb32.pack(red), 0x80ff_0000);
    ///     assert_eq!(PixelFormat::Rgb565.pack(red), 0xf800);
    ///     assert_eq!(PixelFormat::Rgb24.pack(red),  0x0000_00ff);
    ///
    pub fn pack(&self, c: Rgba8) -> u32 {
        let [r,g,b,a] = self.channels();
        r.pack(c.r) | g.pack(c.g) | b.pack(c.b) | a.pack(c.a)
    }
    /// Unpack a pixel value of a truecolor format
    ///
    /// Formats without alpha report an opaque color
    ///
    ///     use pixdraw::{PixelFormat, Rgba8};
    ///     assert_eq!(PixelFormat::Rgb565.unpack(0xf800), Rgba8::new(255,0,0,255));
    ///     assert_eq!(PixelFormat::Rgb555.unpack(0x0010), Rgba8::new(0,0,132,255));
    ///
    pub fn unpack(&self, p: u32) -> Rgba8 {
        let [r,g,b,a] = self.channels();
        Rgba8::new(r.unpack(p).unwrap_or(0),
                   g.unpack(p).unwrap_or(0),
                   b.unpack(p).unwrap_or(0),
                   a.unpack(p).unwrap_or(255))
    }
    /// Read the packed value of the pixel at the start of `pix`
    pub fn read_pixel(&self, pix: &[u8]) -> u32 {
        match self.bytes_per_pixel() {
            1 => u32::from(pix[0]),
            2 => u32::from(u16::from_le_bytes([pix[0], pix[1]])),
            3 => u32::from(pix[0]) | u32::from(pix[1]) << 8 | u32::from(pix[2]) << 16,
            _ => u32::from_le_bytes([pix[0], pix[1], pix[2], pix[3]]),
        }
    }
    /// Write the packed value `p` to the pixel at the start of `pix`
    pub fn write_pixel(&self, pix: &mut [u8], p: u32) {
        let bytes = p.to_le_bytes();
        let n = self.bytes_per_pixel();
        pix[..n].copy_from_slice(&bytes[..n]);
    }
    /// Store the color components of a 3 byte pixel one byte at a time
    ///
    /// Each component goes to the byte addressed by its channel shift
    pub fn store_rgb(&self, pix: &mut [u8], c: Rgba8) {
        let [r,g,b,_] = self.channels();
        pix[(r.shift >> 3) as usize] = c.r;
        pix[(g.shift >> 3) as usize] = c.g;
        pix[(b.shift >> 3) as usize] = c.b;
    }
    /// Fill `row` with consecutive copies of the pixel value `p`
    pub fn fill_run(&self, row: &mut [u8], p: u32) {
        let n = self.bytes_per_pixel();
        let bytes = p.to_le_bytes();
        if n == 1 {
            for v in row.iter_mut() {
                *v = bytes[0];
            }
            return;
        }
        for pix in row.chunks_exact_mut(n) {
            pix.copy_from_slice(&bytes[..n]);
        }
    }
}
