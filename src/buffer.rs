//! Rendering buffer

use crate::error::DrawError;
use crate::error::Result;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format).  Rows are `pitch` bytes
/// apart, which may be more than `width * bpp` for alignment.
#[derive(Debug,Default,Clone)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel
    pub bpp: usize,
    /// Bytes from the start of one row to the next
    pub pitch: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and zeroed, rows are tightly packed
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        let pitch = width * bpp;
        RenderingBuffer {
            width, height, bpp, pitch, data: vec![0u8; pitch * height]
        }
    }
    /// Wrap existing pixel storage
    ///
    ///     use pixdraw::RenderingBuffer;
    ///     let buf = RenderingBuffer::from_vec(vec![0; 16*4], 3, 4, 4, 16).unwrap();
    ///     assert_eq!(buf.offset(2, 1), 16 + 8);
    ///     assert!(RenderingBuffer::from_vec(vec![0; 10], 3, 4, 4, 16).is_err());
    ///     assert!(RenderingBuffer::from_vec(vec![0; 64], 5, 4, 4, 16).is_err());
    ///
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, bpp: usize, pitch: usize) -> Result<Self> {
        let min = width * bpp;
        if pitch < min {
            return Err(DrawError::InvalidPitch { pitch, min });
        }
        let needed = pitch * height;
        if data.len() < needed {
            return Err(DrawError::BufferTooSmall { len: data.len(), needed });
        }
        Ok(RenderingBuffer { data, width, height, bpp, pitch })
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True if the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
    /// Byte offset of pixel (`x`,`y`)
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.pitch + x * self.bpp
    }
    /// Pixels of row `i`, without the padding at the end
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let row = i * self.pitch;
        &self.data[row .. row + self.width * self.bpp]
    }
    /// Mutable pixels of row `i`, without the padding at the end
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        debug_assert!(i < self.height);
        let row = i * self.pitch;
        let n = self.width * self.bpp;
        &mut self.data[row .. row + n]
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &mut self.data[i .. i + self.bpp]
    }
}
