//! Reading and writing of image files
//!
//! Surfaces are written as 8 bit RGB, whatever their pixel format, so the
//! output of different formats can be compared directly.  The file type
//! follows the extension, see [image::save_buffer].
//!
//! [image::save_buffer]: https://docs.rs/image/0.20.1/image/fn.save_buffer.html

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::pixfmt::PixelFormat;
use crate::surface::Surface;

/// Surface contents as tightly packed RGB bytes
pub fn to_rgb(surf: &Surface) -> Vec<u8> {
    let (w, h) = (surf.width() as i64, surf.height() as i64);
    let mut buf = Vec::with_capacity((w * h * 3) as usize);
    for y in 0 .. h {
        for x in 0 .. w {
            if let Some(c) = surf.get_at(x, y) {
                buf.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
    }
    buf
}

/// Read an image file as RGB bytes, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Load an image file into an Rgb24 surface
pub fn read_surface<P: AsRef<Path>>(filename: P) -> Result<Surface> {
    let (buf, w, h) = read_file(filename)?;
    Surface::from_vec(buf, w, h, PixelFormat::Rgb24, w * 3)
}

/// Write the surface to `filename`
pub fn write_file<P: AsRef<Path>>(surf: &Surface, filename: P) -> Result<()> {
    let buf = to_rgb(surf);
    image::save_buffer(filename, &buf, surf.width() as u32, surf.height() as u32, image::RGB(8))?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Returns false if the sizes or any component differ
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("image sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1, (i/3)/w1, i%3, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
