//! Clipped software rasterizer for in-memory pixel buffers
//!
//! # How does this work
//!
//! ```text
//!     surf = Surface( RenderingBuffer( data ), PixelFormat, clip )
//!     ren  = RendererPrimitives( surf )
//!   Drawing Operations
//!     line, aaline, lines, aalines, polygon, rect, circle, ellipse, arc
//!       validate arguments    -- DrawError, nothing touched
//!       surf.lock()           -- RenderingBase, BoundingBox empty
//!   Lines
//!     clip_and_draw_line_width()
//!       clip_and_draw_line()  -- once per parallel copy
//!         clip_line()         -- Cohen-Sutherland, integer
//!         hline() / vline() / draw_line()
//!     clip_and_draw_aaline()
//!       clip_aaline()         -- Cohen-Sutherland, float
//!       draw_aaline()         -- Wu, draw_pixel_32()
//!   Shapes
//!     draw_ellipse()          -- hline_clip() / set_at()
//!     draw_arc()              -- clip_and_draw_line()
//!     draw_fillpoly()         -- hline_clip()
//!   Result
//!     ren.finish()            -- BoundingBox => Rect
//! ```
//!
//! # Example
//!
//!     use pixdraw::{Surface, PixelFormat, RendererPrimitives, Rgba8, Rect};
//!
//!     let mut surf = Surface::new(100, 100, PixelFormat::Rgb24);
//!     surf.fill(Rgba8::white());
//!     surf.set_clip(Some(Rect::new(10, 10, 80, 80)));
//!
//!     let mut ren = RendererPrimitives::with_surface(&mut surf);
//!     let tri = [(0, 50), (50, 0), (99, 99)];
//!     let r = ren.polygon(Rgba8::rgb(0, 0, 255), &tri, 0).unwrap();
//!     assert!(r.x >= 10 && r.y >= 10 && r.right() <= 89 && r.bottom() <= 89);
//!
//!     assert_eq!(surf.get_at(5, 50), Some(Rgba8::white()));
//!     assert_eq!(surf.get_at(50, 50), Some(Rgba8::rgb(0, 0, 255)));
//!

pub mod error;
pub mod color;
pub mod pixfmt;
pub mod buffer;
pub mod surface;
pub mod base;
pub mod clip;
pub mod bounds;
pub mod math;
pub mod line;
pub mod stroke;
pub mod ellipse;
pub mod scan;
pub mod render;
pub mod ppm;

pub use error::DrawError;
pub use error::Result;
pub use color::*;
pub use pixfmt::*;
pub use buffer::*;
pub use surface::*;
pub use base::*;
pub use clip::*;
pub use bounds::*;
pub use line::*;
pub use stroke::*;
pub use ellipse::*;
pub use scan::*;
pub use render::*;
pub use ppm::*;

/// Access to raw pixel bytes
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}
