//! Scanline Polygon Fill

use crate::base::RenderingBase;
use crate::error::DrawError;
use crate::error::Result;

/// Fill the polygon through `points` with the pixel value `p`
///
/// Each row between the top and bottom vertex is crossed with every
/// non-horizontal edge.  Edges include their upper end and exclude their
/// lower one, except on the bottom row of the polygon.  Crossings are
/// sorted and filled in pairs.  Horizontal edges strictly between the top
/// and bottom rows are missed by the crossing test and are drawn
/// afterwards as runs.  A polygon with all vertices on one row is a single
/// run across its width.
///
/// Crossings are computed with integer division, truncated toward zero.
///
///     use pixdraw::{Surface, PixelFormat, draw_fillpoly};
///     let mut surf = Surface::new(20, 20, PixelFormat::Indexed8);
///     let mut ren = surf.lock();
///     draw_fillpoly(&mut ren, &[(0, 0), (10, 0), (5, 10)], 1).unwrap();
///     assert_eq!(ren.finish(0, 0), pixdraw::Rect::new(0, 0, 11, 11));
///
pub fn draw_fillpoly(ren: &mut RenderingBase, points: &[(i64, i64)], p: u32) -> Result<()> {
    if points.is_empty() {
        return Ok(());
    }
    let miny = points.iter().map(|v| v.1).min().unwrap_or(0);
    let maxy = points.iter().map(|v| v.1).max().unwrap_or(0);

    if miny == maxy {
        let minx = points.iter().map(|v| v.0).min().unwrap_or(0);
        let maxx = points.iter().map(|v| v.0).max().unwrap_or(0);
        ren.hline_clip(p, minx, miny, maxx);
        return Ok(());
    }

    let mut xs : Vec<i64> = Vec::new();
    xs.try_reserve_exact(points.len())
        .map_err(|_| DrawError::OutOfMemory("polygon crossings"))?;

    // Each edge paired with the vertex before it, the last closing to the first
    let edges = || {
        let prev = points.iter().cycle().skip(points.len() - 1);
        prev.zip(points.iter())
    };

    for y in miny ..= maxy {
        xs.clear();
        for (&(x1, y1), &(x2, y2)) in edges() {
            let ((x1, y1), (x2, y2)) = if y1 < y2 {
                ((x1, y1), (x2, y2))
            } else if y1 > y2 {
                ((x2, y2), (x1, y1))
            } else {
                continue;
            };
            if (y >= y1 && y < y2) || (y == maxy && y2 == maxy) {
                xs.push((y - y1) * (x2 - x1) / (y2 - y1) + x1);
            }
        }
        xs.sort_unstable();
        for pair in xs.chunks_exact(2) {
            ren.hline_clip(p, pair[0], y, pair[1]);
        }
    }

    for (&(px, py), &(x, y)) in edges() {
        if miny < y && y < maxy && py == y {
            ren.hline_clip(p, x, y, px);
        }
    }
    Ok(())
}
