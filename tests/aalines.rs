extern crate pixdraw;

use pixdraw::{BoundingBox, PixelFormat, Rect, RendererPrimitives, Rgba8, Surface};

/// Smallest rect holding every pixel that differs between two surfaces
fn changed(a: &Surface, b: &Surface) -> Option<Rect> {
    let mut bbox = BoundingBox::new();
    for y in 0 .. a.height() as i64 {
        for x in 0 .. a.width() as i64 {
            if a.pixel(x, y) != b.pixel(x, y) {
                bbox.add(x, y);
            }
        }
    }
    if bbox.is_empty() { None } else { Some(bbox.to_rect(0, 0)) }
}

#[test]
fn half_coverage_between_rows() {
    let mut s = Surface::new(12, 12, PixelFormat::Rgb24);
    let r = RendererPrimitives::with_surface(&mut s)
        .aaline(Rgba8::white(), (1.0, 5.5), (9.0, 5.5))
        .unwrap();
    assert_eq!(r, Rect::new(1, 5, 9, 2));
    for x in 1 ..= 9 {
        assert_eq!(s.get_at(x, 5), Some(Rgba8::rgb(127, 127, 127)), "x {}", x);
        assert_eq!(s.get_at(x, 6), Some(Rgba8::rgb(127, 127, 127)), "x {}", x);
    }
    assert_eq!(s.get_at(0, 5), Some(Rgba8::black()));
    assert_eq!(s.get_at(10, 5), Some(Rgba8::black()));
}

#[test]
fn blend_mixes_with_destination() {
    let blue = Rgba8::new(0, 0, 255, 255);
    let red = Rgba8::new(255, 0, 0, 255);

    let mut a = Surface::new(12, 12, PixelFormat::Rgba32);
    a.fill(blue);
    RendererPrimitives::with_surface(&mut a)
        .aaline(red, (1.0, 5.5), (9.0, 5.5))
        .unwrap();
    assert_eq!(a.get_at(4, 5), Some(Rgba8::new(127, 0, 127, 255)));

    let mut b = Surface::new(12, 12, PixelFormat::Rgba32);
    b.fill(blue);
    RendererPrimitives::with_surface(&mut b)
        .blend(false)
        .aaline(red, (1.0, 5.5), (9.0, 5.5))
        .unwrap();
    assert_eq!(b.get_at(4, 5), Some(Rgba8::new(127, 0, 0, 127)));
    assert_eq!(b.get_at(4, 4), Some(blue));
}

#[test]
fn opaque_when_blending_is_off() {
    let mut s = Surface::new(8, 8, PixelFormat::Argb32);
    RendererPrimitives::with_surface(&mut s)
        .blend(false)
        .aaline(Rgba8::new(200, 100, 50, 10), (1.0, 3.0), (6.0, 3.0))
        .unwrap();
    assert_eq!(s.get_at(3, 3), Some(Rgba8::new(200, 100, 50, 255)));
}

#[test]
fn single_point() {
    let mut s = Surface::new(8, 8, PixelFormat::Rgb565);
    let r = RendererPrimitives::with_surface(&mut s)
        .aaline(Rgba8::white(), (4.9, 2.2), (4.9, 2.2))
        .unwrap();
    assert_eq!(r, Rect::new(4, 2, 1, 1));
    assert_eq!(s.get_at(4, 2), Some(Rgba8::white()));
}

#[test]
fn outside_is_empty_at_truncated_start() {
    let mut s = Surface::new(8, 8, PixelFormat::Rgb24);
    let r = RendererPrimitives::with_surface(&mut s)
        .aaline(Rgba8::white(), (-3.7, 2.0), (-1.5, 6.0))
        .unwrap();
    assert_eq!(r, Rect::new(-3, 2, 0, 0));
}

#[test]
fn steep_line_stays_in_clip() {
    let mut s = Surface::new(20, 20, PixelFormat::Rgb24);
    let clip = Rect::new(4, 4, 8, 8);
    s.set_clip(Some(clip));
    let r = RendererPrimitives::with_surface(&mut s)
        .aaline(Rgba8::white(), (6.3, -10.0), (9.7, 30.0))
        .unwrap();
    assert!(r.w > 0 && r.h > 0);
    assert!(r.x >= clip.x && r.y >= clip.y && r.right() <= clip.right() && r.bottom() <= clip.bottom(), "{:?}", r);
    for y in 0 .. 20 {
        for x in 0 .. 20 {
            if !clip.contains(x, y) {
                assert_eq!(s.get_at(x, y), Some(Rgba8::black()), "({},{})", x, y);
            }
        }
    }
}

#[test]
fn aalines_closed() {
    let pts = [(2.0, 2.0), (12.0, 2.0), (12.0, 12.0)];
    let mut open = Surface::new(16, 16, PixelFormat::Rgb24);
    let mut closed = Surface::new(16, 16, PixelFormat::Rgb24);
    let r1 = RendererPrimitives::with_surface(&mut open).aalines(Rgba8::white(), false, &pts).unwrap();
    let r2 = RendererPrimitives::with_surface(&mut closed).aalines(Rgba8::white(), true, &pts).unwrap();
    assert_eq!(open.get_at(7, 7), Some(Rgba8::black()));
    assert_ne!(closed.get_at(7, 7), Some(Rgba8::black()));
    assert!(r1.x <= 2 && r1.y <= 2 && r1.right() >= 12 && r1.bottom() >= 12);
    assert!(r2.x <= 2 && r2.y <= 2 && r2.right() >= 12 && r2.bottom() >= 12);
    assert!(RendererPrimitives::with_surface(&mut open).aalines(Rgba8::white(), false, &pts[..1]).is_err());
}

#[test]
fn returned_rect_is_tight() {
    let segs = [((1.0, 3.0), (8.0, 3.0)), ((4.0, 1.0), (4.0, 9.0)),
                ((1.0, 1.0), (8.0, 8.0)), ((1.0, 5.5), (9.0, 5.5))];
    for &blend in [true, false].iter() {
        for &(a, b) in segs.iter() {
            let mut s = Surface::new(12, 12, PixelFormat::Rgb24);
            let before = s.clone();
            let r = RendererPrimitives::with_surface(&mut s)
                .blend(blend)
                .aaline(Rgba8::white(), a, b)
                .unwrap();
            assert_eq!(Some(r), changed(&before, &s), "{:?} {:?} blend {}", a, b, blend);
        }
    }
}

#[test]
fn exact_row_leaves_next_row() {
    let mut s = Surface::new(12, 12, PixelFormat::Rgb24);
    let r = RendererPrimitives::with_surface(&mut s)
        .aaline(Rgba8::white(), (1.0, 3.0), (8.0, 3.0))
        .unwrap();
    assert_eq!(r, Rect::new(1, 3, 8, 1));
    for x in 0 .. 12 {
        assert_eq!(s.get_at(x, 4), Some(Rgba8::black()));
    }
}
