extern crate pixdraw;

use pixdraw::DrawError;
use pixdraw::PixelData;
use pixdraw::{img_diff, read_surface, write_file};
use pixdraw::{Palette, PixelFormat, Rect, RendererPrimitives, Rgba8, Surface};

#[test]
fn depths() {
    for &(bpp, f) in [(1, PixelFormat::Indexed8), (2, PixelFormat::Rgb565),
                      (3, PixelFormat::Rgb24), (4, PixelFormat::Argb32)].iter() {
        let s = Surface::with_depth(5, 4, bpp).unwrap();
        assert_eq!(s.format(), f);
        assert_eq!(s.pitch(), 5 * bpp);
    }
    match Surface::with_depth(5, 4, 5) {
        Err(DrawError::UnsupportedDepth(5)) => {},
        v => panic!("expected UnsupportedDepth, got {:?}", v),
    }
    match Surface::with_depth(5, 4, 0) {
        Err(DrawError::UnsupportedDepth(0)) => {},
        v => panic!("expected UnsupportedDepth, got {:?}", v),
    }
}

#[test]
fn wrapped_buffers() {
    match Surface::from_vec(vec![0; 64], 4, 4, PixelFormat::Rgb24, 10) {
        Err(DrawError::InvalidPitch { pitch: 10, min: 12 }) => {},
        v => panic!("expected InvalidPitch, got {:?}", v),
    }
    match Surface::from_vec(vec![0; 40], 4, 4, PixelFormat::Rgb24, 12) {
        Err(DrawError::BufferTooSmall { len: 40, needed: 48 }) => {},
        v => panic!("expected BufferTooSmall, got {:?}", v),
    }
}

#[test]
fn row_padding_untouched() {
    let mut s = Surface::from_vec(vec![0; 16 * 3], 4, 3, PixelFormat::Rgb24, 16).unwrap();
    let r = RendererPrimitives::with_surface(&mut s).line(Rgba8::white(), (-3, 1), (9, 1), 1).unwrap();
    assert_eq!(r, Rect::new(0, 1, 4, 1));
    let data = s.pixeldata();
    assert!(data[16 .. 28].iter().all(|&v| v == 255));
    assert!(data[28 .. 32].iter().all(|&v| v == 0));
    assert!(data[.. 16].iter().all(|&v| v == 0));
}

#[test]
fn byte_order() {
    let blue = Rgba8::rgb(0, 0, 255);
    let mut s = Surface::new(2, 1, PixelFormat::Bgr24);
    RendererPrimitives::with_surface(&mut s).line(blue, (0, 0), (0, 0), 1).unwrap();
    assert_eq!(&s.pixeldata()[.. 3], &[255, 0, 0]);
    assert_eq!(s.get_at(0, 0), Some(blue));

    let red = Rgba8::new(255, 0, 0, 255);
    let mut s = Surface::new(2, 1, PixelFormat::Rgba32);
    RendererPrimitives::with_surface(&mut s).line(red, (1, 0), (1, 0), 1).unwrap();
    assert_eq!(&s.pixeldata()[4 ..], &[255, 0, 0, 255]);

    let mut s = Surface::new(2, 1, PixelFormat::Argb32);
    RendererPrimitives::with_surface(&mut s).line(red, (1, 0), (1, 0), 1).unwrap();
    assert_eq!(&s.pixeldata()[4 ..], &[0, 0, 255, 255]);
}

#[test]
fn narrow_channels() {
    let mut s = Surface::new(4, 1, PixelFormat::Rgb565);
    RendererPrimitives::with_surface(&mut s).line(Rgba8::white(), (0, 0), (3, 0), 1).unwrap();
    assert_eq!(s.pixel(2, 0), Some(0xffff));
    assert_eq!(s.get_at(2, 0), Some(Rgba8::white()));

    let mut s = Surface::new(4, 1, PixelFormat::Rgb555);
    RendererPrimitives::with_surface(&mut s).line(Rgba8::white(), (0, 0), (3, 0), 1).unwrap();
    assert_eq!(s.pixel(2, 0), Some(0x7fff));
}

#[test]
fn indexed_palette() {
    let red = Rgba8::rgb(255, 0, 0);
    let mut s = Surface::new(4, 4, PixelFormat::Indexed8);
    s.set_palette(Palette::new(&[Rgba8::black(), Rgba8::rgb(0, 255, 0), red]));
    assert_eq!(s.palette().get(2), red);
    assert_eq!(s.map_rgba(Rgba8::rgb(200, 10, 10)), 2);
    RendererPrimitives::with_surface(&mut s).line(red, (0, 2), (3, 2), 1).unwrap();
    assert_eq!(s.pixel(1, 2), Some(2));
    assert_eq!(s.get_at(1, 2), Some(red));
    assert_eq!(s.pixel(1, 1), Some(0));
}

#[test]
fn clip_is_limited_to_surface() {
    let mut s = Surface::new(8, 6, PixelFormat::Rgb24);
    assert_eq!(s.clip(), Rect::new(0, 0, 8, 6));
    s.set_clip(Some(Rect::new(-5, -5, 10, 10)));
    assert_eq!(s.clip(), Rect::new(0, 0, 5, 5));
    s.set_clip(None);
    assert_eq!(s.clip(), s.bounds());
}

#[test]
fn png_round_trip() {
    let dir = std::env::temp_dir();
    let a = dir.join(format!("pixdraw-{}-a.png", std::process::id()));
    let b = dir.join(format!("pixdraw-{}-b.png", std::process::id()));

    let mut s = Surface::new(24, 16, PixelFormat::Argb32);
    s.fill(Rgba8::white());
    RendererPrimitives::with_surface(&mut s)
        .circle(Rgba8::rgb(255, 0, 0), (12, 8), 6, 0).unwrap();
    write_file(&s, &a).unwrap();

    let t = read_surface(&a).unwrap();
    assert_eq!((t.width(), t.height()), (24, 16));
    assert_eq!(t.format(), PixelFormat::Rgb24);
    for y in 0 .. 16 {
        for x in 0 .. 24 {
            assert_eq!(s.get_at(x, y), t.get_at(x, y), "({},{})", x, y);
        }
    }
    write_file(&t, &b).unwrap();
    assert!(img_diff(&a, &b).unwrap());

    RendererPrimitives::with_surface(&mut s)
        .line(Rgba8::black(), (0, 0), (23, 0), 1).unwrap();
    write_file(&s, &b).unwrap();
    assert!(!img_diff(&a, &b).unwrap());

    let _ = std::fs::remove_file(&a);
    let _ = std::fs::remove_file(&b);
}

#[test]
fn missing_file() {
    let p = std::env::temp_dir().join("pixdraw-does-not-exist.png");
    assert!(read_surface(&p).is_err());
}
