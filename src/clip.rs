//! Clipping Region
//!
//! Cohen–Sutherland clipping of segments against an inclusive rectangle, in
//! integer and floating point flavors.

/// Caller visible rectangle, origin plus size
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rect {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width in pixels
    pub w: i64,
    /// Height in pixels
    pub h: i64,
}

impl Rect {
    /// Create a new Rect
    pub fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }
    /// Zero sized Rect at (`x`,`y`)
    pub fn empty_at(x: i64, y: i64) -> Self {
        Self::new(x, y, 0, 0)
    }
    /// Rightmost column inside the Rect
    pub fn right(&self) -> i64 {
        self.x + self.w - 1
    }
    /// Bottom row inside the Rect
    pub fn bottom(&self) -> i64 {
        self.y + self.h - 1
    }
    /// True if the pixel (`x`,`y`) lies inside
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
    /// Area shared by both Rects, zero sized if they do not overlap
    ///
    ///     use pixdraw::Rect;
    ///     let a = Rect::new(0, 0, 10, 10);
    ///     assert_eq!(a.intersect(&Rect::new(5, -5, 10, 10)), Rect::new(5, 0, 5, 5));
    ///     assert_eq!(a.intersect(&Rect::new(20, 20, 1, 1)).w, 0);
    ///
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.w).min(other.x + other.w);
        let y2 = (self.y + self.h).min(other.y + other.h);
        if x2 <= x1 || y2 <= y1 {
            return Rect::new(x1, y1, 0, 0);
        }
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
    /// Inclusive edges as used by the clipper
    pub fn edges(&self) -> Rectangle<i64> {
        Rectangle { x1: self.x, y1: self.y, x2: self.right(), y2: self.bottom() }
    }
}

/// Rectangle with inclusive edges
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Left edge
    pub x1: T,
    /// Top edge
    pub y1: T,
    /// Right edge
    pub x2: T,
    /// Bottom edge
    pub y2: T,
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Get location of point relative to rectangle
    ///
    /// Returned is an a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    pub fn clip_flags(&self, x: T, y: T) -> u8 {
        let mut code = INSIDE;
        if x < self.x1 { code |= LEFT; }
        if x > self.x2 { code |= RIGHT; }
        if y < self.y1 { code |= TOP; }
        if y > self.y2 { code |= BOTTOM; }
        code
    }
}

/// Inside Region
pub const INSIDE : u8 = 0b0000;
/// Left of Region
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region
pub const RIGHT  : u8 = 0b0000_0010;
/// Below Region, larger y
pub const BOTTOM : u8 = 0b0000_0100;
/// Above Region, smaller y
pub const TOP    : u8 = 0b0000_1000;

/// Line segment between two points
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Segment<T> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy> Segment<T> {
    /// Create a new Segment from (`x1`,`y1`) to (`x2`,`y2`)
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }
    /// Same segment moved by (`dx`,`dy`)
    pub fn offset(&self, dx: T, dy: T) -> Self where T: std::ops::Add<Output=T> {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }
}

/// Clip an integer segment to the inclusive rectangle `r`
///
/// Returns None if no part of the segment is inside.  Endpoints moved onto
/// an edge are truncated toward zero, the same way the slope offset is.
///
///     use pixdraw::{clip_line, Rectangle, Segment};
///     let r = Rectangle::new(0, 0, 9, 9);
///     let s = clip_line(Segment::new(-10, 5, 20, 5), &r).unwrap();
///     assert_eq!(s, Segment::new(9, 5, 0, 5));
///     assert!(clip_line(Segment::new(-10, -1, 20, -1), &r).is_none());
///
pub fn clip_line(seg: Segment<i64>, r: &Rectangle<i64>) -> Option<Segment<i64>> {
    let Segment { mut x1, mut y1, mut x2, mut y2 } = seg;
    loop {
        let mut code1 = r.clip_flags(x1, y1);
        let code2 = r.clip_flags(x2, y2);
        if code1 | code2 == INSIDE {
            return Some(Segment::new(x1, y1, x2, y2));
        }
        if code1 & code2 != INSIDE {
            return None;
        }
        if code1 == INSIDE {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
            code1 = code2;
        }
        let m = if x2 != x1 {
            (y2 - y1) as f64 / (x2 - x1) as f64
        } else {
            1.0
        };
        if code1 & LEFT != 0 {
            y1 += ((r.x1 - x1) as f64 * m) as i64;
            x1 = r.x1;
        } else if code1 & RIGHT != 0 {
            y1 += ((r.x2 - x1) as f64 * m) as i64;
            x1 = r.x2;
        } else if code1 & BOTTOM != 0 {
            if x2 != x1 {
                x1 += ((r.y2 - y1) as f64 / m) as i64;
            }
            y1 = r.y2;
        } else if code1 & TOP != 0 {
            if x2 != x1 {
                x1 += ((r.y1 - y1) as f64 / m) as i64;
            }
            y1 = r.y1;
        }
    }
}

/// Clip a floating point segment to the inclusive rectangle `r`
///
/// Identical to [clip_line](fn.clip_line.html) without any rounding
///
///     use pixdraw::{clip_aaline, Rectangle, Segment};
///     let r = Rectangle::new(0, 0, 9, 9);
///     let s = clip_aaline(Segment::new(-1.0, -1.0, 4.5, 4.5), &r).unwrap();
///     assert_eq!(s, Segment::new(0.0, 0.0, 4.5, 4.5));
///
pub fn clip_aaline(seg: Segment<f64>, r: &Rectangle<i64>) -> Option<Segment<f64>> {
    let (left, top, right, bottom) = (r.x1 as f64, r.y1 as f64, r.x2 as f64, r.y2 as f64);
    let edges = Rectangle { x1: left, y1: top, x2: right, y2: bottom };
    let Segment { mut x1, mut y1, mut x2, mut y2 } = seg;
    loop {
        let mut code1 = edges.clip_flags(x1, y1);
        let code2 = edges.clip_flags(x2, y2);
        if code1 | code2 == INSIDE {
            return Some(Segment::new(x1, y1, x2, y2));
        }
        if code1 & code2 != INSIDE {
            return None;
        }
        if code1 == INSIDE {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
            code1 = code2;
        }
        let vertical = x2 == x1;
        let m = if vertical { 1.0 } else { (y2 - y1) / (x2 - x1) };
        if code1 & LEFT != 0 {
            y1 += (left - x1) * m;
            x1 = left;
        } else if code1 & RIGHT != 0 {
            y1 += (right - x1) * m;
            x1 = right;
        } else if code1 & BOTTOM != 0 {
            if !vertical {
                x1 += (bottom - y1) / m;
            }
            y1 = bottom;
        } else if code1 & TOP != 0 {
            if !vertical {
                x1 += (top - y1) / m;
            }
            y1 = top;
        }
    }
}
