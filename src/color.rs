//! Colors

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Create new opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
    /// Same color with alpha replaced
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
    /// Build a color from an array in r,g,b,a order
    pub fn from_array(v: [u8;4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
    /// Scale every component, including alpha, by `br`
    ///
    /// Values are truncated toward zero
    ///
    ///     use pixdraw::Rgba8;
    ///     let c = Rgba8::new(200, 100, 10, 255).scale(0.5);
    ///     assert_eq!(c, Rgba8::new(100, 50, 5, 127));
    ///
    pub fn scale(self, br: f64) -> Self {
        let f = |v: u8| (br * f64::from(v)) as u8;
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }
    /// Linear interpolation between `dst` and `self` by coverage `br`
    ///
    /// Each component is `br * src + (1 - br) * dst`, truncated
    ///
    ///     use pixdraw::Rgba8;
    ///     let src = Rgba8::new(255, 255, 255, 255);
    ///     let dst = Rgba8::new(0, 0, 0, 255);
    ///     assert_eq!(src.blend_over(dst, 0.5), Rgba8::new(127, 127, 127, 255));
    ///     assert_eq!(src.blend_over(dst, 1.0), src);
    ///     assert_eq!(src.blend_over(dst, 0.0), dst);
    ///
    pub fn blend_over(self, dst: Rgba8, br: f64) -> Self {
        let f = |s: u8, d: u8| (br * f64::from(s) + (1.0 - br) * f64::from(d)) as u8;
        Self::new(f(self.r, dst.r),
                  f(self.g, dst.g),
                  f(self.b, dst.b),
                  f(self.a, dst.a))
    }
}

impl From<[u8;4]> for Rgba8 {
    fn from(v: [u8;4]) -> Self {
        Self::from_array(v)
    }
}
impl From<(u8,u8,u8)> for Rgba8 {
    fn from(v: (u8,u8,u8)) -> Self {
        Self::rgb(v.0, v.1, v.2)
    }
}

/// Color table for 8-bit indexed surfaces
#[derive(Debug,Clone,PartialEq)]
pub struct Palette {
    colors: Vec<Rgba8>,
}

impl Default for Palette {
    /// 3-3-2 color cube, index = rrrgggbb
    fn default() -> Self {
        let expand = |v: u8, bits: u32| {
            let max = (1u32 << bits) - 1;
            ((u32::from(v) * 255 + max / 2) / max) as u8
        };
        let colors = (0 ..= 255u8).map(|i| {
            Rgba8::rgb(expand(i >> 5, 3), expand((i >> 2) & 0x7, 3), expand(i & 0x3, 2))
        }).collect();
        Self { colors }
    }
}

impl Palette {
    /// Create a palette from up to 256 colors
    ///
    /// Missing entries are black, extra entries are ignored
    pub fn new(colors: &[Rgba8]) -> Self {
        let mut colors : Vec<_> = colors.iter().take(256).cloned().collect();
        colors.resize(256, Rgba8::black());
        Self { colors }
    }
    /// Color stored at index `i`
    pub fn get(&self, i: u8) -> Rgba8 {
        self.colors[usize::from(i)]
    }
    /// Index of the entry closest to `c`
    ///
    /// Distance is squared euclidean on r,g,b,a; ties go to the lower index
    pub fn nearest(&self, c: Rgba8) -> u8 {
        let d = |a: u8, b: u8| {
            let v = i32::from(a) - i32::from(b);
            (v * v) as u32
        };
        let mut best = (0usize, u32::max_value());
        for (i, p) in self.colors.iter().enumerate() {
            let dist = d(p.r, c.r) + d(p.g, c.g) + d(p.b, c.b) + d(p.a, c.a);
            if dist < best.1 {
                best = (i, dist);
                if dist == 0 {
                    break;
                }
            }
        }
        best.0 as u8
    }
}
