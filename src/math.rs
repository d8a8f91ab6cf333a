//! Fractional helpers for the anti-aliased line tracer
//!
//! Both use truncation, not floor, so negative values split around zero.

/// Fractional part, `z - trunc(z)`
///
///     use pixdraw::math::frac;
///     assert_eq!(frac(2.25), 0.25);
///     assert_eq!(frac(-2.25), -0.25);
///
pub fn frac(z: f64) -> f64 {
    z - z.trunc()
}

/// Remaining part, `1 - frac(z)`
///
///     use pixdraw::math::invfrac;
///     assert_eq!(invfrac(2.25), 0.75);
///     assert_eq!(invfrac(3.0), 1.0);
///
pub fn invfrac(z: f64) -> f64 {
    1.0 - frac(z)
}
