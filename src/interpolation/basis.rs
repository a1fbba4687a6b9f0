//! Cubic Hermite basis evaluation on a single segment.
//!
//! On the unit parameter `t = (xq - x0) / h`, `h = x1 - x0`:
//!
//! ```text
//! h00(t) = 2t^3 - 3t^2 + 1
//! h10(t) = t^3 - 2t^2 + t
//! h01(t) = -2t^3 + 3t^2
//! h11(t) = t^3 - t^2
//! p(xq)  = h00 y0 + h10 h d0 + h01 y1 + h11 h d1
//! ```
//!
//! The `h` factors on the derivative terms rescale the prescribed slopes
//! from the unit parameter back to the true coordinate scale, so `p`
//! reproduces the endpoint values and slopes exactly.

/// Hermite boundary data of one segment.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub d0: f64,
    pub d1: f64,
}

/// Evaluates the segment's cubic at `xq`.
#[inline]
pub fn hermite_value(s: &Segment, xq: f64) -> f64 {
    let h = s.x1 - s.x0;
    let t = (xq - s.x0) / h;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * s.y0 + h10 * h * s.d0 + h01 * s.y1 + h11 * h * s.d1
}

/// Evaluates the derivative of the segment's cubic at `xq`.
///
/// Basis derivatives with respect to `xq`, chain-rule factor `1/h`
/// already folded in where it does not cancel against the `h` rescaling
/// of the slope terms.
#[inline]
pub fn hermite_slope(s: &Segment, xq: f64) -> f64 {
    let h = s.x1 - s.x0;
    let t = (xq - s.x0) / h;
    let t2 = t * t;

    let dh00 = (6.0 * t2 - 6.0 * t) / h;
    let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
    let dh01 = (-6.0 * t2 + 6.0 * t) / h;
    let dh11 = 3.0 * t2 - 2.0 * t;

    dh00 * s.y0 + dh10 * s.d0 + dh01 * s.y1 + dh11 * s.d1
}
