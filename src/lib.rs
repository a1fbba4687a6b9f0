//! Piecewise cubic [Hermite interpolation](https://en.wikipedia.org/wiki/Cubic_Hermite_spline).
//!
//! Builds a C1 piecewise cubic curve through irregularly spaced sample
//! points with known values and first derivatives, and evaluates the curve,
//! its derivative, or whole batches of query points. Query points outside
//! the sampled range extrapolate with the boundary segment's cubic by
//! default; a strict mode rejects them instead.

pub mod interpolation;
