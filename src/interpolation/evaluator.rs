//! Piecewise Hermite Cubic Evaluation
//!
//! Implements a piecewise [cubic Hermite
//! interpolant](https://en.wikipedia.org/wiki/Cubic_Hermite_spline) through
//! sample points with prescribed values *and* first derivatives.
//!
//! Each consecutive pair of breakpoints carries one cubic segment matching
//! value and slope at both ends, so the assembled curve is C1 by
//! construction. Construction sorts unsorted input, evaluation locates the
//! enclosing segment by binary search and evaluates the local cubic.


use std::fmt;

use crate::interpolation::basis::{hermite_slope, hermite_value, Segment};
use crate::interpolation::config::DEFAULT_X_TOL;
use crate::interpolation::errors::HermiteError;
use crate::interpolation::segment::{locate, Placement};
use crate::interpolation::traits::Interpolator;


/// Policy for query points outside `[x[0], x[n-1]]`.
///
/// - `Extrapolate` : evaluate the nearest boundary segment's cubic (default)
/// - `Reject`      : fail with [`HermiteError::OutOfDomain`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Extrapolation {
    #[default]
    Extrapolate,
    Reject,
}


/// Piecewise cubic Hermite interpolant.
///
/// Owns the breakpoint locations, values, and derivatives; all three are
/// immutable after construction, so shared references may be queried from
/// multiple threads without locking.
///
/// # Construction
/// - Use [`PiecewiseHermite::new`], or [`PiecewiseHermite::with_min_spacing`]
///   to override the duplicate-detection tolerance, then optionally
///   [`PiecewiseHermite::with_extrapolation`].
///
/// # Behavior
/// - Locations need not arrive sorted: the three sequences are jointly
///   re-ordered by a stable sort on location, preserving index alignment.
/// - A single sample point degenerates to a constant function.
#[derive(Debug, Clone)]
pub struct PiecewiseHermite {
    x  : Vec<f64>,
    y  : Vec<f64>,
    dy : Vec<f64>,
    extrapolation: Extrapolation,
}

impl PiecewiseHermite {
    /// Builds an interpolant from locations, values, and derivatives.
    ///
    /// # Errors
    /// - [`HermiteError::EmptyInput`] if `locations` is empty.
    /// - [`HermiteError::UnequalLength`] if the sequence lengths disagree.
    /// - [`HermiteError::NonFinite`] if any entry is NaN or infinite.
    /// - [`HermiteError::DuplicateLocation`] if two locations coincide
    ///   (spacing below [`DEFAULT_X_TOL`]) after sorting.
    pub fn new(
        locations  : Vec<f64>,
        values     : Vec<f64>,
        derivatives: Vec<f64>,
    ) -> Result<Self, HermiteError> {
        Self::with_min_spacing(locations, values, derivatives, DEFAULT_X_TOL)
    }

    /// Like [`PiecewiseHermite::new`] with an explicit minimum allowed
    /// spacing between adjacent sorted locations.
    ///
    /// # Errors
    /// - [`HermiteError::InvalidXTol`] if `min_spacing` is not finite and
    ///   positive, plus everything [`PiecewiseHermite::new`] returns.
    pub fn with_min_spacing(
        locations  : Vec<f64>,
        values     : Vec<f64>,
        derivatives: Vec<f64>,
        min_spacing: f64,
    ) -> Result<Self, HermiteError> {
        if !min_spacing.is_finite() || min_spacing <= 0.0 {
            return Err(HermiteError::InvalidXTol { got: min_spacing });
        }

        let n = locations.len();
        if n == 0 {
            return Err(HermiteError::EmptyInput);
        }
        if values.len() != n {
            return Err(HermiteError::UnequalLength {
                name: "values", x_len: n, other_len: values.len(),
            });
        }
        if derivatives.len() != n {
            return Err(HermiteError::UnequalLength {
                name: "derivatives", x_len: n, other_len: derivatives.len(),
            });
        }
        non_finite_check("locations", &locations)?;
        non_finite_check("values", &values)?;
        non_finite_check("derivatives", &derivatives)?;

        let (x, y, dy) = sort_by_location(locations, values, derivatives);

        for i in 1..n {
            if x[i] - x[i - 1] < min_spacing {
                return Err(HermiteError::DuplicateLocation {
                    x1: x[i - 1],
                    x2: x[i],
                });
            }
        }

        Ok(Self { x, y, dy, extrapolation: Extrapolation::default() })
    }

    /// Selects the out-of-domain policy; [`Extrapolation::Extrapolate`] when
    /// never called.
    pub fn with_extrapolation(mut self, mode: Extrapolation) -> Self {
        self.extrapolation = mode;
        self
    }

    /// Evaluates the interpolant and its derivative at `x` in one segment
    /// lookup.
    ///
    /// # Errors
    /// - [`HermiteError::OutOfDomain`] if `x` lies outside the sampled range
    ///   and the policy is [`Extrapolation::Reject`].
    pub fn eval_with_derivative(&self, xq: f64) -> Result<(f64, f64), HermiteError> {
        let n = self.x.len();
        if n == 1 {
            self.domain_check(xq)?;
            return Ok((self.y[0], self.dy[0]));
        }

        let (i, placement) = locate(&self.x, xq);
        if placement != Placement::Inside {
            self.domain_check(xq)?;
        }

        let s = self.segment(i);
        Ok((hermite_value(&s, xq), hermite_slope(&s, xq)))
    }

    /// Evaluates the derivative `df/dx` at `x`.
    ///
    /// Equal to the analytic derivative of the same local cubic that
    /// [`PiecewiseHermite::eval`] evaluates.
    ///
    /// # Errors
    /// - [`HermiteError::OutOfDomain`] under [`Extrapolation::Reject`].
    pub fn eval_derivative(&self, xq: f64) -> Result<f64, HermiteError> {
        self.eval_with_derivative(xq).map(|(_, d)| d)
    }

    // getters
    pub fn locations(&self) -> &[f64] { &self.x }
    pub fn values(&self) -> &[f64] { &self.y }
    pub fn derivatives(&self) -> &[f64] { &self.dy }
    pub fn extrapolation(&self) -> Extrapolation { self.extrapolation }

    /// Lower and upper bound of the sampled domain.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    #[inline]
    fn segment(&self, i: usize) -> Segment {
        Segment {
            x0: self.x[i],
            x1: self.x[i + 1],
            y0: self.y[i],
            y1: self.y[i + 1],
            d0: self.dy[i],
            d1: self.dy[i + 1],
        }
    }

    #[inline]
    fn domain_check(&self, xq: f64) -> Result<(), HermiteError> {
        let (x_min, x_max) = self.domain();
        if self.extrapolation == Extrapolation::Reject && (xq < x_min || xq > x_max) {
            return Err(HermiteError::OutOfDomain { got: xq, x_min, x_max });
        }
        Ok(())
    }
}

impl Interpolator for PiecewiseHermite {
    /// Evaluates the interpolant at `x`.
    ///
    /// # Errors
    /// - [`HermiteError::OutOfDomain`] under [`Extrapolation::Reject`].
    fn eval(&self, xq: f64) -> Result<f64, HermiteError> {
        self.eval_with_derivative(xq).map(|(v, _)| v)
    }
}

impl fmt::Display for PiecewiseHermite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PiecewiseHermite {{ locations: {:?}, values: {:?}, derivatives: {:?} }}",
            self.x, self.y, self.dy,
        )
    }
}


#[inline]
fn non_finite_check(name: &'static str, v: &[f64]) -> Result<(), HermiteError> {
    match v.iter().position(|e| !e.is_finite()) {
        Some(idx) => Err(HermiteError::NonFinite { name, idx }),
        None      => Ok(()),
    }
}

/// Jointly re-orders the three sequences by ascending location.
///
/// Stable sort keyed on location, so the relative order of any coincident
/// locations survives for the duplicate check that follows.
fn sort_by_location(
    locations  : Vec<f64>,
    values     : Vec<f64>,
    derivatives: Vec<f64>,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    if locations.windows(2).all(|w| w[0] < w[1]) {
        return (locations, values, derivatives);
    }

    let mut order: Vec<usize> = (0..locations.len()).collect();
    order.sort_by(|&a, &b| locations[a].total_cmp(&locations[b]));

    let x  = order.iter().map(|&i| locations[i]).collect();
    let y  = order.iter().map(|&i| values[i]).collect();
    let dy = order.iter().map(|&i| derivatives[i]).collect();
    (x, y, dy)
}
