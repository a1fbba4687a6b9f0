//! Configuration for one-shot piecewise Hermite evaluation.
//!
//! Provides [`HermiteCfg`], a borrowed-slice builder, and [`evaluate`],
//! which constructs a [`PiecewiseHermite`] from the configured data and
//! evaluates every query point in one pass.
//!
//! [`HermiteCfg`] — fields
//! - `locations`   : breakpoint x-values (need not be sorted)
//! - `values`      : `f(x)` at each breakpoint
//! - `derivatives` : `f'(x)` at each breakpoint
//! - `x_eval`      : query points
//! - `x_tol`       : minimum allowed spacing between sorted locations
//! - `extrapolation` : out-of-domain policy
//!
//! [`HermiteCfg::new`] initializes the configuration with empty slices and
//! [`DEFAULT_X_TOL`]; setters validate eagerly and fail fast.


use crate::interpolation::errors::HermiteError;
use crate::interpolation::evaluator::{Extrapolation, PiecewiseHermite};
use crate::interpolation::report::EvaluationReport;
use crate::interpolation::traits::Interpolator;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct HermiteCfg<'a> {
    locations  : &'a [f64],
    values     : &'a [f64],
    derivatives: &'a [f64],
    x_eval     : &'a [f64],
    x_tol      : f64,
    extrapolation: Extrapolation,
}

impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self {
            locations  : &[],
            values     : &[],
            derivatives: &[],
            x_eval     : &[],
            x_tol      : DEFAULT_X_TOL,
            extrapolation: Extrapolation::default(),
        }
    }

    pub fn set_locations(mut self, v: &'a [f64]) -> Result<Self, HermiteError> {
        if v.is_empty() {
            return Err(HermiteError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(HermiteError::NonFinite { name: "locations", idx });
        }
        self.locations = v;
        self.check_lengths()?;
        Ok(self)
    }

    pub fn set_values(mut self, v: &'a [f64]) -> Result<Self, HermiteError> {
        if v.is_empty() {
            return Err(HermiteError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(HermiteError::NonFinite { name: "values", idx });
        }
        self.values = v;
        self.check_lengths()?;
        Ok(self)
    }

    pub fn set_derivatives(mut self, v: &'a [f64]) -> Result<Self, HermiteError> {
        if v.is_empty() {
            return Err(HermiteError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(HermiteError::NonFinite { name: "derivatives", idx });
        }
        self.derivatives = v;
        self.check_lengths()?;
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &'a [f64]) -> Result<Self, HermiteError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(HermiteError::NonFinite { name: "x_eval", idx });
        }
        self.x_eval = v;
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, HermiteError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(HermiteError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    pub fn set_extrapolation(mut self, mode: Extrapolation) -> Self {
        self.extrapolation = mode;
        self
    }

    // getters
    pub fn locations(&self) -> &'a [f64] { self.locations }
    pub fn values(&self) -> &'a [f64] { self.values }
    pub fn derivatives(&self) -> &'a [f64] { self.derivatives }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_tol(&self) -> f64 { self.x_tol }
    pub fn extrapolation(&self) -> Extrapolation { self.extrapolation }

    // length agreement check, symmetric across the three data setters
    fn check_lengths(&self) -> Result<(), HermiteError> {
        let x_len = self.locations.len();
        if x_len == 0 {
            return Ok(());
        }
        let y_len  = self.values.len();
        let dy_len = self.derivatives.len();
        if y_len != 0 && y_len != x_len {
            return Err(HermiteError::UnequalLength {
                name: "values", x_len, other_len: y_len,
            });
        }
        if dy_len != 0 && dy_len != x_len {
            return Err(HermiteError::UnequalLength {
                name: "derivatives", x_len, other_len: dy_len,
            });
        }
        Ok(())
    }
}

impl Default for HermiteCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


#[inline]
fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Builds a [`PiecewiseHermite`] from `cfg` and evaluates every query point.
///
/// # Returns
/// [`EvaluationReport`] containing
/// - `algorithm_name` : `"piecewise hermite"`
/// - `n_provided`     : number of sample points
/// - `n_evaluated`    : number of query points
/// - `n_extrapolated` : query points outside the sampled domain
/// - `evaluated`      : interpolated values, index-aligned with `x_eval`
///
/// # Errors
/// - Everything [`PiecewiseHermite::with_min_spacing`] returns.
/// - [`HermiteError::OutOfDomain`] if any query point lies outside the
///   sampled range and the policy is [`Extrapolation::Reject`].
pub fn evaluate(cfg: HermiteCfg) -> Result<EvaluationReport, HermiteError> {
    let interp = PiecewiseHermite::with_min_spacing(
        cfg.locations.to_vec(),
        cfg.values.to_vec(),
        cfg.derivatives.to_vec(),
        cfg.x_tol,
    )?
    .with_extrapolation(cfg.extrapolation);

    let (x_min, x_max) = interp.domain();

    let mut report = EvaluationReport::new(cfg.locations.len(), cfg.x_eval.len());
    report.n_extrapolated = cfg
        .x_eval
        .iter()
        .filter(|&&xq| xq < x_min || xq > x_max)
        .count();
    report.evaluated = interp.eval_many(cfg.x_eval)?;

    Ok(report)
}
