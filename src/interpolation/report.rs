//! Defines the struct returned by the one-shot evaluation driver.
//!
//! Defines the [`EvaluationReport`] struct returned by
//! [`evaluate`](crate::interpolation::config::evaluate).
//!
//! This report summarizes key metadata about the evaluation run,
//! including the number of sample and query points, how many queries fell
//! outside the sampled domain, and the evaluated values themselves.

pub const ALGORITHM_NAME: &str = "piecewise hermite";

/// Summary of a piecewise Hermite evaluation run.
///
/// [`EvaluationReport`]
/// - `algorithm_name` : always `"piecewise hermite"`
/// - `n_provided`     : number of sample points `(x, f, f')`
/// - `n_evaluated`    : number of query points
/// - `n_extrapolated` : query points outside `[x[0], x[n-1]]`
/// - `evaluated`      : interpolated values, one per query point
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub n_extrapolated: usize,
    pub evaluated: Vec<f64>,
}

impl EvaluationReport {
    pub fn new(n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: ALGORITHM_NAME,
            n_provided,
            n_evaluated,
            n_extrapolated: 0,
            evaluated: Vec::new(),
        }
    }
}
