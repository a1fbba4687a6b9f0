use crate::interpolation::errors::HermiteError;

pub trait Interpolator {
    /// evaluates single point
    fn eval(&self, x: f64) -> Result<f64, HermiteError>;

    /// evaluates many points
    ///
    /// Order-preserving and element-wise identical to [`Interpolator::eval`];
    /// the first failing point aborts the batch.
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, HermiteError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
