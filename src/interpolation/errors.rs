use thiserror::Error;

#[derive(Debug, Error)]
pub enum HermiteError {
    #[error("unequal length: locations has {x_len} elements, {name} has {other_len}")]
    UnequalLength { name: &'static str, x_len: usize, other_len: usize },

    #[error("non-finite value in {name} at index {idx}")]
    NonFinite { name: &'static str, idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate locations after sorting: {x1} and {x2}")]
    DuplicateLocation { x1: f64, x2: f64 },

    #[error("evaluation point {got} out of domain [{x_min}, {x_max}]")]
    OutOfDomain { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got}: must be finite and > 0")]
    InvalidXTol { got: f64 },
}
