pub mod basis;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod report;
pub mod segment;
pub mod traits;
pub use traits::Interpolator;

pub use evaluator::{Extrapolation, PiecewiseHermite};
