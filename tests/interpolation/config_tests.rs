use piecewise_hermite::interpolation::config::{evaluate, HermiteCfg};
use piecewise_hermite::interpolation::errors::HermiteError;
use piecewise_hermite::interpolation::Extrapolation;

type TestResult = Result<(), HermiteError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn report_metadata() -> TestResult {
    let locations   = [0.0, 1.0, 2.0];
    let values      = [0.0, 1.0, 0.0];
    let derivatives = [1.0, 0.0, -1.0];
    let x_eval      = [-0.5, 0.5, 1.5, 2.5];

    let cfg = HermiteCfg::new()
        .set_locations(&locations)?
        .set_values(&values)?
        .set_derivatives(&derivatives)?
        .set_x_eval(&x_eval)?;
    let rep = evaluate(cfg)?;

    assert_eq!(rep.algorithm_name, "piecewise hermite");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 4);
    assert_eq!(rep.n_extrapolated, 2);
    assert_eq!(rep.evaluated.len(), 4);
    assert!(approx_eq(rep.evaluated[1], 0.625));
    Ok(())
}

#[test]
fn exact_hits() -> TestResult {
    let locations   = [0.0, 1.0, 2.0, 4.0];
    let values      = [0.0, 1.0, 1.5, 3.0];
    let derivatives = [1.0, 0.5, 0.5, 1.0];

    let cfg = HermiteCfg::new()
        .set_locations(&locations)?
        .set_values(&values)?
        .set_derivatives(&derivatives)?
        .set_x_eval(&locations)?;
    let rep = evaluate(cfg)?;

    assert_eq!(rep.n_extrapolated, 0);
    for (got, want) in rep.evaluated.iter().zip(values.iter()) {
        assert!(approx_eq(*got, *want));
    }
    Ok(())
}

#[test]
fn unsorted_locations_accepted() -> TestResult {
    let locations   = [2.0, 0.0, 1.0];
    let values      = [0.0, 0.0, 1.0];
    let derivatives = [-1.0, 1.0, 0.0];
    let x_eval      = [0.5];

    let cfg = HermiteCfg::new()
        .set_locations(&locations)?
        .set_values(&values)?
        .set_derivatives(&derivatives)?
        .set_x_eval(&x_eval)?;
    let rep = evaluate(cfg)?;

    assert!(approx_eq(rep.evaluated[0], 0.625));
    Ok(())
}

#[test]
fn reject_mode_propagates() -> TestResult {
    let locations   = [0.0, 1.0];
    let values      = [0.0, 1.0];
    let derivatives = [1.0, 1.0];
    let x_eval      = [0.5, 1.5];

    let cfg = HermiteCfg::new()
        .set_locations(&locations)?
        .set_values(&values)?
        .set_derivatives(&derivatives)?
        .set_x_eval(&x_eval)?
        .set_extrapolation(Extrapolation::Reject);

    assert!(matches!(
        evaluate(cfg),
        Err(HermiteError::OutOfDomain { got, .. }) if got == 1.5
    ));
    Ok(())
}

#[test]
fn setter_rejects_empty() {
    assert!(matches!(
        HermiteCfg::new().set_locations(&[]),
        Err(HermiteError::EmptyInput)
    ));
}

#[test]
fn setter_rejects_non_finite() {
    assert!(matches!(
        HermiteCfg::new().set_values(&[0.0, f64::NAN]),
        Err(HermiteError::NonFinite { name: "values", idx: 1 })
    ));
    assert!(matches!(
        HermiteCfg::new().set_x_eval(&[f64::INFINITY]),
        Err(HermiteError::NonFinite { name: "x_eval", idx: 0 })
    ));
}

#[test]
fn setter_rejects_length_mismatch() -> TestResult {
    let res = HermiteCfg::new()
        .set_locations(&[0.0, 1.0, 2.0])?
        .set_values(&[0.0, 1.0]);
    assert!(matches!(
        res,
        Err(HermiteError::UnequalLength { name: "values", x_len: 3, other_len: 2 })
    ));
    Ok(())
}

#[test]
fn setter_rejects_invalid_x_tol() {
    assert!(matches!(
        HermiteCfg::new().set_x_tol(0.0),
        Err(HermiteError::InvalidXTol { got }) if got == 0.0
    ));
    assert!(matches!(
        HermiteCfg::new().set_x_tol(f64::NAN),
        Err(HermiteError::InvalidXTol { .. })
    ));
}

#[test]
fn x_tol_governs_duplicate_detection() -> TestResult {
    let locations   = [0.0, 1e-6, 1.0];
    let values      = [0.0, 0.0, 1.0];
    let derivatives = [0.0, 0.0, 0.0];

    // default tolerance accepts micro spacing
    let cfg = HermiteCfg::new()
        .set_locations(&locations)?
        .set_values(&values)?
        .set_derivatives(&derivatives)?
        .set_x_eval(&[0.5])?;
    assert!(evaluate(cfg).is_ok());

    // a coarser tolerance treats it as a duplicate
    let cfg = cfg.set_x_tol(1e-3)?;
    assert!(matches!(
        evaluate(cfg),
        Err(HermiteError::DuplicateLocation { .. })
    ));
    Ok(())
}
