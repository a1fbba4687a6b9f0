//! Segment lookup over a strictly increasing breakpoint sequence.
//!
//! Maps a query coordinate to the index of its enclosing segment
//! `[x[i], x[i+1]]` by binary search, together with a [`Placement`] flag
//! recording whether the query fell below, inside, or above the sampled
//! domain. Out-of-range queries clamp to the nearest boundary segment so
//! callers can extrapolate with that segment's polynomial.

/// Where a query coordinate landed relative to the breakpoint domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    BelowDomain,
    Inside,
    AboveDomain,
}

/// Locates the segment enclosing `xq`.
///
/// # Behavior
/// Binary search for the greatest `i` with `x[i] <= xq`, clamped to
/// `[0, n - 2]`. An exact hit on a breakpoint resolves to the segment
/// starting at that breakpoint, except the final breakpoint, which
/// resolves to the last segment.
///
/// # Preconditions
/// `x` strictly increasing with `x.len() >= 2`; guaranteed by
/// [`PiecewiseHermite`](crate::interpolation::evaluator::PiecewiseHermite)
/// construction.
#[inline]
pub fn locate(x: &[f64], xq: f64) -> (usize, Placement) {
    let n = x.len();

    if xq < x[0] {
        return (0, Placement::BelowDomain);
    }
    if xq > x[n - 1] {
        return (n - 2, Placement::AboveDomain);
    }

    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq { lo = mid; } else { hi = mid; }
    }

    (lo, Placement::Inside)
}
