//! Elementary-math provider and domain guards shared by the formula sets.

use crate::error::{SizingError, SizingResult};
use num_traits::{Float, FloatConst};
use std::fmt::Debug;

/// Scalar type a formula can be evaluated in.
pub trait Real: Float + FloatConst + Debug {}

impl<T: Float + FloatConst + Debug> Real for T {}

/// Convert an `f64` constant into the evaluation type.
#[inline]
pub(crate) fn lit<F: Real>(x: f64) -> F {
    num_traits::cast::<f64, F>(x).unwrap_or_else(F::nan)
}

/// Report value for error messages.
#[inline]
pub(crate) fn report<F: Real>(x: F) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Finite and strictly positive.
pub(crate) fn positive<F: Real>(v: F, what: &'static str) -> SizingResult<F> {
    if v.is_finite() && v > F::zero() {
        Ok(v)
    } else {
        Err(SizingError::InvalidPhysicalInput {
            what,
            value: report(v),
        })
    }
}

/// Finite and not negative.
pub(crate) fn non_negative<F: Real>(v: F, what: &'static str) -> SizingResult<F> {
    if v.is_finite() && v >= F::zero() {
        Ok(v)
    } else {
        Err(SizingError::InvalidPhysicalInput {
            what,
            value: report(v),
        })
    }
}

/// Ratio of specific heats; the isentropic relations divide by `k - 1`.
pub(crate) fn specific_heat_ratio<F: Real>(k: F) -> SizingResult<F> {
    if k.is_finite() && k > F::one() {
        Ok(k)
    } else {
        Err(SizingError::InvalidPhysicalInput {
            what: "ratio of specific heats (must exceed 1)",
            value: report(k),
        })
    }
}

/// Evaluate a formula element-wise, stopping at the first invalid element.
///
/// ```
/// use es_sizing::{math::sweep, plumbing};
///
/// let diameters = [0.01_f64, 0.02, 0.04];
/// let re = sweep(&diameters, |&d| plumbing::reynolds_number(0.5, d, 1e-3)).unwrap();
/// assert!(re[0] > re[1] && re[1] > re[2]);
/// ```
pub fn sweep<T, F, G>(inputs: &[T], f: G) -> SizingResult<Vec<F>>
where
    G: FnMut(&T) -> SizingResult<F>,
{
    inputs.iter().map(f).collect()
}

/// `n` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
