use crate::CoreError;

/// Floating point type used for stored quantities.
pub type Real = f64;

/// Absolute/relative comparison tolerances.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely relative tolerance, used when comparing against reference evaluations.
    pub fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositive { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn relative_tolerance_ignores_absolute_floor() {
        let tol = Tolerances::relative(1e-3);
        assert!(nearly_equal(2000.0, 2001.0, tol));
        assert!(!nearly_equal(1e-9, 2e-9, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(2.5, "x"), Ok(2.5));
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(CoreError::NonPositive { .. })
        ));
        assert!(matches!(
            ensure_positive(-1.0, "x"),
            Err(CoreError::NonPositive { .. })
        ));
        assert!(matches!(
            ensure_positive(f64::INFINITY, "x"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
                let tol = Tolerances::default();
                prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
            }

            #[test]
            fn bar_pascal_conversion_inverts(p in 1e-3_f64..1e4) {
                use crate::units::conventions::{bar_to_pa, pa_to_bar};
                let back = pa_to_bar(bar_to_pa(p));
                prop_assert!(nearly_equal(back, p, Tolerances::default()));
            }
        }
    }
}
