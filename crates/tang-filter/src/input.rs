use crate::{ExactScalar, FilterError, Interval};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Largest magnitude below which every integer is exactly an `f64`.
const F64_EXACT_INT: u64 = 1 << 53;

/// A value callers hand to the filter: anything with a sound interval
/// enclosure and an exact representation.
///
/// `to_interval` runs once, when the [`Filtered`](crate::Filtered) wrapper is
/// built. `to_exact` runs at most once per wrapper, on the first request.
pub trait FilterInput {
    type Exact: ExactScalar;

    /// An interval guaranteed to contain the value.
    fn to_interval(&self) -> Interval;

    /// The value itself, without error.
    fn to_exact(&self) -> Self::Exact;

    /// Reject inputs that have no exact value.
    fn validate(&self) -> Result<(), FilterError> {
        Ok(())
    }
}

fn finite_or_err(value: f64) -> Result<(), FilterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FilterError::NonFinite { value })
    }
}

fn rational_from_f64(v: f64) -> BigRational {
    match BigRational::from_float(v) {
        Some(r) => r,
        None => panic!("non-finite input {v} has no exact value"),
    }
}

/// Tightest `f64` interval around `exact`, starting from an approximation
/// that is within a few ulps.
fn bracket(exact: &BigRational, approx: Option<f64>) -> Interval {
    let Some(approx) = approx.filter(|v| v.is_finite()) else {
        return Interval::ENTIRE;
    };
    let mut lo = approx;
    while lo.is_finite() && rational_from_f64(lo) > *exact {
        lo = lo.next_down();
    }
    let mut hi = approx;
    while hi.is_finite() && rational_from_f64(hi) < *exact {
        hi = hi.next_up();
    }
    Interval::new(lo, hi)
}

/// # Panics
/// `to_exact` panics on NaN or infinity; use
/// [`Filtered::try_new`](crate::Filtered::try_new) to reject those up front.
impl FilterInput for f64 {
    type Exact = BigRational;

    #[inline]
    fn to_interval(&self) -> Interval {
        debug_assert!(self.is_finite(), "non-finite filter input {self}");
        Interval::point(*self)
    }

    fn to_exact(&self) -> BigRational {
        rational_from_f64(*self)
    }

    fn validate(&self) -> Result<(), FilterError> {
        finite_or_err(*self)
    }
}

impl FilterInput for f32 {
    type Exact = BigRational;

    #[inline]
    fn to_interval(&self) -> Interval {
        debug_assert!(self.is_finite(), "non-finite filter input {self}");
        Interval::point(f64::from(*self))
    }

    fn to_exact(&self) -> BigRational {
        rational_from_f64(f64::from(*self))
    }

    fn validate(&self) -> Result<(), FilterError> {
        finite_or_err(f64::from(*self))
    }
}

impl FilterInput for i32 {
    type Exact = BigInt;

    #[inline]
    fn to_interval(&self) -> Interval {
        Interval::point(f64::from(*self))
    }

    fn to_exact(&self) -> BigInt {
        BigInt::from(*self)
    }
}

impl FilterInput for i64 {
    type Exact = BigInt;

    #[inline]
    fn to_interval(&self) -> Interval {
        let approx = *self as f64;
        if self.unsigned_abs() <= F64_EXACT_INT {
            Interval::point(approx)
        } else {
            // `as` rounds to nearest: the value is within one ulp
            Interval::around(approx)
        }
    }

    fn to_exact(&self) -> BigInt {
        BigInt::from(*self)
    }
}

impl FilterInput for BigInt {
    type Exact = BigInt;

    fn to_interval(&self) -> Interval {
        bracket(&BigRational::from_integer(self.clone()), self.to_f64())
    }

    fn to_exact(&self) -> BigInt {
        self.clone()
    }
}

impl FilterInput for BigRational {
    type Exact = BigRational;

    fn to_interval(&self) -> Interval {
        bracket(self, self.to_f64())
    }

    fn to_exact(&self) -> BigRational {
        self.clone()
    }
}
