use crate::{FilterError, IntervalSign, Sign};
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// Closed interval `[lo, hi]` of `f64` enclosing an unknown real value.
///
/// Every operation returns an interval that contains the exact result of the
/// same operation applied to any values inside the operands. Rounded results
/// are pushed one ulp outward, so enclosure holds under all four IEEE
/// rounding modes and does not depend on the compiler honoring a dynamic
/// rounding mode. Exact zero points are propagated without widening, which
/// keeps sparse matrices certifiable.
///
/// # Example
/// ```
/// use tang_filter::{Interval, IntervalSign, Sign};
///
/// let a = Interval::point(0.1);
/// let b = Interval::point(0.2);
/// let c = a + b - Interval::point(0.3);
/// // 0.1 + 0.2 - 0.3 is not decidable from the bounds alone
/// assert_eq!(c.sign(), IntervalSign::Indeterminate);
/// assert_eq!((a * b).sign(), IntervalSign::Definite(Sign::Positive));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Interval {
    lo: f64,
    hi: f64,
}

#[inline(always)]
fn down(x: f64) -> f64 {
    x.next_down()
}

#[inline(always)]
fn up(x: f64) -> f64 {
    x.next_up()
}

impl Interval {
    pub const ZERO: Self = Self { lo: 0.0, hi: 0.0 };
    pub const ONE: Self = Self { lo: 1.0, hi: 1.0 };
    pub const ENTIRE: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// # Panics
    /// If `lo > hi` or either bound is NaN.
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(lo <= hi, "Interval: invalid bounds [{lo}, {hi}]");
        Self { lo, hi }
    }

    /// Checked form of [`new`](Self::new).
    pub fn try_new(lo: f64, hi: f64) -> Result<Self, FilterError> {
        if lo <= hi {
            Ok(Self { lo, hi })
        } else {
            Err(FilterError::InvalidBounds { lo, hi })
        }
    }

    /// Degenerate interval holding exactly `v`.
    #[inline]
    pub fn point(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Smallest interval strictly around `v`: for values known only to
    /// within one rounding of `v`.
    #[inline]
    pub fn around(v: f64) -> Self {
        Self::new(down(v), up(v))
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.lo == 0.0 && self.hi == 0.0
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// Upper bound on `hi - lo`.
    pub fn width(&self) -> f64 {
        up(self.hi - self.lo)
    }

    /// Sign of every value in the interval, if they all agree.
    #[inline]
    pub fn sign(&self) -> IntervalSign {
        if self.lo > 0.0 {
            IntervalSign::Definite(Sign::Positive)
        } else if self.hi < 0.0 {
            IntervalSign::Definite(Sign::Negative)
        } else if self.is_zero() {
            IntervalSign::Definite(Sign::Zero)
        } else {
            // straddles zero, or NaN bounds from an overflowed product
            IntervalSign::Indeterminate
        }
    }

    /// `x²`, tighter than `x * x` when the interval contains zero.
    pub fn square(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let a = self.lo * self.lo;
        let b = self.hi * self.hi;
        if self.lo <= 0.0 && self.hi >= 0.0 {
            return Self {
                lo: 0.0,
                hi: up(a.max(b)),
            };
        }
        Self {
            lo: down(a.min(b)).max(0.0),
            hi: up(a.max(b)),
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Interval {
    fn from(v: f64) -> Self {
        Self::point(v)
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = FilterError;

    fn try_from((lo, hi): (f64, f64)) -> Result<Self, FilterError> {
        Self::try_new(lo, hi)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(i: Interval) -> Self {
        (i.lo, i.hi)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:e}, {:e}]", self.lo, self.hi)
    }
}

impl Neg for Interval {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Add for Interval {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        if rhs.is_zero() {
            return self;
        }
        if self.is_zero() {
            return rhs;
        }
        Self {
            lo: down(self.lo + rhs.lo),
            hi: up(self.hi + rhs.hi),
        }
    }
}

impl Sub for Interval {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if rhs.is_zero() {
            return self;
        }
        if self.is_zero() {
            return -rhs;
        }
        Self {
            lo: down(self.lo - rhs.hi),
            hi: up(self.hi - rhs.lo),
        }
    }
}

impl Mul for Interval {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        let p = [
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        ];
        // 0 * ∞ after an overflow
        if p.iter().any(|v| v.is_nan()) {
            return Self::ENTIRE;
        }
        let lo = p[0].min(p[1]).min(p[2].min(p[3]));
        let hi = p[0].max(p[1]).max(p[2].max(p[3]));
        Self {
            lo: down(lo),
            hi: up(hi),
        }
    }
}

// SAFETY: two f64 fields, #[repr(C)], no padding; all-zero is `Interval::ZERO`
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Interval {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Interval {}
