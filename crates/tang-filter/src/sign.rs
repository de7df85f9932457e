use core::cmp::Ordering;
use core::fmt;
use core::ops::{Mul, Neg};

/// Sign of a determinant (or of any exactly evaluated quantity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of a float. NaN maps to `Zero`.
    pub fn from_f64(v: f64) -> Self {
        if v > 0.0 {
            Sign::Positive
        } else if v < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Sign of `a - b` given `a.cmp(&b)`.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    pub fn to_ordering(self) -> Ordering {
        match self {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        }
    }

    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

impl Neg for Sign {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Sign of a product is the product of the signs.
impl Mul for Sign {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Positive => "positive",
        };
        f.write_str(s)
    }
}

/// Answer of a sign query on an interval.
///
/// `Indeterminate` is an expected outcome, not an error: the bounds straddle
/// zero and the interval alone cannot decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalSign {
    Definite(Sign),
    Indeterminate,
}

impl IntervalSign {
    pub fn definite(self) -> Option<Sign> {
        match self {
            IntervalSign::Definite(s) => Some(s),
            IntervalSign::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(self) -> bool {
        self == IntervalSign::Indeterminate
    }
}

impl From<Sign> for IntervalSign {
    fn from(s: Sign) -> Self {
        IntervalSign::Definite(s)
    }
}
