use crate::{Interval, IntervalSign, Sign};
use core::fmt;
use core::ops::{Add, Mul, Sub};

/// Scalar types the determinant expansion can run over.
///
/// The expansion only needs `+`, `-`, `*` and a sign query. The sign query's
/// answer type is part of the scalar: intervals may answer
/// [`IntervalSign::Indeterminate`], exact types always answer a [`Sign`].
pub trait DetScalar:
    Clone + fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    type Sign: Copy + fmt::Debug + PartialEq;

    fn sign(&self) -> Self::Sign;

    /// `self * rhs` without consuming either operand. Heap-backed scalars
    /// override this to skip the two clones.
    fn mul_ref(&self, rhs: &Self) -> Self {
        self.clone() * rhs.clone()
    }
}

impl DetScalar for Interval {
    type Sign = IntervalSign;

    #[inline]
    fn sign(&self) -> IntervalSign {
        Interval::sign(self)
    }
}

/// Plain floating point: fast, and wrong near degeneracies. Only useful as a
/// baseline.
impl DetScalar for f64 {
    type Sign = Sign;

    #[inline]
    fn sign(&self) -> Sign {
        Sign::from_f64(*self)
    }
}
