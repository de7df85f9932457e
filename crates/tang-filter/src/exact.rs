//! The exact tier: arbitrary-precision scalars with a total sign query.

use crate::{DetScalar, Sign};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Arbitrary-precision scalar. Its sign query can never be indeterminate.
///
/// Implemented for [`BigInt`] (integer inputs) and [`BigRational`]
/// (floating-point and rational inputs).
pub trait ExactScalar: DetScalar<Sign = Sign> + Send + Sync {
    fn from_i32(v: i32) -> Self;
}

impl DetScalar for BigInt {
    type Sign = Sign;

    fn sign(&self) -> Sign {
        match BigInt::sign(self) {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        }
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

impl ExactScalar for BigInt {
    fn from_i32(v: i32) -> Self {
        BigInt::from(v)
    }
}

impl DetScalar for BigRational {
    type Sign = Sign;

    fn sign(&self) -> Sign {
        Sign::from_ordering(self.cmp(&BigRational::zero()))
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        self * rhs
    }
}

impl ExactScalar for BigRational {
    fn from_i32(v: i32) -> Self {
        BigRational::from_integer(BigInt::from(v))
    }
}
