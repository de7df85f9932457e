//! The filtered decision procedure.
//!
//! ```text
//! Start ──guard──▶ IntervalEvaluating ──definite──▶ Certified
//!                         │
//!                   indeterminate (guard released)
//!                         ▼
//!                  ExactEvaluating ──────────────▶ Certified(exact)
//! ```
//!
//! The rounding guard covers only the interval pass and is dropped before
//! the exact pass starts, whichever way the interval pass ends. The exact
//! pass reruns the same expansion on every entry's exact value; interval and
//! exact entries are never mixed in one evaluation.

use crate::determinant::{self, MAX_SIZE};
use crate::{stats, FilterInput, Filtered, Interval, IntervalSign, RoundingGuard, Sign};
use tracing::trace;

/// Interval pass under a rounding guard.
fn interval_pass<T: FilterInput, const N: usize>(m: &[[&Filtered<T>; N]; N]) -> IntervalSign {
    let _guard = RoundingGuard::upward();
    let approx: [[Interval; N]; N] =
        core::array::from_fn(|i| core::array::from_fn(|j| m[i][j].interval()));
    determinant::sign_of_determinant(&approx)
}

fn exact_pass<T: FilterInput, const N: usize>(m: &[[&Filtered<T>; N]; N]) -> Sign {
    let exact: [[T::Exact; N]; N] =
        core::array::from_fn(|i| core::array::from_fn(|j| m[i][j].exact().clone()));
    determinant::sign_of_determinant(&exact)
}

/// Sign of `det(m)`, certified by interval arithmetic when possible and
/// computed exactly otherwise. Always returns a definite sign.
pub fn sign_of_determinant<T: FilterInput, const N: usize>(m: &[[&Filtered<T>; N]; N]) -> Sign {
    const {
        assert!(N >= 2 && N <= MAX_SIZE, "sign_of_determinant: size must be in 2..=6");
    }

    match interval_pass(m) {
        IntervalSign::Definite(sign) => {
            stats::record(N, true);
            sign
        }
        IntervalSign::Indeterminate => {
            trace!(size = N, "interval filter inconclusive, evaluating exactly");
            let sign = exact_pass(m);
            stats::record(N, false);
            sign
        }
    }
}

/// Sign of `a - b`, filtered the same way as the determinants.
pub fn sign_of_difference<T: FilterInput>(a: &Filtered<T>, b: &Filtered<T>) -> Sign {
    let certified = {
        let _guard = RoundingGuard::upward();
        (a.interval() - b.interval()).sign()
    };
    match certified {
        IntervalSign::Definite(sign) => {
            stats::record(1, true);
            sign
        }
        IntervalSign::Indeterminate => {
            trace!("interval comparison inconclusive, comparing exactly");
            let sign = crate::DetScalar::sign(&(a.exact().clone() - b.exact().clone()));
            stats::record(1, false);
            sign
        }
    }
}

macro_rules! sized_entry_points {
    ($($(#[$attr:meta])* $name:ident => [$([$($a:ident),+]),+];)+) => {
        $(
            $(#[$attr])*
            #[allow(clippy::too_many_arguments)]
            pub fn $name<T: FilterInput>($($($a: &Filtered<T>),+),+) -> Sign {
                sign_of_determinant(&[$([$($a),+]),+])
            }
        )+
    };
}

sized_entry_points! {
    /// Sign of the 2×2 determinant with entries in row-major order.
    sign_of_determinant2x2 => [
        [a00, a01],
        [a10, a11]
    ];
    /// Sign of the 3×3 determinant with entries in row-major order.
    sign_of_determinant3x3 => [
        [a00, a01, a02],
        [a10, a11, a12],
        [a20, a21, a22]
    ];
    /// Sign of the 4×4 determinant with entries in row-major order.
    sign_of_determinant4x4 => [
        [a00, a01, a02, a03],
        [a10, a11, a12, a13],
        [a20, a21, a22, a23],
        [a30, a31, a32, a33]
    ];
    /// Sign of the 5×5 determinant with entries in row-major order.
    sign_of_determinant5x5 => [
        [a00, a01, a02, a03, a04],
        [a10, a11, a12, a13, a14],
        [a20, a21, a22, a23, a24],
        [a30, a31, a32, a33, a34],
        [a40, a41, a42, a43, a44]
    ];
    /// Sign of the 6×6 determinant with entries in row-major order.
    sign_of_determinant6x6 => [
        [a00, a01, a02, a03, a04, a05],
        [a10, a11, a12, a13, a14, a15],
        [a20, a21, a22, a23, a24, a25],
        [a30, a31, a32, a33, a34, a35],
        [a40, a41, a42, a43, a44, a45],
        [a50, a51, a52, a53, a54, a55]
    ];
}
