//! Fixed-shape determinant expansion, generic over the scalar type.
//!
//! One routine covers every size up to [`MAX_SIZE`]. Minors are expanded
//! bottom-up over column subsets: the minor on columns `c_0 < … < c_{k-1}`
//! uses rows `N-k .. N`, and is
//!
//! ```text
//! minor(C) = Σ_j (-1)^j · a[N-k][c_j] · minor(C \ {c_j})
//! ```
//!
//! Every subset minor is formed exactly once, so the number of `+ - *`
//! operations depends only on `N` (never on the values), and the interval
//! and exact passes evaluate literally the same expression.

use crate::DetScalar;

/// Largest supported matrix size.
pub const MAX_SIZE: usize = 6;

/// Number of column subsets of a `MAX_SIZE`-column matrix.
const SUBSETS: usize = 1 << MAX_SIZE;

/// `det(m)`, evaluated in `S`.
///
/// ```
/// use tang_filter::determinant::determinant;
///
/// let m = [[2.0, 1.0], [4.0, 3.0]];
/// assert_eq!(determinant(&m), 2.0);
/// ```
pub fn determinant<S: DetScalar, const N: usize>(m: &[[S; N]; N]) -> S {
    const {
        assert!(N >= 1 && N <= MAX_SIZE, "determinant: size must be in 1..=6");
    }

    // minors[mask] = minor on the columns in `mask`, bottom rows.
    let mut minors: [Option<S>; SUBSETS] = core::array::from_fn(|_| None);

    // Removing a column gives a numerically smaller mask, so visiting masks
    // in increasing order always finds the sub-minors ready.
    for mask in 1..(1usize << N) {
        let row = N - mask.count_ones() as usize;
        let mut acc: Option<S> = None;
        for (j, col) in (0..N).filter(|c| mask & (1 << c) != 0).enumerate() {
            let entry = &m[row][col];
            let rest = mask & !(1 << col);
            let term = if rest == 0 {
                entry.clone()
            } else {
                let Some(sub) = minors[rest].as_ref() else {
                    unreachable!("minor {rest:#b} visited before {mask:#b}");
                };
                entry.mul_ref(sub)
            };
            acc = Some(match acc {
                None => term,
                Some(a) if j % 2 == 0 => a + term,
                Some(a) => a - term,
            });
        }
        minors[mask] = acc;
    }

    match minors[(1 << N) - 1].take() {
        Some(det) => det,
        None => unreachable!("full minor always computed"),
    }
}

/// `sign(det(m))` in `S`'s notion of sign.
pub fn sign_of_determinant<S: DetScalar, const N: usize>(m: &[[S; N]; N]) -> S::Sign {
    determinant(m).sign()
}

/// Number of multiplications the expansion performs for size `n`.
pub const fn multiplications(n: usize) -> usize {
    // Σ_{k=2..n} C(n, k) · k
    let mut total = 0;
    let mut k = 2;
    while k <= n {
        total += binomial(n, k) * k;
        k += 1;
    }
    total
}

const fn binomial(n: usize, k: usize) -> usize {
    let mut r = 1;
    let mut i = 0;
    while i < k {
        r = r * (n - i) / (i + 1);
        i += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Interval, IntervalSign, Sign};
    use num_bigint::BigInt;
    use num_traits::Zero;

    /// Leibniz formula over all permutations, as an independent reference.
    fn leibniz<const N: usize>(m: &[[i64; N]; N]) -> BigInt {
        fn permute(
            rest: &mut Vec<usize>,
            chosen: &mut Vec<usize>,
            out: &mut Vec<(Vec<usize>, bool)>,
            odd: bool,
        ) {
            if rest.is_empty() {
                out.push((chosen.clone(), odd));
                return;
            }
            for i in 0..rest.len() {
                let c = rest.remove(i);
                chosen.push(c);
                permute(rest, chosen, out, odd ^ (i % 2 == 1));
                chosen.pop();
                rest.insert(i, c);
            }
        }
        let mut perms = Vec::new();
        permute(&mut (0..N).collect(), &mut Vec::new(), &mut perms, false);
        let mut total = BigInt::zero();
        for (perm, odd) in perms {
            let mut term = BigInt::from(1);
            for (row, &col) in perm.iter().enumerate() {
                term *= m[row][col];
            }
            if odd {
                total -= term;
            } else {
                total += term;
            }
        }
        total
    }

    fn to_bigint<const N: usize>(m: &[[i64; N]; N]) -> [[BigInt; N]; N] {
        core::array::from_fn(|i| core::array::from_fn(|j| BigInt::from(m[i][j])))
    }

    #[test]
    fn small_closed_forms() {
        assert_eq!(determinant(&[[7.0]]), 7.0);
        assert_eq!(determinant(&[[1.0, 2.0], [3.0, 4.0]]), -2.0);
        let m3 = [[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]];
        // 2(3-2) - 0 + 1(1-3) = 0
        assert_eq!(determinant(&m3), 0.0);
    }

    #[test]
    fn matches_leibniz_up_to_six() {
        let m4 = [[3, -1, 4, 1], [5, 9, -2, 6], [5, 3, 5, -8], [9, 7, 9, 3]];
        assert_eq!(determinant(&to_bigint(&m4)), leibniz(&m4));

        let m5 = [
            [2, 7, 1, 8, 2],
            [8, -1, 8, 2, 8],
            [4, 5, 9, 0, 4],
            [-5, 2, 3, 5, 3],
            [6, 0, 2, -8, 7],
        ];
        assert_eq!(determinant(&to_bigint(&m5)), leibniz(&m5));

        let m6 = [
            [1, 4, 1, 4, 2, 1],
            [3, 5, 6, -2, 3, 7],
            [3, 0, 9, 5, 0, 2],
            [8, 8, -4, 1, 9, 7],
            [1, 6, 9, 3, 9, -9],
            [3, 7, 5, 1, 0, 5],
        ];
        assert_eq!(determinant(&to_bigint(&m6)), leibniz(&m6));
    }

    #[test]
    fn identical_rows_give_exact_zero() {
        let m = [[1, 2, 3, 4], [5, 6, 7, 8], [1, 2, 3, 4], [0, 1, 0, 1]];
        assert_eq!(sign_of_determinant(&to_bigint(&m)), Sign::Zero);
    }

    #[test]
    fn interval_expansion_encloses_exact() {
        let m = [[0.1, 0.7, 0.2], [0.3, 0.5, 0.9], [0.6, 0.4, 0.8]];
        let iv: [[Interval; 3]; 3] =
            core::array::from_fn(|i| core::array::from_fn(|j| Interval::point(m[i][j])));
        let det = determinant(&iv);
        assert!(det.contains(determinant(&m)));
        assert_eq!(det.sign(), IntervalSign::Definite(Sign::from_f64(determinant(&m))));
    }

    /// Integer scalar that counts its clones.
    #[derive(Debug, PartialEq)]
    struct Tracked(i64);

    thread_local! {
        static CLONES: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            CLONES.with(|c| c.set(c.get() + 1));
            Tracked(self.0)
        }
    }

    impl core::ops::Add for Tracked {
        type Output = Self;
        fn add(self, rhs: Self) -> Self {
            Tracked(self.0 + rhs.0)
        }
    }

    impl core::ops::Sub for Tracked {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self {
            Tracked(self.0 - rhs.0)
        }
    }

    impl core::ops::Mul for Tracked {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self {
            Tracked(self.0 * rhs.0)
        }
    }

    impl DetScalar for Tracked {
        type Sign = Sign;
        fn sign(&self) -> Sign {
            Sign::from_ordering(self.0.cmp(&0))
        }
        fn mul_ref(&self, rhs: &Self) -> Self {
            Tracked(self.0 * rhs.0)
        }
    }

    #[test]
    fn expansion_clones_only_bottom_row_entries() {
        let m = [
            [2, 7, 1, 8, 2],
            [8, -1, 8, 2, 8],
            [4, 5, 9, 0, 4],
            [-5, 2, 3, 5, 3],
            [6, 0, 2, -8, 7],
        ];
        let tracked = m.map(|row| row.map(Tracked));
        CLONES.with(|c| c.set(0));
        let det = determinant(&tracked);
        assert_eq!(BigInt::from(det.0), leibniz(&m));
        // only the 1×1 minors copy an entry
        assert_eq!(CLONES.with(|c| c.get()), 5);
    }

    #[test]
    fn operation_counts() {
        assert_eq!(multiplications(2), 2);
        assert_eq!(multiplications(3), 9);
        assert_eq!(multiplications(4), 28);
        assert_eq!(multiplications(6), 186);
    }
}
