//! Exact geometric predicates on top of filtered determinants.
//!
//! These predicates give exact results for topological decisions
//! (point orientation, incircle/insphere) regardless of floating-point error.
//! Each one is the sign of a lifted matrix whose rows are the input points
//! extended with their squared norm and/or a constant 1; the interval pass
//! decides almost every call and exact arithmetic handles the rest.
//!
//! Points are arrays of [`Filtered`] coordinates, so a point shared between
//! calls builds its exact coordinates once. Sign conventions follow
//! Shewchuk's predicates.

use crate::{filter, ExactScalar, FilterInput, Filtered, Interval, Sign};

/// Entry of a lifted predicate matrix, borrowing the point it came from.
#[derive(Debug)]
enum Lifted<'a, T: FilterInput> {
    Coord(&'a Filtered<T>),
    SquaredNorm(&'a [Filtered<T>]),
    One,
}

impl<T: FilterInput> FilterInput for Lifted<'_, T> {
    type Exact = T::Exact;

    fn to_interval(&self) -> Interval {
        match self {
            Lifted::Coord(c) => c.interval(),
            Lifted::SquaredNorm(p) => p
                .iter()
                .fold(Interval::ZERO, |acc, c| acc + c.interval().square()),
            Lifted::One => Interval::ONE,
        }
    }

    fn to_exact(&self) -> T::Exact {
        match self {
            Lifted::Coord(c) => c.exact().clone(),
            Lifted::SquaredNorm(p) => {
                p.iter().fold(<T::Exact as ExactScalar>::from_i32(0), |acc, c| {
                    let e = c.exact().clone();
                    acc + e.clone() * e
                })
            }
            Lifted::One => <T::Exact as ExactScalar>::from_i32(1),
        }
    }
}

fn lifted_sign<T: FilterInput, const N: usize>(rows: [[Lifted<'_, T>; N]; N]) -> Sign {
    let entries = rows.map(|row| row.map(Filtered::new));
    let refs: [[&Filtered<Lifted<'_, T>>; N]; N] =
        core::array::from_fn(|i| core::array::from_fn(|j| &entries[i][j]));
    filter::sign_of_determinant(&refs)
}

/// `det [p_i | 1]` over `D + 1` points in `D` dimensions.
fn orientation<T: FilterInput, const D: usize, const N: usize>(
    points: [&[Filtered<T>; D]; N],
) -> Sign {
    const {
        assert!(N == D + 1, "orientation needs D + 1 points");
    }
    lifted_sign::<T, N>(core::array::from_fn(|i| {
        core::array::from_fn(|j| {
            if j < D {
                Lifted::Coord(&points[i][j])
            } else {
                Lifted::One
            }
        })
    }))
}

/// `det [p_i | |p_i|² | 1]` over `D + 2` points in `D` dimensions.
fn in_sphere<T: FilterInput, const D: usize, const N: usize>(
    points: [&[Filtered<T>; D]; N],
) -> Sign {
    const {
        assert!(N == D + 2, "in-sphere test needs D + 2 points");
    }
    lifted_sign::<T, N>(core::array::from_fn(|i| {
        core::array::from_fn(|j| {
            if j < D {
                Lifted::Coord(&points[i][j])
            } else if j == D {
                Lifted::SquaredNorm(&points[i][..])
            } else {
                Lifted::One
            }
        })
    }))
}

/// Orientation of point `c` relative to directed line `a → b`.
/// Positive = left (CCW), Negative = right (CW), Zero = collinear.
pub fn orient2d<T: FilterInput>(
    a: &[Filtered<T>; 2],
    b: &[Filtered<T>; 2],
    c: &[Filtered<T>; 2],
) -> Sign {
    orientation([a, b, c])
}

/// Orientation of point `d` relative to the plane through `a, b, c`.
/// Positive when `d` lies below the plane, i.e. `a, b, c` appear
/// counter-clockwise seen from above.
pub fn orient3d<T: FilterInput>(
    a: &[Filtered<T>; 3],
    b: &[Filtered<T>; 3],
    c: &[Filtered<T>; 3],
    d: &[Filtered<T>; 3],
) -> Sign {
    orientation([a, b, c, d])
}

/// Orientation of five points in four dimensions: sign of `det [p_i | 1]`.
pub fn orient4d<T: FilterInput>(
    a: &[Filtered<T>; 4],
    b: &[Filtered<T>; 4],
    c: &[Filtered<T>; 4],
    d: &[Filtered<T>; 4],
    e: &[Filtered<T>; 4],
) -> Sign {
    orientation([a, b, c, d, e])
}

/// Is point `d` inside the circumcircle of triangle `abc`?
/// Triangle must be CCW (positive orient2d).
pub fn incircle<T: FilterInput>(
    a: &[Filtered<T>; 2],
    b: &[Filtered<T>; 2],
    c: &[Filtered<T>; 2],
    d: &[Filtered<T>; 2],
) -> Sign {
    in_sphere([a, b, c, d])
}

/// Is point `e` inside the circumsphere of tetrahedron `abcd`?
/// The tetrahedron must have positive orient3d.
pub fn insphere<T: FilterInput>(
    a: &[Filtered<T>; 3],
    b: &[Filtered<T>; 3],
    c: &[Filtered<T>; 3],
    d: &[Filtered<T>; 3],
    e: &[Filtered<T>; 3],
) -> Sign {
    in_sphere([a, b, c, d, e])
}

/// Is point `f` inside the circumsphere of the 4-simplex `abcde`?
/// The simplex must have positive orient4d.
pub fn insphere4d<T: FilterInput>(
    a: &[Filtered<T>; 4],
    b: &[Filtered<T>; 4],
    c: &[Filtered<T>; 4],
    d: &[Filtered<T>; 4],
    e: &[Filtered<T>; 4],
    f: &[Filtered<T>; 4],
) -> Sign {
    in_sphere([a, b, c, d, e, f])
}

// Derived predicates

pub fn are_collinear_2d<T: FilterInput>(
    a: &[Filtered<T>; 2],
    b: &[Filtered<T>; 2],
    c: &[Filtered<T>; 2],
) -> bool {
    orient2d(a, b, c).is_zero()
}

pub fn are_coplanar<T: FilterInput>(
    a: &[Filtered<T>; 3],
    b: &[Filtered<T>; 3],
    c: &[Filtered<T>; 3],
    d: &[Filtered<T>; 3],
) -> bool {
    orient3d(a, b, c, d).is_zero()
}

/// Does `p` lie on the closed segment `ab`?
pub fn point_on_segment_2d<T: FilterInput>(
    p: &[Filtered<T>; 2],
    a: &[Filtered<T>; 2],
    b: &[Filtered<T>; 2],
) -> bool {
    if !orient2d(a, b, p).is_zero() {
        return false;
    }
    // between the endpoints on both axes
    (0..2).all(|k| {
        let from_a = filter::sign_of_difference(&p[k], &a[k]);
        let from_b = filter::sign_of_difference(&p[k], &b[k]);
        from_a * from_b != Sign::Positive
    })
}
