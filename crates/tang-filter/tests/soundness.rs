use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tang_filter::{stats, DetScalar, FilteredMatrix, Sign};

const TRIALS: usize = 200;

fn random_rows<const N: usize>(rng: &mut StdRng) -> [[f64; N]; N] {
    core::array::from_fn(|_| core::array::from_fn(|_| rng.random_range(-1.0..1.0)))
}

/// Last row replaced by a floating-point combination of two others: nearly
/// singular, with a determinant of the order of the rounding error.
fn nearly_singular_rows<const N: usize>(rng: &mut StdRng) -> [[f64; N]; N] {
    let mut rows = random_rows::<N>(rng);
    let t: f64 = rng.random_range(0.1..0.9);
    for c in 0..N {
        rows[N - 1][c] = if N == 2 {
            t * rows[0][c]
        } else {
            t * rows[0][c] + (1.0 - t) * rows[1][c]
        };
    }
    rows
}

/// Small integers with the last row an exact integer combination.
fn singular_rows<const N: usize>(rng: &mut StdRng) -> [[f64; N]; N] {
    let mut rows: [[f64; N]; N] =
        core::array::from_fn(|_| core::array::from_fn(|_| rng.random_range(-20..=20) as f64));
    let (p, q) = (rng.random_range(-3..=3) as f64, rng.random_range(-3..=3) as f64);
    for c in 0..N {
        // with two rows, row 1 is the last row and may only depend on row 0
        rows[N - 1][c] = if N == 2 {
            p * rows[0][c]
        } else {
            p * rows[0][c] + q * rows[1][c]
        };
    }
    rows
}

/// Checks one matrix. Returns whether the interval pass certified it.
fn check<const N: usize>(rows: [[f64; N]; N]) -> bool {
    let m = FilteredMatrix::new(rows);
    let exact = m.exact_determinant().sign();
    let interval = m.interval_determinant().sign();
    if let Some(certified) = interval.definite() {
        assert_eq!(certified, exact, "interval pass claimed {certified} for {rows:?}");
    }
    assert_eq!(m.sign_of_determinant(), exact, "filtered sign wrong for {rows:?}");
    interval.definite().is_some()
}

fn sweep<const N: usize>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut certified = 0;
    for _ in 0..TRIALS {
        if check(random_rows::<N>(&mut rng)) {
            certified += 1;
        }
        check(nearly_singular_rows::<N>(&mut rng));

        let rows = singular_rows::<N>(&mut rng);
        check(rows);
        assert_eq!(FilteredMatrix::new(rows).sign_of_determinant(), Sign::Zero);
    }
    // well-conditioned random matrices almost never need the exact pass
    assert!(certified > TRIALS * 9 / 10, "only {certified}/{TRIALS} certified for N = {N}");
}

#[test]
fn test_sweep_2x2() {
    sweep::<2>(2);
}

#[test]
fn test_sweep_3x3() {
    sweep::<3>(3);
}

#[test]
fn test_sweep_4x4() {
    sweep::<4>(4);
}

#[test]
fn test_sweep_5x5() {
    sweep::<5>(5);
}

#[test]
fn test_sweep_6x6() {
    sweep::<6>(6);
}

#[test]
fn test_singular_generators_are_singular_for_every_size() {
    fn exact_sign<const N: usize>(rows: [[f64; N]; N]) -> Sign {
        FilteredMatrix::new(rows).exact_determinant().sign()
    }
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        assert_eq!(exact_sign(singular_rows::<2>(&mut rng)), Sign::Zero);
        assert_eq!(exact_sign(singular_rows::<3>(&mut rng)), Sign::Zero);
        assert_eq!(exact_sign(singular_rows::<6>(&mut rng)), Sign::Zero);
    }
}

#[test]
fn test_fallback_ratio_is_small_for_random_input() {
    stats::reset();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..TRIALS {
        FilteredMatrix::new(random_rows::<4>(&mut rng)).sign_of_determinant();
    }
    let s = stats::snapshot();
    assert_eq!(s.calls(4), TRIALS as u64);
    assert!(s.fallback_ratio() < 0.1, "fallback ratio {}", s.fallback_ratio());
}
