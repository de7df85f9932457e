//! tang-filter — Filtered exact determinant signs
//!
//! Decides the sign of 2×2 … 6×6 determinants, the core of orientation and
//! incircle/insphere predicates, fast and without wrong answers near
//! degeneracies. Each call first evaluates the determinant in interval
//! arithmetic; only when the resulting interval straddles zero does it rerun
//! the same expansion in exact (`num-bigint`/`num-rational`) arithmetic.
//!
//! # Design principles
//! - One determinant expansion, generic over the scalar (`Interval`, exact
//!   types, `f64`): both passes evaluate literally the same expression
//! - Indeterminate is a return value (`IntervalSign`), never an error
//! - Rounding mode changes are scoped (`RoundingGuard`), restored on drop
//! - Exact values are built lazily, at most once per `Filtered` input
//!
//! ```
//! use tang_filter::{sign_of_determinant2x2, Filtered, Sign};
//!
//! let [a, b, c, d] = [2.0, 0.0, 0.0, 3.0].map(Filtered::new);
//! assert_eq!(sign_of_determinant2x2(&a, &b, &c, &d), Sign::Positive);
//! ```

mod error;
mod exact;
mod filter;
mod filtered;
mod input;
mod interval;
mod matrix;
mod rounding;
mod scalar;
mod sign;

pub mod determinant;
pub mod predicates;
pub mod stats;

pub use error::FilterError;
pub use exact::ExactScalar;
pub use filter::{
    sign_of_determinant, sign_of_determinant2x2, sign_of_determinant3x3, sign_of_determinant4x4,
    sign_of_determinant5x5, sign_of_determinant6x6, sign_of_difference,
};
pub use filtered::{filtered_point, Filtered};
pub use input::FilterInput;
pub use interval::Interval;
pub use matrix::FilteredMatrix;
pub use rounding::{rounding_mode, RoundingGuard, RoundingMode, ROUNDING_CONTROL_SUPPORTED};
pub use scalar::DetScalar;
pub use sign::{IntervalSign, Sign};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
