use crate::determinant::{self, MAX_SIZE};
use crate::{filter, FilterError, FilterInput, Filtered, Interval, RoundingGuard, Sign};
use tracing::debug;

/// N×N matrix of filtered entries, built for one predicate call.
///
/// Entries are independent: each owns its interval and exact caches.
///
/// # Example
/// ```
/// use tang_filter::{FilteredMatrix, Sign};
///
/// let m = FilteredMatrix::new([[2, 0, 0], [0, 3, 0], [0, 0, -1]]);
/// assert_eq!(m.sign_of_determinant(), Sign::Negative);
/// ```
#[derive(Clone, Debug)]
pub struct FilteredMatrix<T: FilterInput, const N: usize> {
    entries: [[Filtered<T>; N]; N],
}

impl<T: FilterInput, const N: usize> FilteredMatrix<T, N> {
    pub fn new(rows: [[T; N]; N]) -> Self {
        const {
            assert!(N >= 2 && N <= MAX_SIZE, "FilteredMatrix: size must be in 2..=6");
        }
        Self {
            entries: rows.map(|row| row.map(Filtered::new)),
        }
    }

    /// Build from row data of unknown shape, validating every entry.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, FilterError> {
        if rows.len() != N {
            debug!(expected = N, got = rows.len(), "rejecting determinant rows");
            return Err(FilterError::DimensionMismatch {
                expected: N,
                got: rows.len(),
            });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != N) {
            debug!(row, expected = N, got = r.len(), "rejecting ragged determinant row");
            return Err(FilterError::RaggedRow {
                row,
                expected: N,
                got: r.len(),
            });
        }
        for value in rows.iter().flatten() {
            value.validate()?;
        }

        let mut fixed: Vec<[T; N]> = Vec::with_capacity(N);
        for (row, r) in rows.into_iter().enumerate() {
            let got = r.len();
            let r: [T; N] = r.try_into().map_err(|_| FilterError::RaggedRow {
                row,
                expected: N,
                got,
            })?;
            fixed.push(r);
        }
        let got = fixed.len();
        let rows: [[T; N]; N] = fixed
            .try_into()
            .map_err(|_| FilterError::DimensionMismatch { expected: N, got })?;
        Ok(Self::new(rows))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &Filtered<T> {
        &self.entries[row][col]
    }

    pub fn rows(&self) -> &[[Filtered<T>; N]; N] {
        &self.entries
    }

    fn refs(&self) -> [[&Filtered<T>; N]; N] {
        core::array::from_fn(|i| core::array::from_fn(|j| &self.entries[i][j]))
    }

    /// Filtered sign of the determinant.
    pub fn sign_of_determinant(&self) -> Sign {
        filter::sign_of_determinant(&self.refs())
    }

    /// Interval enclosure of the determinant, without fallback.
    pub fn interval_determinant(&self) -> Interval {
        let _guard = RoundingGuard::upward();
        let approx: [[Interval; N]; N] =
            core::array::from_fn(|i| core::array::from_fn(|j| self.entries[i][j].interval()));
        determinant::determinant(&approx)
    }

    /// Exact value of the determinant. Builds every entry's exact value.
    pub fn exact_determinant(&self) -> T::Exact {
        let exact: [[T::Exact; N]; N] =
            core::array::from_fn(|i| core::array::from_fn(|j| self.entries[i][j].exact().clone()));
        determinant::determinant(&exact)
    }
}
