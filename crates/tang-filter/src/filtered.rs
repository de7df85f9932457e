use crate::{FilterError, FilterInput, Interval};
use std::sync::OnceLock;

/// A caller's value together with its two representations.
///
/// The interval enclosure is computed once, at construction, and never
/// changes. The exact value is built from the original input the first time
/// [`exact`](Self::exact) is called and cached for the life of the wrapper.
/// The cache is a [`OnceLock`]: even with concurrent callers the exact value
/// is constructed at most once and every reader sees the same value.
///
/// # Example
/// ```
/// use tang_filter::Filtered;
///
/// let x = Filtered::new(0.1_f64);
/// assert!(x.interval().contains(0.1));
/// assert!(!x.is_exact_cached());
/// let _ = x.exact();
/// assert!(x.is_exact_cached());
/// ```
#[derive(Clone, Debug)]
pub struct Filtered<T: FilterInput> {
    value: T,
    interval: Interval,
    exact: OnceLock<T::Exact>,
}

impl<T: FilterInput> Filtered<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        let interval = value.to_interval();
        Self {
            value,
            interval,
            exact: OnceLock::new(),
        }
    }

    /// Like [`new`](Self::new), but rejects values with no exact
    /// representation (NaN, infinities).
    pub fn try_new(value: T) -> Result<Self, FilterError> {
        value.validate()?;
        Ok(Self::new(value))
    }

    /// The value as supplied.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Exact value, built on first use.
    pub fn exact(&self) -> &T::Exact {
        self.exact.get_or_init(|| self.value.to_exact())
    }

    pub fn is_exact_cached(&self) -> bool {
        self.exact.get().is_some()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: FilterInput> From<T> for Filtered<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Wrap every coordinate of a point.
pub fn filtered_point<T: FilterInput, const D: usize>(coords: [T; D]) -> [Filtered<T>; D] {
    coords.map(Filtered::new)
}
