//! Per-thread filter counters.
//!
//! Every filtered evaluation records whether the interval pass certified the
//! sign or the exact pass had to run. Index `n` holds the counts for `n × n`
//! determinants; index 1 counts filtered comparisons.

use crate::determinant::MAX_SIZE;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterStats {
    /// Calls answered by the interval pass, by size.
    pub certified: [u64; MAX_SIZE + 1],
    /// Calls that fell back to exact arithmetic, by size.
    pub exact: [u64; MAX_SIZE + 1],
}

impl FilterStats {
    pub fn calls(&self, size: usize) -> u64 {
        self.certified[size] + self.exact[size]
    }

    pub fn total_calls(&self) -> u64 {
        self.certified.iter().sum::<u64>() + self.exact.iter().sum::<u64>()
    }

    pub fn total_fallbacks(&self) -> u64 {
        self.exact.iter().sum()
    }

    /// Share of calls that needed the exact pass, 0 when nothing ran.
    pub fn fallback_ratio(&self) -> f64 {
        let total = self.total_calls();
        if total == 0 {
            0.0
        } else {
            self.total_fallbacks() as f64 / total as f64
        }
    }
}

thread_local! {
    static STATS: Cell<FilterStats> = const {
        Cell::new(FilterStats {
            certified: [0; MAX_SIZE + 1],
            exact: [0; MAX_SIZE + 1],
        })
    };
}

/// Counters of the calling thread.
pub fn snapshot() -> FilterStats {
    STATS.with(Cell::get)
}

/// Zero the calling thread's counters.
pub fn reset() {
    STATS.with(|s| s.set(FilterStats::default()));
}

pub(crate) fn record(size: usize, certified: bool) {
    STATS.with(|s| {
        let mut stats = s.get();
        if certified {
            stats.certified[size] += 1;
        } else {
            stats.exact[size] += 1;
        }
        s.set(stats);
    });
}
