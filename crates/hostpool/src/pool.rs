//! The free-interval range pool.
//!
//! [`RangePool`] hands out identifiers from `[1, upper_bound]`. Only the free
//! identifiers are stored, as a sorted run of disjoint, non-adjacent
//! [`Interval`]s:
//!
//! ```text
//! upper_bound = 254, allocated = {1, 2, 3, 99, 100}
//!
//!   1 2 3 4 ............ 98 99 100 101 ............ 254
//!   x x x [ free           ] x   x  [ free            ]
//!          (4, 98)                   (101, 254)
//! ```
//!
//! Allocation shrinks, splits, or drops the interval holding the identifier.
//! Release inserts a singleton and fuses it with any neighbour it touches, so
//! the run is always maximally merged.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::error::{ConfigError, PoolError};
use crate::interval::Interval;

/// Allocator over the identifiers `[1, upper_bound]`.
///
/// Between calls the free list satisfies:
///
/// - sorted ascending by start;
/// - for consecutive `a`, `b`: `a.end() + 1 < b.start()` (disjoint and never
///   adjacent);
/// - every bound lies within `[1, upper_bound]`.
///
/// Every operation either commits in full or leaves the pool untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct RangePool {
    /// Free intervals, front = lowest identifiers.
    intervals: VecDeque<Interval>,
    upper_bound: u32,
}

impl RangePool {
    /// Create a pool with every identifier in `[1, upper_bound]` free.
    pub fn new(upper_bound: u32) -> Result<Self, ConfigError> {
        Self::with_config(PoolConfig::new(upper_bound))
    }

    /// Create a pool from a validated [`PoolConfig`].
    pub fn with_config(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fully_free(config.upper_bound))
    }

    fn fully_free(upper_bound: u32) -> Self {
        let mut intervals = VecDeque::with_capacity(4);
        intervals.push_back(Interval {
            start: 1,
            end: upper_bound,
        });
        Self {
            intervals,
            upper_bound,
        }
    }

    /// Allocate the smallest free identifier, or `None` if the pool is
    /// exhausted. Only the first interval is touched.
    pub fn allocate_lowest(&mut self) -> Option<u32> {
        let first = self.intervals.front_mut()?;
        let num = first.start;
        if first.is_singleton() {
            self.intervals.pop_front();
        } else {
            first.start += 1;
        }
        trace!(num, "allocated lowest identifier");
        Some(num)
    }

    /// Allocate a specific identifier.
    ///
    /// Returns `Some(num)` if it was free, `None` if it was already allocated
    /// or lies outside `[1, upper_bound]`. See [`try_allocate`] for the
    /// reason of a rejection.
    ///
    /// [`try_allocate`]: RangePool::try_allocate
    pub fn allocate(&mut self, num: u32) -> Option<u32> {
        self.try_allocate(num).ok()
    }

    /// Allocate a specific identifier, reporting why it could not be taken.
    pub fn try_allocate(&mut self, num: u32) -> Result<u32, PoolError> {
        self.check_range(num)?;
        let idx = self.position(num);
        let Some(&iv) = self.intervals.get(idx).filter(|iv| iv.start <= num) else {
            return reject(PoolError::NotFree { num });
        };

        match (num == iv.start, num == iv.end) {
            (true, true) => {
                self.intervals.remove(idx);
            }
            (true, false) => self.intervals[idx].start = num + 1,
            (false, true) => self.intervals[idx].end = num - 1,
            (false, false) => {
                self.intervals[idx].end = num - 1;
                self.intervals.insert(
                    idx + 1,
                    Interval {
                        start: num + 1,
                        end: iv.end,
                    },
                );
            }
        }
        trace!(num, "allocated identifier");
        Ok(num)
    }

    /// Return an identifier to the pool.
    ///
    /// `Ok(true)` when `num` was inserted (and merged with its neighbours),
    /// `Ok(false)` when it was already free or out of range.
    ///
    /// # Errors
    ///
    /// [`PoolError::Exhausted`] if the pool holds no free intervals at all.
    /// That state has no trailing interval to anchor the release against and
    /// is treated as a caller contract violation.
    pub fn release(&mut self, num: u32) -> Result<bool, PoolError> {
        match self.try_release(num) {
            Ok(()) => Ok(true),
            Err(PoolError::Exhausted) => Err(PoolError::Exhausted),
            Err(_) => Ok(false),
        }
    }

    /// Return an identifier to the pool, reporting why it was refused.
    ///
    /// Double release is rejected with [`PoolError::AlreadyFree`].
    pub fn try_release(&mut self, num: u32) -> Result<(), PoolError> {
        if self.intervals.is_empty() {
            return reject(PoolError::Exhausted);
        }
        self.check_range(num)?;
        let idx = self.position(num);
        if self.intervals.get(idx).is_some_and(|iv| iv.start <= num) {
            return reject(PoolError::AlreadyFree { num });
        }

        // `num` sits in the gap before `idx`; prev.end < num < next.start.
        let joins_prev = idx > 0 && self.intervals[idx - 1].end + 1 == num;
        let fused_next = self
            .intervals
            .get(idx)
            .copied()
            .filter(|next| next.start - 1 == num);
        let joins_next = fused_next.is_some();

        match (joins_prev, fused_next) {
            (true, Some(next)) => {
                self.intervals[idx - 1].end = next.end;
                self.intervals.remove(idx);
            }
            (true, None) => self.intervals[idx - 1].end = num,
            (false, Some(_)) => self.intervals[idx].start = num,
            (false, None) => self.intervals.insert(idx, Interval::singleton(num)),
        }
        trace!(num, joins_prev, joins_next, "released identifier");
        Ok(())
    }

    /// Move the upper bound by rewriting the trailing free interval.
    ///
    /// Returns `false` (no change) if `border` falls below the start of the
    /// last free interval or the pool has no free intervals.
    pub fn set_upper_bound(&mut self, border: u32) -> bool {
        self.try_set_upper_bound(border).is_ok()
    }

    /// Move the upper bound, reporting why it was refused.
    ///
    /// Only the literal last free interval is adjusted: it becomes
    /// `[tail.start, border]`. If identifiers at the old tail are allocated,
    /// growing the bound stretches the last free interval over them.
    pub fn try_set_upper_bound(&mut self, border: u32) -> Result<(), PoolError> {
        let Some(tail) = self.intervals.back_mut() else {
            return reject(PoolError::Exhausted);
        };
        if tail.start > border {
            let tail_start = tail.start;
            return reject(PoolError::ResizeRejected { border, tail_start });
        }
        tail.end = border;
        let previous = std::mem::replace(&mut self.upper_bound, border);
        debug!(from = previous, to = border, "upper bound moved");
        Ok(())
    }

    /// Current highest allocatable identifier.
    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    /// Whether `num` is currently free.
    pub fn is_free(&self, num: u32) -> bool {
        self.intervals
            .get(self.position(num))
            .is_some_and(|iv| iv.start <= num)
    }

    /// Whether no identifier is free.
    pub fn is_exhausted(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Total number of free identifiers.
    pub fn free_count(&self) -> u64 {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Number of identifiers in `[1, upper_bound]` that are not free.
    pub fn allocated_count(&self) -> u64 {
        u64::from(self.upper_bound).saturating_sub(self.free_count())
    }

    /// Number of free intervals (a fragmentation measure).
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Free intervals in ascending order.
    pub fn intervals(&self) -> impl ExactSizeIterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    /// Free intervals as `(start, end)` pairs.
    pub fn to_pairs(&self) -> Vec<(u32, u32)> {
        self.intervals().map(Into::into).collect()
    }

    fn check_range(&self, num: u32) -> Result<(), PoolError> {
        if num == 0 || num > self.upper_bound {
            return reject(PoolError::OutOfRange {
                num,
                upper_bound: self.upper_bound,
            });
        }
        Ok(())
    }

    /// Index of the first interval whose end is not below `num`.
    fn position(&self, num: u32) -> usize {
        self.intervals.partition_point(|iv| iv.end < num)
    }
}

fn reject<T>(err: PoolError) -> Result<T, PoolError> {
    debug!(%err, "pool operation rejected");
    Err(err)
}

impl Default for RangePool {
    fn default() -> Self {
        Self::fully_free(PoolConfig::DEFAULT_UPPER_BOUND)
    }
}

impl fmt::Debug for RangePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangePool")
            .field("upper_bound", &self.upper_bound)
            .field("free", &self.intervals)
            .finish()
    }
}

impl fmt::Display for RangePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return f.write_str("-");
        }
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{iv}")?;
        }
        Ok(())
    }
}
