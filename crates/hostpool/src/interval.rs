//! Closed identifier intervals.
//!
//! An [`Interval`] is a contiguous block `[start, end]` of free identifiers.
//! The pool stores a sorted run of them; the type itself only guarantees
//! `start <= end`.

use std::fmt;

/// A closed range `[start, end]` of free identifiers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl Interval {
    /// Create an interval, or `None` if `start > end`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// The one-element interval `[num, num]`.
    pub fn singleton(num: u32) -> Self {
        Self {
            start: num,
            end: num,
        }
    }

    /// First identifier in the interval.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last identifier in the interval (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of identifiers covered. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    /// Whether the interval covers exactly one identifier.
    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }

    /// Whether `num` lies within `[start, end]`.
    pub fn contains(&self, num: u32) -> bool {
        self.start <= num && num <= self.end
    }

    /// Whether `next` begins immediately after this interval ends, so the
    /// two can be fused into one.
    pub fn is_adjacent_to(&self, next: &Interval) -> bool {
        next.start > self.end && next.start - self.end == 1
    }
}

impl From<Interval> for (u32, u32) {
    fn from(iv: Interval) -> Self {
        (iv.start, iv.end)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_singleton() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
