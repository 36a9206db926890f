//! Test utilities and reference models for hostpool development.
//!
//! Provides an invariant checker for [`RangePool`], a [`ModelPool`] oracle
//! backed by a `BTreeSet` for differential testing, and a proptest
//! [`PoolOp`] strategy covering every pool operation. Ready-made pool
//! states live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

use hostpool::{PoolError, RangePool};
use proptest::prelude::*;

/// Panic unless `pool`'s free list is sorted, disjoint, maximally merged,
/// and within `[1, upper_bound]`.
pub fn assert_invariants(pool: &RangePool) {
    let ivs: Vec<_> = pool.intervals().collect();
    for iv in &ivs {
        assert!(
            iv.start() >= 1 && iv.end() <= pool.upper_bound(),
            "interval {iv:?} escapes [1, {}]: {pool:?}",
            pool.upper_bound()
        );
    }
    for pair in ivs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.end() < b.start(), "overlapping {a:?} {b:?}: {pool:?}");
        assert!(!a.is_adjacent_to(&b), "unmerged {a:?} {b:?}: {pool:?}");
    }
}

/// Naive reference pool: the free set as a `BTreeSet`.
///
/// Implements the same observable semantics as [`RangePool`] for every
/// operation, in the most obvious way.
#[derive(Clone, Debug)]
pub struct ModelPool {
    free: BTreeSet<u32>,
    upper_bound: u32,
}

impl ModelPool {
    pub fn new(upper_bound: u32) -> Self {
        Self {
            free: (1..=upper_bound).collect(),
            upper_bound,
        }
    }

    pub fn allocate_lowest(&mut self) -> Option<u32> {
        self.free.pop_first()
    }

    pub fn allocate(&mut self, num: u32) -> Option<u32> {
        self.free.remove(&num).then_some(num)
    }

    pub fn release(&mut self, num: u32) -> Result<bool, PoolError> {
        if self.free.is_empty() {
            return Err(PoolError::Exhausted);
        }
        if num == 0 || num > self.upper_bound {
            return Ok(false);
        }
        Ok(self.free.insert(num))
    }

    /// Move the bound by rewriting only the last run of free identifiers:
    /// rejected below that run's start, otherwise the run becomes
    /// `[run_start, border]`.
    pub fn set_upper_bound(&mut self, border: u32) -> bool {
        let Some(run_start) = self.last_run_start() else {
            return false;
        };
        if run_start > border {
            return false;
        }
        self.free.retain(|&n| n <= border);
        self.free.extend(run_start..=border);
        self.upper_bound = border;
        true
    }

    fn last_run_start(&self) -> Option<u32> {
        let mut iter = self.free.iter().rev();
        let mut start = *iter.next()?;
        for &n in iter {
            if n + 1 != start {
                break;
            }
            start = n;
        }
        Some(start)
    }

    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    /// Collapse the free set into `(start, end)` runs.
    pub fn to_pairs(&self) -> Vec<(u32, u32)> {
        let mut pairs: Vec<(u32, u32)> = Vec::new();
        for &n in &self.free {
            match pairs.last_mut() {
                Some((_, end)) if *end + 1 == n => *end = n,
                _ => pairs.push((n, n)),
            }
        }
        pairs
    }

    pub fn free_count(&self) -> u64 {
        self.free.len() as u64
    }
}

/// One caller-issued pool operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolOp {
    AllocateLowest,
    Allocate(u32),
    Release(u32),
    SetUpperBound(u32),
}

/// Outcome of a [`PoolOp`], comparable across implementations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpOutcome {
    Allocated(Option<u32>),
    Released(Result<bool, PoolError>),
    Resized(bool),
}

impl PoolOp {
    pub fn apply(self, pool: &mut RangePool) -> OpOutcome {
        match self {
            Self::AllocateLowest => OpOutcome::Allocated(pool.allocate_lowest()),
            Self::Allocate(n) => OpOutcome::Allocated(pool.allocate(n)),
            Self::Release(n) => OpOutcome::Released(pool.release(n)),
            Self::SetUpperBound(b) => OpOutcome::Resized(pool.set_upper_bound(b)),
        }
    }

    pub fn apply_model(self, model: &mut ModelPool) -> OpOutcome {
        match self {
            Self::AllocateLowest => OpOutcome::Allocated(model.allocate_lowest()),
            Self::Allocate(n) => OpOutcome::Allocated(model.allocate(n)),
            Self::Release(n) => OpOutcome::Released(model.release(n)),
            Self::SetUpperBound(b) => OpOutcome::Resized(model.set_upper_bound(b)),
        }
    }
}

/// Strategy over [`PoolOp`]s whose identifiers straddle `[0, upper_bound + 2]`
/// so out-of-range inputs are exercised too.
pub fn pool_op(upper_bound: u32) -> impl Strategy<Value = PoolOp> {
    let span = 0..=upper_bound.saturating_add(2);
    prop_oneof![
        1 => Just(PoolOp::AllocateLowest),
        2 => span.clone().prop_map(PoolOp::Allocate),
        2 => span.clone().prop_map(PoolOp::Release),
        1 => span.prop_map(PoolOp::SetUpperBound),
    ]
}
