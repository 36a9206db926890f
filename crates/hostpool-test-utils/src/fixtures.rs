//! Reusable pool states.
//!
//! - [`fragmented_pool`] — a default pool with a deterministic spread of
//!   allocations, leaving many small free intervals.
//! - [`walkthrough`] — the canonical /24 walkthrough as a list of
//!   [`Step`]s with the expected outcome and free list after each one.
//! - [`walkthrough_pool`] — the pool left behind by running it.

use hostpool::RangePool;

/// Every `stride`-th identifier of a fresh pool allocated.
pub fn fragmented_pool(upper_bound: u32, stride: u32) -> RangePool {
    let mut pool = RangePool::new(upper_bound).expect("upper bound must be non-zero");
    for num in (1..=upper_bound).step_by(stride.max(1) as usize) {
        pool.allocate(num);
    }
    pool
}

/// A single call in the walkthrough.
#[derive(Clone, Copy, Debug)]
pub enum Call {
    AllocateLowest,
    Allocate(u32),
    SetUpperBound(u32),
    Release(u32),
}

/// What a [`Call`] is expected to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    Id(Option<u32>),
    Flag(bool),
}

/// One walkthrough step: call, expected result, expected free list after.
#[derive(Clone, Debug)]
pub struct Step {
    pub call: Call,
    pub expect: Expect,
    pub free_after: Vec<(u32, u32)>,
}

fn step(call: Call, expect: Expect, free_after: &[(u32, u32)]) -> Step {
    Step {
        call,
        expect,
        free_after: free_after.to_vec(),
    }
}

/// The canonical sequence of operations against a default (bound 254) pool.
pub fn walkthrough() -> Vec<Step> {
    use Call::*;
    use Expect::*;
    vec![
        step(Allocate(100), Id(Some(100)), &[(1, 99), (101, 254)]),
        step(AllocateLowest, Id(Some(1)), &[(2, 99), (101, 254)]),
        step(AllocateLowest, Id(Some(2)), &[(3, 99), (101, 254)]),
        step(Allocate(3), Id(Some(3)), &[(4, 99), (101, 254)]),
        step(Allocate(99), Id(Some(99)), &[(4, 98), (101, 254)]),
        step(Allocate(99), Id(None), &[(4, 98), (101, 254)]),
        step(Allocate(300), Id(None), &[(4, 98), (101, 254)]),
        step(Allocate(5), Id(Some(5)), &[(4, 4), (6, 98), (101, 254)]),
        step(Allocate(4), Id(Some(4)), &[(6, 98), (101, 254)]),
        step(
            Allocate(230),
            Id(Some(230)),
            &[(6, 98), (101, 229), (231, 254)],
        ),
        step(
            SetUpperBound(240),
            Flag(true),
            &[(6, 98), (101, 229), (231, 240)],
        ),
        step(
            SetUpperBound(230),
            Flag(false),
            &[(6, 98), (101, 229), (231, 240)],
        ),
        step(
            SetUpperBound(231),
            Flag(true),
            &[(6, 98), (101, 229), (231, 231)],
        ),
        step(Allocate(231), Id(Some(231)), &[(6, 98), (101, 229)]),
        step(Release(230), Flag(true), &[(6, 98), (101, 230)]),
    ]
}

impl Call {
    /// Run the call against `pool`, returning its outcome.
    ///
    /// # Panics
    ///
    /// Panics if a release hits an exhausted pool; the walkthrough never does.
    pub fn run(self, pool: &mut RangePool) -> Expect {
        match self {
            Call::AllocateLowest => Expect::Id(pool.allocate_lowest()),
            Call::Allocate(n) => Expect::Id(pool.allocate(n)),
            Call::SetUpperBound(b) => Expect::Flag(pool.set_upper_bound(b)),
            Call::Release(n) => Expect::Flag(pool.release(n).expect("pool is not exhausted")),
        }
    }
}

/// The pool after running the full [`walkthrough`].
pub fn walkthrough_pool() -> RangePool {
    let mut pool = RangePool::default();
    for s in walkthrough() {
        s.call.run(&mut pool);
    }
    pool
}
