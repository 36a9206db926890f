//! Integration test: differential check against a `BTreeSet` model.
//!
//! Random operation sequences are applied to both [`RangePool`] and the
//! naive [`ModelPool`]; results and free sets must agree after every call.

use hostpool::RangePool;
use hostpool_test_utils::fixtures::fragmented_pool;
use hostpool_test_utils::{assert_invariants, pool_op, ModelPool, PoolOp};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pool_agrees_with_model(
        bound in 1u32..96,
        ops in proptest::collection::vec(pool_op(96), 1..300),
    ) {
        let mut pool = RangePool::new(bound).unwrap();
        let mut model = ModelPool::new(bound);
        for op in ops {
            prop_assert_eq!(op.apply(&mut pool), op.apply_model(&mut model), "{:?}", op);
            prop_assert_eq!(pool.to_pairs(), model.to_pairs());
            prop_assert_eq!(pool.free_count(), model.free_count());
            prop_assert_eq!(pool.upper_bound(), model.upper_bound());
            assert_invariants(&pool);
        }
    }

    #[test]
    fn releasing_everything_defragments_fully(
        stride in 2u32..9,
        order in any::<u64>(),
    ) {
        let mut pool = fragmented_pool(200, stride);
        prop_assume!(!pool.is_exhausted());
        let mut taken: Vec<u32> = (1..=200).step_by(stride as usize).collect();
        // Deterministic shuffle so releases arrive out of order.
        let len = taken.len();
        for i in 0..len {
            let j = ((order >> (i % 64)) as usize ^ i.wrapping_mul(31)) % len;
            taken.swap(i, j);
        }
        for num in taken {
            prop_assert_eq!(pool.release(num), Ok(true));
            assert_invariants(&pool);
        }
        prop_assert_eq!(pool.to_pairs(), vec![(1, 200)]);
    }
}

#[test]
fn ascending_allocation_then_model_release_order() {
    let mut pool = RangePool::new(16).unwrap();
    let mut model = ModelPool::new(16);
    for _ in 0..15 {
        assert_eq!(
            PoolOp::AllocateLowest.apply(&mut pool),
            PoolOp::AllocateLowest.apply_model(&mut model)
        );
    }
    for num in [3, 1, 2, 9, 8, 10] {
        assert_eq!(
            PoolOp::Release(num).apply(&mut pool),
            PoolOp::Release(num).apply_model(&mut model)
        );
    }
    assert_eq!(pool.to_pairs(), vec![(1, 3), (8, 10), (16, 16)]);
    assert_eq!(pool.to_pairs(), model.to_pairs());
}

#[test]
fn resizes_interleaved_with_churn_match_model() {
    let mut pool = RangePool::new(40).unwrap();
    let mut model = ModelPool::new(40);
    let ops = [
        PoolOp::Allocate(38),
        PoolOp::SetUpperBound(36),
        PoolOp::Allocate(36),
        PoolOp::SetUpperBound(30),
        PoolOp::SetUpperBound(50),
        PoolOp::Release(36),
        PoolOp::Allocate(50),
        PoolOp::SetUpperBound(39),
        PoolOp::SetUpperBound(0),
        PoolOp::Release(45),
        PoolOp::AllocateLowest,
    ];
    for op in ops {
        assert_eq!(op.apply(&mut pool), op.apply_model(&mut model), "{op:?}");
        assert_eq!(pool.to_pairs(), model.to_pairs(), "{op:?}");
        assert_eq!(pool.upper_bound(), model.upper_bound(), "{op:?}");
        assert_invariants(&pool);
    }
    assert_eq!(pool.to_pairs(), vec![(2, 37), (39, 39)]);
}
