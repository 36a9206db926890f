//! Walk a /24 pool through the canonical allocate / resize / release sequence.
//!
//! Run with `RUST_LOG=hostpool=trace` to see the pool's own events.

use hostpool::RangePool;
use hostpool_test_utils::fixtures::walkthrough;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut pool = RangePool::default();
    tracing::info!(%pool, "fresh pool");

    for step in walkthrough() {
        let outcome = step.call.run(&mut pool);
        tracing::info!(call = ?step.call, ?outcome, %pool, "step");
    }

    println!(
        "free={} allocated={} intervals={} bound={}",
        pool.free_count(),
        pool.allocated_count(),
        pool.interval_count(),
        pool.upper_bound()
    );
    println!("{pool:?}");
}
