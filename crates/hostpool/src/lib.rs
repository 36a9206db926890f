//! Free-interval allocation of bounded integer identifiers.
//!
//! Hands out identifiers such as IP host numbers from `[1, upper_bound]`,
//! tracking only what is free as a sorted list of merged closed intervals.
//!
//! # Architecture
//!
//! ```text
//! RangePool
//! ├── VecDeque<Interval>   free intervals, sorted, disjoint, non-adjacent
//! └── upper_bound          movable via set_upper_bound (tail interval only)
//! ```
//!
//! # Operations
//!
//! - **allocate_lowest:** take the smallest free identifier (front interval).
//! - **allocate:** take a specific identifier, splitting its interval.
//! - **release:** give an identifier back, fusing it with touching neighbours.
//! - **set_upper_bound:** move the bound by rewriting the last free interval.
//!
//! Each has a `try_*` twin returning [`PoolError`] so callers can tell an
//! out-of-range identifier from a double allocation or a double release.
//!
//! ```
//! use hostpool::RangePool;
//!
//! let mut pool = RangePool::default();
//! assert_eq!(pool.allocate(100), Some(100));
//! assert_eq!(pool.allocate_lowest(), Some(1));
//! assert_eq!(pool.to_pairs(), vec![(2, 99), (101, 254)]);
//! assert_eq!(pool.release(100), Ok(true));
//! assert_eq!(pool.to_string(), "2-254");
//! ```
//!
//! The pool is single-owner: every mutation takes `&mut self`. Hosts that
//! share one across threads guard the whole pool with a single lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod interval;
pub mod pool;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use error::{ConfigError, PoolError};
pub use interval::Interval;
pub use pool::RangePool;
