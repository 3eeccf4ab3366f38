//! Memoised evaluation of recurrences over a DAG of indices
//!
//! Used for adapter arrangements (day 10) and nested bag counts (day 7).
//! Revisiting an index whose dependencies are still resolving is reported as
//! a [`CycleError`] rather than recursing forever.
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! let collatz = DpCache::from_fns(
//!     HashMapBackend::new(),
//!     |n: &u64| match n {
//!         0 | 1 => vec![],
//!         n if n % 2 == 0 => vec![n / 2],
//!         n => vec![3 * n + 1],
//!     },
//!     |_: &u64, deps: &[u64]| deps.first().map_or(0, |d| d + 1),
//! );
//!
//! assert_eq!(collatz.get(&27), Ok(111));
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, Slot, VecBackend};
pub use cache::{CycleError, DpCache};
pub use problem::{DpProblem, FnProblem};

#[cfg(test)]
mod tests;
