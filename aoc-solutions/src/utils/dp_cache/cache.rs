//! Memoised recursive evaluation.

use std::cell::RefCell;
use std::fmt::Debug;

use aoc_solver::SolveError;
use thiserror::Error;

use super::backend::{Backend, Slot};
use super::problem::{DpProblem, FnProblem};

/// An index was reached again while its own dependencies were resolving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dependency cycle through {index}")]
pub struct CycleError {
    /// `Debug` rendering of the revisited index
    pub index: String,
}

impl From<CycleError> for SolveError {
    fn from(e: CycleError) -> Self {
        SolveError::computation(e.to_string())
    }
}

/// Lazily evaluates a [`DpProblem`], computing each index at most once.
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem for Factorial {
///     type Index = usize;
///     type Value = u64;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: &[u64]) -> u64 {
///         deps.first().map_or(1, |prev| *n as u64 * prev)
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Factorial);
/// assert_eq!(cache.get(&5), Ok(120));
/// ```
pub struct DpCache<B, P> {
    slots: RefCell<B>,
    problem: P,
}

impl<B, P> DpCache<B, P>
where
    P: DpProblem,
    P::Index: Clone + Debug,
    P::Value: Clone,
    B: Backend<P::Index, P::Value>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            slots: RefCell::new(backend),
            problem,
        }
    }

    /// Value at `index`, resolving uncached dependencies depth-first.
    ///
    /// Fails if the dependency graph below `index` has a cycle. Indices left
    /// unresolved by the failure are cleared, so later calls see only the
    /// values that were actually computed.
    pub fn get(&self, index: &P::Index) -> Result<P::Value, CycleError> {
        match self.slots.borrow().slot(index) {
            Some(Slot::Ready(value)) => return Ok(value.clone()),
            Some(Slot::Pending) => {
                return Err(CycleError {
                    index: format!("{index:?}"),
                });
            }
            None => {}
        }

        self.slots.borrow_mut().store(index.clone(), Slot::Pending);
        let deps = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|_| self.slots.borrow_mut().clear(index))?;
        let value = self.problem.compute(index, &deps);
        self.slots
            .borrow_mut()
            .store(index.clone(), Slot::Ready(value.clone()));
        Ok(value)
    }
}

impl<I, K, B, D, C> DpCache<B, FnProblem<I, K, D, C>>
where
    I: Clone + Debug,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, &[K]) -> K,
{
    /// Cache over a recurrence given as a dependency closure and a compute closure
    pub fn from_fns(backend: B, deps: D, compute: C) -> Self {
        Self::with_problem(backend, FnProblem::new(deps, compute))
    }
}
