use std::cell::Cell;

use super::*;

struct Fibonacci;

impl DpProblem for Fibonacci {
    type Index = usize;
    type Value = u64;

    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: &[u64]) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// 0 depends on 1 and 2, both depend on 3
struct Diamond<'a> {
    computed: &'a Cell<u32>,
}

impl DpProblem for Diamond<'_> {
    type Index = usize;
    type Value = u32;

    fn deps(&self, n: &usize) -> Vec<usize> {
        match n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, _: &usize, deps: &[u32]) -> u32 {
        self.computed.set(self.computed.get() + 1);
        1 + deps.iter().sum::<u32>()
    }
}

/// Edges of a small directed graph, `i -> edges[i]`
struct Reach<'a> {
    edges: &'a [Vec<usize>],
}

impl DpProblem for Reach<'_> {
    type Index = usize;
    type Value = usize;

    fn deps(&self, n: &usize) -> Vec<usize> {
        self.edges[*n].clone()
    }

    fn compute(&self, _: &usize, deps: &[usize]) -> usize {
        deps.iter().map(|d| d + 1).sum()
    }
}

#[test]
fn test_fibonacci() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), Ok(0));
    assert_eq!(cache.get(&20), Ok(6765));
    assert_eq!(cache.get(&90), Ok(2_880_067_194_370_816_120));
}

#[test]
fn test_shared_dependency_computed_once() {
    let computed = Cell::new(0);
    let cache = DpCache::with_problem(
        VecBackend::with_capacity(4),
        Diamond {
            computed: &computed,
        },
    );

    assert_eq!(cache.get(&0), Ok(5));
    assert_eq!(computed.get(), 4);

    assert_eq!(cache.get(&1), Ok(2));
    assert_eq!(computed.get(), 4);
}

#[test]
fn test_hashmap_backend_sparse_indices() {
    let cache = DpCache::from_fns(
        HashMapBackend::new(),
        |&n: &u64| if n < 10 { vec![] } else { vec![n / 10] },
        |_: &u64, deps: &[u32]| deps.first().map_or(1, |d| d + 1),
    );

    assert_eq!(cache.get(&7), Ok(1));
    assert_eq!(cache.get(&1_000_000_000_000), Ok(13));
}

#[test]
fn test_cycle_reported() {
    let edges = vec![vec![1], vec![2], vec![0], vec![]];
    let cache = DpCache::with_problem(VecBackend::new(), Reach { edges: &edges });

    let err = cache.get(&0).unwrap_err();
    assert_eq!(err.index, "0");
    assert_eq!(cache.get(&3), Ok(0));
}

#[test]
fn test_failed_path_is_cleared() {
    // 0 -> 1 -> 2 -> 1 is a cycle; 3 -> 0 only passes through it
    let edges = vec![vec![1], vec![2], vec![1], vec![0]];
    let cache = DpCache::with_problem(VecBackend::new(), Reach { edges: &edges });

    assert_eq!(cache.get(&3).unwrap_err().index, "1");
    // A stale pending 3 or 0 would be reported here instead of 1
    assert_eq!(cache.get(&0).unwrap_err().index, "1");
    assert_eq!(cache.get(&2).unwrap_err().index, "2");

    let mut backend: HashMapBackend<&str, u32> = HashMapBackend::new();
    backend.store("a", Slot::Pending);
    backend.clear(&"a");
    assert_eq!(backend.slot(&"a"), None);
}

#[test]
fn test_cycle_becomes_computation_error() {
    let err: aoc_solver::SolveError = CycleError {
        index: "\"shiny gold\"".to_string(),
    }
    .into();
    assert!(matches!(err, aoc_solver::SolveError::Computation(_)));
}

#[test]
fn test_trait_and_closure_agree() {
    let by_trait = DpCache::with_problem(VecBackend::new(), Fibonacci);
    let by_closure = DpCache::from_fns(
        VecBackend::new(),
        |&n: &usize| if n <= 1 { vec![] } else { vec![n - 1, n - 2] },
        |&n: &usize, deps: &[u64]| if n <= 1 { n as u64 } else { deps[0] + deps[1] },
    );

    for n in 0..60 {
        assert_eq!(by_trait.get(&n), by_closure.get(&n));
    }
}
