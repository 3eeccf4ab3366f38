//! Recurrence definitions for the DP cache.

/// A recurrence over an index space: which indices an index needs, and how
/// its value follows from theirs.
pub trait DpProblem {
    type Index;
    type Value;

    /// Indices whose values `index` is computed from. Empty for base cases.
    fn deps(&self, index: &Self::Index) -> Vec<Self::Index>;

    /// Value of `index`, given the values of `deps(index)` in the same order.
    fn compute(&self, index: &Self::Index, deps: &[Self::Value]) -> Self::Value;
}

/// A recurrence given as two closures
pub struct FnProblem<I, K, D, C> {
    deps: D,
    compute: C,
    _types: std::marker::PhantomData<fn(&I) -> K>,
}

impl<I, K, D, C> FnProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, &[K]) -> K,
{
    pub fn new(deps: D, compute: C) -> Self {
        Self {
            deps,
            compute,
            _types: std::marker::PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem for FnProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, &[K]) -> K,
{
    type Index = I;
    type Value = K;

    fn deps(&self, index: &I) -> Vec<I> {
        (self.deps)(index)
    }

    fn compute(&self, index: &I, deps: &[K]) -> K {
        (self.compute)(index, deps)
    }
}
