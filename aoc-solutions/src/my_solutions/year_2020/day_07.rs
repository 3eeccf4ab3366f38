//! Day 7: Handy Haversacks
//!
//! Bag rules form a graph from each color to the colors it must hold. Both
//! parts are memoised walks over that graph through [`DpCache`], which also
//! rejects rules where a bag ends up inside itself.

use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parsing::{at_line, non_empty, numbered_lines};

const TARGET: &str = "shiny gold";

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// Interned bag rules; color `i` directly holds `contents[i]` as `(color, count)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagRules<'a> {
    colors: Vec<&'a str>,
    ids: HashMap<&'a str, usize>,
    contents: Vec<Vec<(usize, u64)>>,
}

impl<'a> BagRules<'a> {
    fn intern(&mut self, color: &'a str) -> usize {
        *self.ids.entry(color).or_insert_with(|| {
            self.colors.push(color);
            self.contents.push(Vec::new());
            self.colors.len() - 1
        })
    }

    fn target(&self) -> Result<usize, SolveError> {
        self.ids
            .get(TARGET)
            .copied()
            .ok_or_else(|| SolveError::computation(format!("no rule mentions `{TARGET}`")))
    }

    fn inner_colors(&self, color: usize) -> Vec<usize> {
        self.contents[color].iter().map(|&(inner, _)| inner).collect()
    }
}

/// "`color` bags contain `N color bag(s), ...`." or "... contain no other bags."
fn parse_rule(line: &str) -> anyhow::Result<(&str, Vec<(u64, &str)>)> {
    let (outer, rest) = line
        .split_once(" bags contain ")
        .ok_or_else(|| anyhow!("expected `<color> bags contain ...`"))?;
    let rest = rest
        .strip_suffix('.')
        .ok_or_else(|| anyhow!("rule must end with `.`"))?;
    if rest == "no other bags" {
        return Ok((outer, Vec::new()));
    }

    let inner = rest
        .split(", ")
        .map(|item| {
            let (count, bag) = item
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected `<count> <color> bag(s)`"))?;
            let count: u64 = count.parse().with_context(|| format!("invalid count `{count}`"))?;
            let color = bag
                .strip_suffix(" bags")
                .or_else(|| bag.strip_suffix(" bag"))
                .ok_or_else(|| anyhow!("expected `bag` or `bags` after `{bag}`"))?;
            Ok((count, color))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((outer, inner))
}

impl AocParser for Solver {
    type SharedData<'a> = BagRules<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = BagRules {
            colors: Vec::new(),
            ids: HashMap::new(),
            contents: Vec::new(),
        };
        let mut defined = Vec::new();

        for (line, text) in numbered_lines(non_empty(input)?.trim_end()) {
            let (outer, inner) = at_line(line, text, parse_rule(text.trim()))?;
            let outer = rules.intern(outer);
            if defined.contains(&outer) {
                return Err(ParseError::at_line(line, text, "color already has a rule"));
            }
            defined.push(outer);
            for (count, color) in inner {
                let color = rules.intern(color);
                rules.contents[outer].push((color, count));
            }
        }

        if let Some(undefined) = (0..rules.colors.len()).find(|c| !defined.contains(c)) {
            return Err(ParseError::MissingData(format!(
                "no rule for `{}` bags",
                rules.colors[undefined]
            )));
        }
        Ok(rules)
    }
}

/// Whether a color eventually holds the target color
struct HoldsTarget<'r, 'a> {
    rules: &'r BagRules<'a>,
    target: usize,
}

impl DpProblem for HoldsTarget<'_, '_> {
    type Index = usize;
    type Value = bool;

    fn deps(&self, color: &usize) -> Vec<usize> {
        self.rules.inner_colors(*color)
    }

    fn compute(&self, color: &usize, deps: &[bool]) -> bool {
        self.rules.contents[*color]
            .iter()
            .zip(deps)
            .any(|(&(inner, _), &holds)| inner == self.target || holds)
    }
}

/// Number of bags inside one bag of a color
struct BagsInside<'r, 'a> {
    rules: &'r BagRules<'a>,
}

impl DpProblem for BagsInside<'_, '_> {
    type Index = usize;
    type Value = u64;

    fn deps(&self, color: &usize) -> Vec<usize> {
        self.rules.inner_colors(*color)
    }

    fn compute(&self, color: &usize, deps: &[u64]) -> u64 {
        self.rules.contents[*color]
            .iter()
            .zip(deps)
            .map(|(&(_, count), inside)| count * (1 + inside))
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let target = shared.target()?;
        let cache = DpCache::with_problem(
            VecBackend::with_capacity(shared.colors.len()),
            HoldsTarget {
                rules: shared,
                target,
            },
        );
        let mut count = 0;
        for color in (0..shared.colors.len()).filter(|&color| color != target) {
            if cache.get(&color)? {
                count += 1;
            }
        }
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let target = shared.target()?;
        let cache = DpCache::with_problem(VecBackend::new(), BagsInside { rules: shared });
        Ok(cache.get(&target)?.to_string())
    }
}
