//! Day 16: Ticket Translation

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

use crate::utils::parsing::{at_line, blank_line_groups, non_empty};

static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+): (\d+)-(\d+) or (\d+)-(\d+)$").unwrap());

/// Fields whose values multiply into the part 2 answer
const DEPARTURE_PREFIX: &str = "departure";

/// Candidate sets are bitmasks over rules
const MAX_RULES: usize = u64::BITS as usize;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    name: &'a str,
    ranges: [RangeInclusive<u64>; 2],
}

impl Rule<'_> {
    fn accepts(&self, value: u64) -> bool {
        self.ranges.iter().any(|range| range.contains(&value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes<'a> {
    rules: Vec<Rule<'a>>,
    mine: Vec<u64>,
    nearby: Vec<Vec<u64>>,
}

impl<'a> Notes<'a> {
    fn accepted_by_any(&self, value: u64) -> bool {
        self.rules.iter().any(|rule| rule.accepts(value))
    }

    /// Rule index for every ticket position
    ///
    /// Starts from the rules every valid ticket satisfies at each position,
    /// then repeatedly fixes positions left with a single candidate.
    fn field_order(&self) -> Result<Vec<usize>, SolveError> {
        let valid: Vec<&Vec<u64>> = self
            .nearby
            .iter()
            .filter(|ticket| ticket.iter().all(|&v| self.accepted_by_any(v)))
            .collect();

        let mut candidates: Vec<u64> = (0..self.mine.len())
            .map(|position| {
                self.rules
                    .iter()
                    .enumerate()
                    .filter(|(_, rule)| valid.iter().all(|ticket| rule.accepts(ticket[position])))
                    .fold(0u64, |set, (idx, _)| set | 1 << idx)
            })
            .collect();

        let mut order = vec![None; candidates.len()];
        while let Some(position) = (0..candidates.len())
            .find(|&p| order[p].is_none() && candidates[p].count_ones() == 1)
        {
            let rule = candidates[position].trailing_zeros() as usize;
            order[position] = Some(rule);
            for set in &mut candidates {
                *set &= !(1 << rule);
            }
        }

        order
            .into_iter()
            .enumerate()
            .map(|(position, rule)| {
                rule.ok_or_else(|| {
                    SolveError::computation(format!(
                        "cannot decide which field sits at position {}",
                        position + 1
                    ))
                })
            })
            .collect()
    }
}

fn parse_rule(line: &str) -> anyhow::Result<Rule<'_>> {
    let caps = RULE_RE
        .captures(line.trim())
        .ok_or_else(|| anyhow!("expected `<name>: <a>-<b> or <c>-<d>`"))?;
    let bound = |idx: usize| -> anyhow::Result<u64> {
        caps[idx]
            .parse()
            .with_context(|| format!("invalid bound `{}`", &caps[idx]))
    };
    let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    Ok(Rule {
        name,
        ranges: [bound(2)?..=bound(3)?, bound(4)?..=bound(5)?],
    })
}

fn parse_ticket(line: &str, fields: usize) -> anyhow::Result<Vec<u64>> {
    let ticket = line
        .trim()
        .split(',')
        .map(|value| {
            value
                .parse()
                .with_context(|| format!("invalid ticket value `{value}`"))
        })
        .collect::<anyhow::Result<Vec<u64>>>()?;
    if ticket.len() != fields {
        return Err(anyhow!("expected {fields} values, got {}", ticket.len()));
    }
    Ok(ticket)
}

/// The header line of a section, checked against `expected`
fn expect_header(section: &[(usize, &str)], expected: &str) -> Result<(), ParseError> {
    match section.first() {
        Some(&(_, text)) if text.trim() == expected => Ok(()),
        Some(&(line, text)) => Err(ParseError::at_line(line, text, format!("expected `{expected}`"))),
        None => Err(ParseError::MissingData(expected.into())),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Notes<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let groups = blank_line_groups(non_empty(input)?);
        let [rules, mine, nearby] = groups.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected rules, your ticket and nearby tickets sections, got {} sections",
                groups.len()
            )));
        };

        let rules = rules
            .iter()
            .map(|&(line, text)| at_line(line, text, parse_rule(text)))
            .collect::<Result<Vec<_>, _>>()?;
        if rules.len() > MAX_RULES {
            return Err(ParseError::InvalidFormat(format!(
                "at most {MAX_RULES} rules are supported"
            )));
        }

        expect_header(mine, "your ticket:")?;
        let mine = match &mine[1..] {
            [(line, text)] => at_line(*line, text, parse_ticket(text, rules.len()))?,
            _ => return Err(ParseError::MissingData("exactly one line for your ticket".into())),
        };

        expect_header(nearby, "nearby tickets:")?;
        let nearby = nearby[1..]
            .iter()
            .map(|&(line, text)| at_line(line, text, parse_ticket(text, rules.len())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Notes {
            rules,
            mine,
            nearby,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let error_rate: u64 = shared
            .nearby
            .iter()
            .flatten()
            .filter(|&&value| !shared.accepted_by_any(value))
            .sum();
        Ok(error_rate.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let order = shared.field_order()?;
        let departures: Vec<u64> = order
            .iter()
            .zip(&shared.mine)
            .filter(|&(&rule, _)| shared.rules[rule].name.starts_with(DEPARTURE_PREFIX))
            .map(|(_, &value)| value)
            .collect();
        if departures.is_empty() {
            return Err(SolveError::computation("no departure fields"));
        }
        Ok(departures.iter().product::<u64>().to_string())
    }
}
