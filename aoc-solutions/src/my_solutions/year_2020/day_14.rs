//! Day 14: Docking Data

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

use crate::utils::parsing::parse_lines;

/// Memory words and addresses are 36 bits wide
const WORD_BITS: u32 = 36;
const WORD_MASK: u64 = (1 << WORD_BITS) - 1;

static MASK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^mask = ([01X]{36})$").unwrap());
static MEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^mem\[(\d+)\] = (\d+)$").unwrap());

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mask {
    /// Bits written as `1`
    ones: u64,
    /// Bits written as `X`
    floating: u64,
}

impl Mask {
    fn parse(bits: &str) -> Self {
        bits.bytes().fold(Self::default(), |mask, b| Self {
            ones: mask.ones << 1 | u64::from(b == b'1'),
            floating: mask.floating << 1 | u64::from(b == b'X'),
        })
    }

    /// Value decoder: `X` keeps the value bit, `0`/`1` overwrite it
    fn apply_to_value(self, value: u64) -> u64 {
        value & self.floating | self.ones
    }

    /// Address decoder: `1` sets, `X` takes both values, `0` keeps
    fn addresses(self, address: u64) -> impl Iterator<Item = u64> {
        let base = (address | self.ones) & !self.floating & WORD_MASK;
        let floating = self.floating;
        // Walk every submask of `floating`, ending with the empty one
        let mut next = Some(floating);
        std::iter::from_fn(move || {
            let subset = next?;
            next = (subset != 0).then(|| (subset - 1) & floating);
            Some(base | subset)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    SetMask(Mask),
    Write { address: u64, value: u64 },
}

fn parse_word(digits: &str) -> anyhow::Result<u64> {
    let word: u64 = digits
        .parse()
        .with_context(|| format!("invalid number `{digits}`"))?;
    if word > WORD_MASK {
        return Err(anyhow!("`{digits}` does not fit in {WORD_BITS} bits"));
    }
    Ok(word)
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let line = line.trim();
    if let Some(caps) = MASK_RE.captures(line) {
        return Ok(Instruction::SetMask(Mask::parse(&caps[1])));
    }
    if let Some(caps) = MEM_RE.captures(line) {
        return Ok(Instruction::Write {
            address: parse_word(&caps[1])?,
            value: parse_word(&caps[2])?,
        });
    }
    Err(anyhow!("expected `mask = <36 bits>` or `mem[<address>] = <value>`"))
}

/// Run the program, storing each write through `store`
fn run<F>(program: &[Instruction], mut store: F) -> u64
where
    F: FnMut(&mut HashMap<u64, u64>, Mask, u64, u64),
{
    let mut memory = HashMap::new();
    let mut mask = Mask::default();
    for &instruction in program {
        match instruction {
            Instruction::SetMask(new_mask) => mask = new_mask,
            Instruction::Write { address, value } => store(&mut memory, mask, address, value),
        }
    }
    memory.values().sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let program = parse_lines(input, parse_instruction)?;
        if !matches!(program.first(), Some(Instruction::SetMask(_))) {
            return Err(ParseError::MissingData(
                "program must start with a mask".into(),
            ));
        }
        Ok(program)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = run(shared, |memory, mask, address, value| {
            memory.insert(address, mask.apply_to_value(value));
        });
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = run(shared, |memory, mask, address, value| {
            for decoded in mask.addresses(address) {
                memory.insert(decoded, value);
            }
        });
        Ok(sum.to_string())
    }
}
