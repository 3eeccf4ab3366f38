//! Day 8: Handheld Halting

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::parse_lines;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl Instruction {
    /// `jmp` and `nop` swapped, `acc` unchanged
    fn repaired(self) -> Option<Self> {
        match self {
            Self::Acc(_) => None,
            Self::Jmp(arg) => Some(Self::Nop(arg)),
            Self::Nop(arg) => Some(Self::Jmp(arg)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// About to run an instruction for the second time
    Looped(i64),
    /// Jumped to the instruction right after the last one
    Terminated(i64),
    /// Jumped anywhere else outside the program
    OutOfBounds,
    /// The accumulator left the `i64` range
    Overflow,
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let (op, arg) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<op> <argument>`"))?;
    let arg: i64 = arg
        .parse()
        .with_context(|| format!("invalid argument `{arg}`"))?;
    match op {
        "acc" => Ok(Instruction::Acc(arg)),
        "jmp" => Ok(Instruction::Jmp(arg)),
        "nop" => Ok(Instruction::Nop(arg)),
        _ => Err(anyhow!("unknown operation `{op}`")),
    }
}

/// Run the program, optionally with one instruction replaced as `(index, replacement)`
fn run(program: &[Instruction], patch: Option<(usize, Instruction)>) -> Outcome {
    let mut visited = vec![false; program.len()];
    let (mut pc, mut acc) = (0usize, 0i64);

    loop {
        if pc == program.len() {
            return Outcome::Terminated(acc);
        }
        let Some(seen) = visited.get_mut(pc) else {
            return Outcome::OutOfBounds;
        };
        if *seen {
            return Outcome::Looped(acc);
        }
        *seen = true;

        let instruction = match patch {
            Some((at, replacement)) if at == pc => replacement,
            _ => program[pc],
        };
        let offset = match instruction {
            Instruction::Acc(arg) => {
                let Some(next) = acc.checked_add(arg) else {
                    return Outcome::Overflow;
                };
                acc = next;
                1
            }
            Instruction::Jmp(arg) => arg,
            Instruction::Nop(_) => 1,
        };
        match pc.checked_add_signed(offset as isize) {
            Some(next) => pc = next,
            None => return Outcome::OutOfBounds,
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_instruction)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match run(shared, None) {
            Outcome::Looped(acc) => Ok(acc.to_string()),
            Outcome::Overflow => Err(SolveError::computation("accumulator overflow")),
            Outcome::Terminated(_) | Outcome::OutOfBounds => {
                Err(SolveError::computation("program never repeats an instruction"))
            }
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let program: &[Instruction] = shared;
        let patches = program
            .iter()
            .enumerate()
            .filter_map(|(at, instruction)| instruction.repaired().map(|fixed| (at, fixed)));
        for patch in patches {
            match run(program, Some(patch)) {
                Outcome::Terminated(acc) => return Ok(acc.to_string()),
                Outcome::Overflow => {
                    return Err(SolveError::computation(format!(
                        "accumulator overflow with instruction {} swapped",
                        patch.0 + 1
                    )));
                }
                Outcome::Looped(_) | Outcome::OutOfBounds => {}
            }
        }
        Err(SolveError::computation("no single jmp/nop swap terminates the program"))
    }
}
