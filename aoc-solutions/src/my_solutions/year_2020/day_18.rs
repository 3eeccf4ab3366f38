//! Day 18: Operation Order

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{at_line, non_empty, numbered_lines};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Mul => lhs.checked_mul(rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Num(u64),
    Op(Op),
    Open,
    Close,
}

/// Operator binding strength; higher binds tighter
type Precedence = fn(Op) -> u8;

fn same_precedence(_: Op) -> u8 {
    0
}

fn addition_first(op: Op) -> u8 {
    match op {
        Op::Add => 1,
        Op::Mul => 0,
    }
}

/// Precedence climbing over a token slice, operators left-associative
///
/// Values are `None` once an intermediate result overflows. The walk still
/// covers every token, so syntax errors are found regardless of the values.
struct Evaluator<'t> {
    tokens: &'t [Token],
    pos: usize,
    precedence: Precedence,
}

impl Evaluator<'_> {
    fn evaluate(tokens: &[Token], precedence: Precedence) -> Result<Option<u64>, String> {
        let mut evaluator = Evaluator {
            tokens,
            pos: 0,
            precedence,
        };
        let value = evaluator.expression(0)?;
        match evaluator.tokens.get(evaluator.pos) {
            None => Ok(value),
            Some(token) => Err(format!("unexpected {token:?} after expression")),
        }
    }

    fn expression(&mut self, min_precedence: u8) -> Result<Option<u64>, String> {
        let mut lhs = self.operand()?;
        while let Some(&Token::Op(op)) = self.tokens.get(self.pos) {
            let strength = (self.precedence)(op);
            if strength < min_precedence {
                break;
            }
            self.pos += 1;
            let rhs = self.expression(strength + 1)?;
            lhs = lhs.zip(rhs).and_then(|(lhs, rhs)| op.apply(lhs, rhs));
        }
        Ok(lhs)
    }

    fn operand(&mut self) -> Result<Option<u64>, String> {
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        match token {
            Some(Token::Num(n)) => Ok(Some(n)),
            Some(Token::Open) => {
                let value = self.expression(0)?;
                match self.tokens.get(self.pos) {
                    Some(Token::Close) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    _ => Err("unclosed `(`".into()),
                }
            }
            Some(other) => Err(format!("expected a number or `(`, got {other:?}")),
            None => Err("expression ends early".into()),
        }
    }
}

fn tokenize(line: &str) -> anyhow::Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        let token = match c {
            ' ' | '\t' => continue,
            '+' => Token::Op(Op::Add),
            '*' => Token::Op(Op::Mul),
            '(' => Token::Open,
            ')' => Token::Close,
            '0'..='9' => {
                let mut end = idx + 1;
                while let Some(&(next, '0'..='9')) = chars.peek() {
                    end = next + 1;
                    chars.next();
                }
                Token::Num(line[idx..end].parse()?)
            }
            other => return Err(anyhow!("unexpected `{other}` at column {}", idx + 1)),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

fn parse_expression(line: &str) -> anyhow::Result<Vec<Token>> {
    let tokens = tokenize(line)?;
    // Grammar check only; overflow is the solver's concern
    Evaluator::evaluate(&tokens, same_precedence).map_err(|reason| anyhow!(reason))?;
    Ok(tokens)
}

fn sum_all(expressions: &[Vec<Token>], precedence: Precedence) -> Result<u64, SolveError> {
    expressions.iter().enumerate().try_fold(0u64, |total, (idx, tokens)| {
        let value = Evaluator::evaluate(tokens, precedence)
            .map_err(|reason| SolveError::computation(format!("expression {}: {reason}", idx + 1)))?;
        value
            .and_then(|value| total.checked_add(value))
            .ok_or_else(|| SolveError::computation(format!("overflow evaluating expression {}", idx + 1)))
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Token>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        numbered_lines(non_empty(input)?.trim_end())
            .map(|(line, text)| at_line(line, text, parse_expression(text)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_all(shared, same_precedence)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_all(shared, addition_first)?.to_string())
    }
}
