//! Line-oriented parsing helpers
//!
//! Puzzle parsers build per-line failures with `anyhow` and hand them to
//! [`parse_lines`] or [`at_line`], which attach the 1-based line number and
//! the offending text as a [`ParseError::InvalidLine`].

use aoc_solver::ParseError;
use std::str::FromStr;

/// Reject empty and whitespace-only input
pub fn non_empty(input: &str) -> Result<&str, ParseError> {
    if input.trim().is_empty() {
        Err(ParseError::EmptyInput)
    } else {
        Ok(input)
    }
}

/// Lines paired with their 1-based line number
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.lines().enumerate().map(|(idx, line)| (idx + 1, line))
}

/// Attach line information to a per-line parse result
pub fn at_line<T>(line: usize, token: &str, result: anyhow::Result<T>) -> Result<T, ParseError> {
    result.map_err(|e| ParseError::at_line(line, token, e))
}

/// Parse every non-blank line with `parse_line`
///
/// Blank lines are skipped only at the end of the input; a blank line in the
/// middle is handed to `parse_line` like any other.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    let input = non_empty(input)?.trim_end();
    numbered_lines(input)
        .map(|(line, text)| at_line(line, text, parse_line(text)))
        .collect()
}

/// Parse one value per line with [`FromStr`]
pub fn parse_values<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_lines(input, |line| Ok(line.trim().parse::<T>()?))
}

/// Blocks of consecutive non-blank lines, each line keeping its number
pub fn blank_line_groups(input: &str) -> Vec<Vec<(usize, &str)>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for (line, text) in numbered_lines(input) {
        if text.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push((line, text));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
