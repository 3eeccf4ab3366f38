//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer to one part, with when solving started and ended
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The part number this answer belongs to
    pub part: u8,
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// One run of a puzzle: its parsed input plus parse timing.
///
/// Anything a part memoises in the shared data is visible to the parts
/// solved after it.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverInstance};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(idx, l)| l.parse().map_err(|e| ParseError::at_line(idx + 1, l, e)))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u32>().to_string())
///     }
/// }
///
/// let mut instance = SolverInstance::<Sum>::new(2020, 1, "1\n2\n3").unwrap();
/// assert_eq!(instance.solve(1).unwrap().answer, "6");
/// assert!(instance.solve(2).is_err());
/// ```
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

/// Run `f`, stamping wall-clock time before and after
fn timed<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(T, DateTime<Utc>, DateTime<Utc>), E> {
    let start = Utc::now();
    let value = f()?;
    Ok((value, start, Utc::now()))
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for puzzle `year`/`day`, recording how long parsing took
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_start, parse_end) = timed(|| S::parse(input))?;
        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Solve one part against the shared data
    ///
    /// Parts outside `1..=S::PARTS` are rejected with `SolveError::PartOutOfRange`.
    pub fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, solve_start, solve_end) =
            timed(|| S::solve_part_checked_range(shared, part))?;
        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    /// Solve every part in `parts`, stopping at the first failure
    pub fn solve_all(
        &mut self,
        parts: impl IntoIterator<Item = u8>,
    ) -> Result<Vec<SolveResult>, SolveError> {
        parts.into_iter().map(|part| self.solve(part)).collect()
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn parts(&self) -> u8 {
        S::PARTS
    }

    pub fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    pub fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}
