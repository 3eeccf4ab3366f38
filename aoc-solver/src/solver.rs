//! The parse and solve contracts every puzzle implements

use crate::error::{ParseError, SolveError};

/// Turns the decoded puzzle text into the puzzle's typed input.
///
/// `SharedData` may borrow from the input text (`Vec<&'a str>`, structs of
/// `&'a str` fields) or own everything. Parts receive it mutably, so it can
/// also hold results one part computes for another.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// /// Comma-separated starting numbers
/// struct Starts;
///
/// impl AocParser for Starts {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let line = input.trim();
///         if line.is_empty() {
///             return Err(ParseError::EmptyInput);
///         }
///         line.split(',')
///             .map(|n| n.parse().map_err(|e| ParseError::at_line(1, n, e)))
///             .collect()
///     }
/// }
///
/// assert_eq!(Starts::parse("0,3,6\n").unwrap(), vec![0, 3, 6]);
/// assert_eq!(Starts::parse("0,x").unwrap_err().line(), Some(1));
/// ```
pub trait AocParser {
    type SharedData<'a>;

    /// Parse the whole input. Malformed input is an error, never skipped.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle, numbered by `N`.
///
/// Implemented once per part; `#[derive(AocSolver)]` then checks at compile
/// time that every part up to `max_parts` exists.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input.lines().map(|l| l.parse().map_err(|e| ParseError::at_line(1, l, e))).collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let deepest = shared.iter().max().ok_or_else(|| SolveError::computation("no depths"))?;
///         Ok(deepest.to_string())
///     }
/// }
///
/// let mut depths = Depths::parse("199\n200\n208").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut depths).unwrap(), "208");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: its parser plus a dispatcher from part number to answer.
///
/// Normally derived. A hand-written impl looks like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Seats;
///
/// impl AocParser for Seats {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Seats {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             2 => Ok(shared.iter().map(|s| s.len()).sum::<usize>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut rows = Seats::parse("L.L\nLLL").unwrap();
/// assert_eq!(Seats::solve_part(&mut rows, 2).unwrap(), "6");
/// ```
pub trait Solver: AocParser {
    /// Parts are numbered `1..=PARTS`
    const PARTS: u8;

    /// Answer for `part`.
    ///
    /// Fails with `SolveError::Computation` when the input breaks an
    /// assumption the algorithm needs (no matching pair, no free seat).
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range checking on top of [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Like `solve_part`, but part numbers outside `1..=PARTS` fail with
    /// `SolveError::PartOutOfRange` before the solver sees them.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
