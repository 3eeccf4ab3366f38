//! A part that reuses another part's result through the shared data

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

/// Boarding passes kept as borrowed codes, with decoded ids filled in lazily
struct Passes<'a> {
    codes: Vec<&'a str>,
    ids: Option<Vec<u16>>,
}

impl Passes<'_> {
    fn ids(&mut self) -> &[u16] {
        let codes = &self.codes;
        self.ids.get_or_insert_with(|| {
            let mut ids: Vec<u16> = codes
                .iter()
                .map(|code| {
                    code.bytes()
                        .fold(0, |id, b| id << 1 | u16::from(matches!(b, b'B' | b'R')))
                })
                .collect();
            ids.sort_unstable();
            ids
        })
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Boarding;

impl AocParser for Boarding {
    type SharedData<'a> = Passes<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let codes = input
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                if line.len() == 10 && line.bytes().all(|b| b"FBLR".contains(&b)) {
                    Ok(line)
                } else {
                    Err(ParseError::at_line(idx + 1, line, "expected 10 of F/B/L/R"))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Passes { codes, ids: None })
    }
}

impl PartSolver<1> for Boarding {
    fn solve(shared: &mut Passes<'_>) -> Result<String, SolveError> {
        shared
            .ids()
            .last()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::computation("no passes"))
    }
}

impl PartSolver<2> for Boarding {
    fn solve(shared: &mut Passes<'_>) -> Result<String, SolveError> {
        shared
            .ids()
            .windows(2)
            .find(|pair| pair[1] - pair[0] == 2)
            .map(|pair| (pair[0] + 1).to_string())
            .ok_or_else(|| SolveError::computation("no free seat"))
    }
}

const PASSES: &str = "FBFBBFFRLR\nFBFBBFFRRR\nBFFFBBFRRR";

#[test]
fn test_parse_borrows_codes() {
    let passes = Boarding::parse(PASSES).unwrap();
    assert_eq!(passes.codes, vec!["FBFBBFFRLR", "FBFBBFFRRR", "BFFFBBFRRR"]);
    assert!(passes.ids.is_none());
    assert_eq!(<Boarding as Solver>::PARTS, 2);
}

#[test]
fn test_part1_fills_cache() {
    let mut passes = Boarding::parse(PASSES).unwrap();
    assert_eq!(Boarding::solve_part(&mut passes, 1).unwrap(), "567");
    assert_eq!(passes.ids, Some(vec![357, 359, 567]));
}

#[test]
fn test_part2_reuses_or_computes() {
    let mut after_part1 = Boarding::parse(PASSES).unwrap();
    Boarding::solve_part(&mut after_part1, 1).unwrap();
    assert_eq!(Boarding::solve_part(&mut after_part1, 2).unwrap(), "358");

    let mut fresh = Boarding::parse(PASSES).unwrap();
    assert_eq!(Boarding::solve_part(&mut fresh, 2).unwrap(), "358");
}

#[test]
fn test_bad_code_reports_line() {
    let err = Boarding::parse("FBFBBFFRLR\nFBFBXFFRLR").err().unwrap();
    assert_eq!(err.line(), Some(2));
}
