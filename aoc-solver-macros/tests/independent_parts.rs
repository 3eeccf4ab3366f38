use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

// Borrowing solver: shared data is a slice of the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct LongestLine;

impl AocParser for LongestLine {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LongestLine {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|line| line.len())
            .map(|line| line.to_string())
            .ok_or_else(|| SolveError::computation("no lines"))
    }
}

#[test]
fn test_independent_parts_compiles() {
    let input = "1\n2\n3\n4\n5";
    let parsed = TestSolver::parse(input).unwrap();
    assert_eq!(parsed, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_solver_trait_implemented() {
    let mut parsed = TestSolver::parse("1\n2\n3").unwrap();

    assert_eq!(TestSolver::solve_part(&mut parsed, 1).unwrap(), "6");
    assert_eq!(TestSolver::solve_part(&mut parsed, 2).unwrap(), "6");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut parsed = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part(&mut parsed, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_checked_range_rejects_before_dispatch() {
    let mut parsed = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part_checked_range(&mut parsed, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("ab\nabcd\nabc");
    let mut parsed = LongestLine::parse(&input).unwrap();
    assert_eq!(LongestLine::solve_part(&mut parsed, 1).unwrap(), "abcd");
    assert_eq!(<LongestLine as Solver>::PARTS, 1);
}
