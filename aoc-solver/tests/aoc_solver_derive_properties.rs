//! Property tests for `#[derive(AocSolver)]` dispatch through `SolverInstance`

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverInstance};
use proptest::prelude::*;

/// Numbers one per line; part 1 sums, part 2 takes the spread
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumSpread;

impl AocParser for SumSpread {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, l)| l.parse().map_err(|e| ParseError::at_line(idx + 1, l, e)))
            .collect()
    }
}

impl PartSolver<1> for SumSpread {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumSpread {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (Some(min), Some(max)) = (shared.iter().min(), shared.iter().max()) else {
            return Err(SolveError::computation("no numbers"));
        };
        Ok((max - min).to_string())
    }
}

/// Part 2 reads the target part 1 memoised, like the XMAS weakness search
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Memoising;

struct Memo {
    numbers: Vec<i64>,
    largest: Option<i64>,
}

impl Memo {
    fn largest(&mut self) -> i64 {
        let numbers = &self.numbers;
        *self
            .largest
            .get_or_insert_with(|| numbers.iter().copied().max().unwrap_or_default())
    }
}

impl AocParser for Memoising {
    type SharedData<'a> = Memo;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Memo {
            numbers: SumSpread::parse(input)?,
            largest: None,
        })
    }
}

impl PartSolver<1> for Memoising {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.largest().to_string())
    }
}

impl PartSolver<2> for Memoising {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let largest = shared.largest();
        Ok(shared.numbers.iter().filter(|&&n| n == largest).count().to_string())
    }
}

fn render(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn derived_dispatch_matches_part_solvers(
        numbers in prop::collection::vec(-1000i64..1000, 1..30),
        part in 1u8..=2,
    ) {
        let input = render(&numbers);
        let mut via_derive = SumSpread::parse(&input).unwrap();
        let mut direct = SumSpread::parse(&input).unwrap();

        let expected = match part {
            1 => <SumSpread as PartSolver<1>>::solve(&mut direct),
            _ => <SumSpread as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(SumSpread::solve_part(&mut via_derive, part).unwrap(), expected.unwrap());
    }

    #[test]
    fn unknown_parts_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=u8::MAX]) {
        let mut shared = SumSpread::parse("4\n5").unwrap();
        let err = SumSpread::solve_part(&mut shared, part).unwrap_err();
        prop_assert!(matches!(err, SolveError::PartNotImplemented(p) if p == part));
    }

    #[test]
    fn instance_rejects_out_of_range_parts(part in prop_oneof![Just(0u8), 3u8..=u8::MAX]) {
        let mut instance = SolverInstance::<SumSpread>::new(2020, 1, "4\n5").unwrap();
        let err = instance.solve(part).unwrap_err();
        prop_assert!(matches!(err, SolveError::PartOutOfRange(p) if p == part));
    }

    #[test]
    fn memoised_value_is_order_independent(
        numbers in prop::collection::vec(0i64..50, 1..30),
        part_two_first in any::<bool>(),
    ) {
        let input = render(&numbers);
        let largest = *numbers.iter().max().unwrap();
        let occurrences = numbers.iter().filter(|&&n| n == largest).count();

        let mut instance = SolverInstance::<Memoising>::new(2020, 9, &input).unwrap();
        let order = if part_two_first { [2, 1] } else { [1, 2] };
        let mut results = instance.solve_all(order).unwrap();
        results.sort_by_key(|r| r.part);

        prop_assert_eq!(&results[0].answer, &largest.to_string());
        prop_assert_eq!(&results[1].answer, &occurrences.to_string());
    }

    #[test]
    fn parse_error_reports_first_bad_line(
        good in prop::collection::vec(0i64..1000, 0..20),
        bad in "[a-z]{1,5}",
    ) {
        let mut input = render(&good);
        if !good.is_empty() {
            input.push('\n');
        }
        input.push_str(&bad);

        let err = SolverInstance::<SumSpread>::new(2020, 1, &input).err().unwrap();
        prop_assert_eq!(err.line(), Some(good.len() + 1));
        let names_token = matches!(&err, ParseError::InvalidLine { token, .. } if *token == bad);
        prop_assert!(names_token);
    }
}
