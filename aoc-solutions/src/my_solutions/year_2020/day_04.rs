//! Day 4: Passport Processing

use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

use crate::utils::parsing::{at_line, blank_line_groups, non_empty};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BirthYear,
    IssueYear,
    ExpirationYear,
    Height,
    HairColor,
    EyeColor,
    PassportId,
    CountryId,
}

impl Field {
    /// Every field except the optional country id
    const REQUIRED: [Field; 7] = [
        Field::BirthYear,
        Field::IssueYear,
        Field::ExpirationYear,
        Field::Height,
        Field::HairColor,
        Field::EyeColor,
        Field::PassportId,
    ];

    fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "byr" => Self::BirthYear,
            "iyr" => Self::IssueYear,
            "eyr" => Self::ExpirationYear,
            "hgt" => Self::Height,
            "hcl" => Self::HairColor,
            "ecl" => Self::EyeColor,
            "pid" => Self::PassportId,
            "cid" => Self::CountryId,
            _ => return None,
        })
    }

    fn is_valid(self, value: &str) -> bool {
        match self {
            Self::BirthYear => year_in(value, 1920, 2002),
            Self::IssueYear => year_in(value, 2010, 2020),
            Self::ExpirationYear => year_in(value, 2020, 2030),
            Self::Height => {
                if let Some(cm) = value.strip_suffix("cm") {
                    number_in(cm, 150, 193)
                } else if let Some(inches) = value.strip_suffix("in") {
                    number_in(inches, 59, 76)
                } else {
                    false
                }
            }
            Self::HairColor => value
                .strip_prefix('#')
                .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))),
            Self::EyeColor => matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"),
            Self::PassportId => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
            Self::CountryId => true,
        }
    }
}

fn number_in(value: &str, lo: u32, hi: u32) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<u32>().is_ok_and(|n| (lo..=hi).contains(&n))
}

fn year_in(value: &str, lo: u32, hi: u32) -> bool {
    value.len() == 4 && number_in(value, lo, hi)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passport<'a> {
    fields: HashMap<Field, &'a str>,
}

impl Passport<'_> {
    fn has_required_fields(&self) -> bool {
        Field::REQUIRED.iter().all(|f| self.fields.contains_key(f))
    }

    fn is_valid(&self) -> bool {
        self.has_required_fields()
            && self.fields.iter().all(|(field, value)| field.is_valid(value))
    }
}

fn parse_passport<'a>(lines: &[(usize, &'a str)]) -> Result<Passport<'a>, ParseError> {
    let mut fields = HashMap::new();
    for &(line, text) in lines {
        for token in text.split_whitespace() {
            let entry = token
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `key:value`"))
                .and_then(|(key, value)| {
                    Field::from_key(key)
                        .map(|field| (field, value))
                        .ok_or_else(|| anyhow!("unknown passport field `{key}`"))
                });
            let (field, value) = at_line(line, token, entry)?;
            if fields.insert(field, value).is_some() {
                return Err(ParseError::at_line(line, token, "duplicate passport field"));
            }
        }
    }
    Ok(Passport { fields })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        blank_line_groups(non_empty(input)?)
            .iter()
            .map(|group| parse_passport(group))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.has_required_fields()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.is_valid()).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverInstance;

    const EXAMPLE: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    const INVALID: &str = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

    const VALID: &str = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

    fn solve(input: &str, part: u8) -> String {
        SolverInstance::<Solver>::new(2020, 4, input)
            .unwrap()
            .solve(part)
            .unwrap()
            .answer
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(solve(EXAMPLE, 1), "2");
    }

    #[test]
    fn test_part2_rejects_invalid_examples() {
        assert_eq!(solve(INVALID, 1), "4");
        assert_eq!(solve(INVALID, 2), "0");
    }

    #[test]
    fn test_part2_accepts_valid_examples() {
        assert_eq!(solve(VALID, 2), "4");
    }

    #[test]
    fn test_field_rules() {
        assert!(Field::BirthYear.is_valid("2002"));
        assert!(!Field::BirthYear.is_valid("2003"));
        assert!(Field::Height.is_valid("60in"));
        assert!(Field::Height.is_valid("190cm"));
        assert!(!Field::Height.is_valid("190in"));
        assert!(!Field::Height.is_valid("190"));
        assert!(Field::HairColor.is_valid("#123abc"));
        assert!(!Field::HairColor.is_valid("#123abz"));
        assert!(!Field::HairColor.is_valid("123abc"));
        assert!(Field::EyeColor.is_valid("brn"));
        assert!(!Field::EyeColor.is_valid("wat"));
        assert!(Field::PassportId.is_valid("000000001"));
        assert!(!Field::PassportId.is_valid("0123456789"));
        assert!(!Field::IssueYear.is_valid("+2015"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Solver::parse("\n\n").unwrap_err(), ParseError::EmptyInput);

        let err = Solver::parse("byr:1937\n\nfoo:1 iyr:2017").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 3, ref token, .. } if token == "foo:1"));

        let err = Solver::parse("byr:1937 byr:1938").unwrap_err();
        assert_eq!(err.line(), Some(1));

        assert_eq!(Solver::parse("byr1937").unwrap_err().line(), Some(1));
    }
}
