//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Solve one Advent of Code puzzle from its gzip-compressed input
#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Args {
    /// Gzip-compressed puzzle input. Defaults to `<input-dir>/<year>/day<DD>.txt.gz`,
    /// resolved against the current working directory when relative
    pub input: Option<PathBuf>,

    /// Base directory of the default input path, relative to the current
    /// working directory unless absolute
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log loader and solver diagnostics to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_input_help_names_working_directory() {
        let command = Args::command();
        let help = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_help())
                .map(ToString::to_string)
                .unwrap()
        };
        assert!(help("input").contains("<input-dir>/<year>/day<DD>.txt.gz"));
        assert!(help("input").contains("current working directory"));
        assert!(help("input_dir").contains("current working directory"));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc2020_day01"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert_eq!(args.part, None);
        assert!(!args.quiet && !args.verbose);
    }

    #[test]
    fn test_explicit_input_and_part() {
        let args =
            Args::try_parse_from(["aoc2020_day01", "my/day01.txt.gz", "--part", "2", "-q"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("my/day01.txt.gz")));
        assert_eq!(args.part, Some(2));
        assert!(args.quiet);
    }

    #[test]
    fn test_part_out_of_range_rejected() {
        assert!(Args::try_parse_from(["aoc2020_day01", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc2020_day01", "--part", "0"]).is_err());
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["aoc2020_day01", "-q", "-v"]).is_err());
    }
}
