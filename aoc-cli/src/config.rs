//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::locator::InputLocator;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gzip-compressed input to load
    pub input_path: PathBuf,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Quiet mode
    pub quiet: bool,
    /// Debug-level diagnostics on stderr
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args for the puzzle `year`/`day`
    ///
    /// An explicit input path wins; otherwise the conventional layout under
    /// `--input-dir` is used. Both have `~` expanded.
    pub fn from_args(args: Args, year: u16, day: u8) -> Self {
        let input_path = match args.input {
            Some(path) => expand_tilde(&path),
            None => InputLocator::new(expand_tilde(&args.input_dir)).default_path(year, day),
        };

        Config {
            input_path,
            part_filter: args.part,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }

    /// Parts to run for a solver with `parts` parts
    pub fn parts(&self, parts: u8) -> Vec<u8> {
        match self.part_filter {
            Some(part) => vec![part],
            None => (1..=parts).collect(),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("aoc2020_day07").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args, 2020, 7)
    }

    #[test]
    fn test_default_input_path() {
        let config = config(&[]);
        assert_eq!(
            config.input_path,
            Path::new("inputs").join("2020").join("day07.txt.gz")
        );
        assert_eq!(config.parts(2), vec![1, 2]);
    }

    #[test]
    fn test_input_dir_override() {
        let config = config(&["--input-dir", "/data/aoc"]);
        assert_eq!(
            config.input_path,
            Path::new("/data/aoc").join("2020").join("day07.txt.gz")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = config(&["--input-dir", "/data/aoc", "bags.txt.gz", "--part", "2"]);
        assert_eq!(config.input_path, PathBuf::from("bags.txt.gz"));
        assert_eq!(config.parts(2), vec![2]);
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));
    }
}
