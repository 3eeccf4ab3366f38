//! Conventional location of puzzle inputs

use std::path::PathBuf;

/// Default input paths under one base directory
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt.gz`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLocator {
    input_dir: PathBuf,
}

impl InputLocator {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Get the input path for a specific year/day
    pub fn default_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join(format!("day{day:02}.txt.gz"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_path_format() {
        let locator = InputLocator::new("inputs");

        assert_eq!(
            locator.default_path(2020, 1),
            Path::new("inputs").join("2020").join("day01.txt.gz")
        );
        assert_eq!(
            locator.default_path(2020, 18),
            Path::new("inputs").join("2020").join("day18.txt.gz")
        );
    }
}
