//! Run configuration.
//!
//! Holds everything a run needs, so that dictionary construction and filtering
//! never depend on interactive state.
use std::path::{Path, PathBuf};

use crate::{
    categories::{Category, CategorySelection},
    filtering::NumericToken,
    lang::Language,
};

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "default_output.txt";

/// Directory holding the `english` and `german` word list directories.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub language: Language,
    pub categories: CategorySelection,
    pub data_dir: PathBuf,
    pub numeric: NumericToken,
    /// Seed of the word list shuffling. Entropy is used if `None`.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(input: &Path, language: Language, categories: CategorySelection) -> Self {
        Self {
            input: input.to_path_buf(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            language,
            categories,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            numeric: NumericToken::default(),
            seed: None,
        }
    }

    pub fn with_output(mut self, output: &Path) -> Self {
        self.output = output.to_path_buf();
        self
    }

    pub fn with_data_dir(mut self, data_dir: &Path) -> Self {
        self.data_dir = data_dir.to_path_buf();
        self
    }

    pub fn with_numeric(mut self, numeric: NumericToken) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Numeric tokens are removed only when numerals are.
    pub fn numeric_rule(&self) -> Option<NumericToken> {
        if self.categories.is_selected(Category::Numerals) {
            Some(self.numeric)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::new(Path::new("in.vec"), Language::English, CategorySelection::none());
        assert_eq!(c.output, PathBuf::from("default_output.txt"));
        assert_eq!(c.data_dir, PathBuf::from("data"));
        assert_eq!(c.seed, None);
        assert_eq!(c.numeric_rule(), None);
    }

    #[test]
    fn numeric_rule_follows_numerals() {
        let mut sel = CategorySelection::none();
        sel.select(Category::Numerals);
        let c = Config::new(Path::new("in.vec"), Language::German, sel)
            .with_numeric(NumericToken::with_fractions());
        assert_eq!(c.numeric_rule(), Some(NumericToken::with_fractions()));
    }
}
