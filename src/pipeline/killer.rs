//! Whole run: dictionary construction then filtering.
use log::info;

use crate::{
    config::Config,
    error::Error,
    io::{create_output, open_input, DataDir, WordListSource},
};

use super::{DictionaryBuilder, FilterReport, LineFilter, Pipeline, SelectedWords};

/// Removes the function words selected in a [Config] (and their vectors) from a word vector file.
pub struct Killer<S> {
    config: Config,
    source: S,
}

impl Killer<DataDir> {
    /// Word lists are read from the configured data directory.
    pub fn new(config: Config) -> Self {
        let source = DataDir::new(&config.data_dir, config.language);
        Self { config, source }
    }
}

impl<S: WordListSource> Killer<S> {
    pub fn with_source(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the filter. `confirm` is given the selected words once the dictionary is built,
    /// before any line is filtered.
    ///
    /// Fails before doing anything if the input can't be opened or the output can't be created.
    pub fn run_with<F>(&self, confirm: F) -> Result<FilterReport, Error>
    where
        F: FnOnce(&[SelectedWords]),
    {
        let input = open_input(&self.config.input)?;
        let mut output = create_output(&self.config.output)?;

        let mut builder = DictionaryBuilder::from_seed(self.config.seed);
        let (mut dictionary, selected) = builder.build(&self.source, &self.config.categories);
        confirm(selected.as_slice());

        info!(
            "creating {:?} from {:?}",
            self.config.output, self.config.input
        );
        let filter = LineFilter::new(self.config.numeric_rule());
        let report = filter.run(&mut dictionary, input, &mut output)?;
        output.finish()?;

        Ok(report)
    }
}

impl<S: WordListSource> Pipeline<FilterReport> for Killer<S> {
    fn run(&self) -> Result<FilterReport, Error> {
        self.run_with(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;
    use crate::categories::{Category, CategorySelection};
    use crate::lang::Language;

    fn articles() -> HashMap<Category, Vec<String>> {
        let mut lists = HashMap::new();
        lists.insert(Category::Articles, vec!["the".to_string(), "a".to_string()]);
        lists
    }

    #[test]
    fn missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let config = Config::new(
            &dir.path().join("missing.vec"),
            Language::English,
            CategorySelection::all(),
        )
        .with_output(&output);

        let mut confirmed = false;
        let result = Killer::with_source(config, articles()).run_with(|_| confirmed = true);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!confirmed);
        assert!(!output.exists());
    }

    #[test]
    fn uncreatable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.vec");
        std::fs::write(&input, "the 0.1\n").unwrap();
        let config = Config::new(&input, Language::English, CategorySelection::all())
            .with_output(&dir.path().join("no").join("such").join("dir.txt"));

        let result = Killer::with_source(config, articles()).run();
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.vec");
        let output = dir.path().join("out.vec");
        std::fs::write(&input, "the 0.1 0.2\ncat 0.3 0.4\na 0.5 0.6\nthe 0.7 0.8\n").unwrap();

        let mut selection = CategorySelection::none();
        selection.select(Category::Articles);
        let config = Config::new(&input, Language::English, selection)
            .with_output(&output)
            .with_seed(Some(0));

        let killer = Killer::with_source(config, articles());
        assert_eq!(killer.config().input, input);

        let mut selected = Vec::new();
        let report = killer
            .run_with(|words| selected.extend_from_slice(words))
            .unwrap();

        assert_eq!(report.removed(), 2);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].words, vec!["the", "a"]);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "cat 0.3 0.4\nthe 0.7 0.8\n"
        );
    }

    #[test]
    fn data_dir_source() {
        let config = Config::new(Path::new("in.vec"), Language::German, CategorySelection::none())
            .with_data_dir(Path::new("lists"));
        let killer = Killer::new(config);
        assert_eq!(killer.config().data_dir, Path::new("lists"));
    }
}
