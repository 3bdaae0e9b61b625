//! Removable word dictionary construction.
use log::{debug, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    categories::{Category, CategorySelection},
    dictionary::WordSet,
    io::WordListSource,
};

/// Words contributed by a category, in the order they are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWords {
    pub category: Category,
    pub words: Vec<String>,
    /// `false` if the list could not be loaded. `words` is then empty.
    pub loaded: bool,
}

/// Builds a [WordSet] out of the selected categories.
///
/// Lists are usually sorted alphabetically, and sorted insertion turns the tree into a list.
/// Each list is shuffled before insertion to avoid that. This is a heuristic, not a guarantee.
pub struct DictionaryBuilder<R> {
    rng: R,
}

impl DictionaryBuilder<StdRng> {
    /// Use a seeded rng if `seed` is provided, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> DictionaryBuilder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Loads every selected category from `source` and inserts its (lower-cased) words in a single dictionary.
    ///
    /// A list that can't be loaded contributes nothing.
    pub fn build<S: WordListSource>(
        &mut self,
        source: &S,
        selection: &CategorySelection,
    ) -> (WordSet, Vec<SelectedWords>) {
        let mut dictionary = WordSet::new();
        let mut selected = Vec::new();

        for category in selection.iter() {
            let (mut words, loaded) = match source.load(category) {
                Ok(words) => (words, true),
                Err(e) => {
                    warn!(
                        "{}: {}. Those function words couldn't be added to the words to remove.",
                        category.label(),
                        e
                    );
                    (Vec::new(), false)
                }
            };
            debug!("{}: {} words", category, words.len());

            selected.push(SelectedWords {
                category,
                words: words.clone(),
                loaded,
            });

            words.shuffle(&mut self.rng);
            for word in words {
                dictionary.insert(word.to_lowercase());
            }
        }

        info!(
            "dictionary holds {} words (tree height {})",
            dictionary.len(),
            dictionary.height()
        );
        (dictionary, selected)
    }
}
