//! Function word list files.
//!
//! A list file holds space-separated words. Only the last non-empty line of a file is kept:
//! lists are expected to be stored on a single line.
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{categories::Category, error::Error, lang::Language};

/// Provides the word list of a category.
pub trait WordListSource {
    /// Words of `category`, in the order they are stored.
    fn load(&self, category: Category) -> Result<Vec<String>, Error>;
}

/// Word lists stored in `<root>/<language>/<category file>`.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
    language: Language,
}

impl DataDir {
    pub fn new(root: &Path, language: Language) -> Self {
        Self {
            root: root.to_path_buf(),
            language,
        }
    }

    /// Location of the word list of `category`.
    pub fn path(&self, category: Category) -> PathBuf {
        [
            self.root.as_path(),
            Path::new(self.language.dir_name()),
            Path::new(category.file_name()),
        ]
        .iter()
        .collect()
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl WordListSource for DataDir {
    fn load(&self, category: Category) -> Result<Vec<String>, Error> {
        let path = self.path(category);
        debug!("loading {:?} from {:?}", category, path);
        let file = File::open(&path)?;
        parse_word_list(BufReader::new(file))
    }
}

/// In-memory lists, mostly useful to feed a dictionary without touching the disk.
impl WordListSource for HashMap<Category, Vec<String>> {
    fn load(&self, category: Category) -> Result<Vec<String>, Error> {
        self.get(&category).cloned().ok_or_else(|| {
            Error::Custom(format!("no word list for {}", category))
        })
    }
}

/// Reads a list file. The words of the last non-empty line are returned.
pub fn parse_word_list<R: BufRead>(reader: R) -> Result<Vec<String>, Error> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        words = line
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();
    }
    Ok(words)
}
