//! Function word categories.
//!
//! Ten closed word classes can be removed.
//! Each one is backed by a word list file, see [crate::io::DataDir].
use std::{fmt, str::FromStr};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Adpositions,
    Articles,
    Conjunctions,
    Interjections,
    Interrogatives,
    Numerals,
    Particles,
    PersonalPronouns,
    TemporalWords,
    Miscellaneous,
}

impl Category {
    /// Every category, in prompt order.
    pub const ALL: [Category; 10] = [
        Category::Adpositions,
        Category::Articles,
        Category::Conjunctions,
        Category::Interjections,
        Category::Interrogatives,
        Category::Numerals,
        Category::Particles,
        Category::PersonalPronouns,
        Category::TemporalWords,
        Category::Miscellaneous,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Name of the word list file.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Adpositions => "adpositions.txt",
            Category::Articles => "articles_and_the_like.txt",
            Category::Conjunctions => "conjunctions_and_subjunctions.txt",
            Category::Interjections => "interjections.txt",
            Category::Interrogatives => "interrogative_words.txt",
            Category::Numerals => "numerals.txt",
            Category::Particles => "particles.txt",
            Category::PersonalPronouns => "personal_pronouns_and_possessives.txt",
            Category::TemporalWords => "temporal_words.txt",
            Category::Miscellaneous => "miscellaneous_words.txt",
        }
    }

    /// Short name, used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Adpositions => "adpositions",
            Category::Articles => "articles",
            Category::Conjunctions => "conjunctions",
            Category::Interjections => "interjections",
            Category::Interrogatives => "interrogatives",
            Category::Numerals => "numerals",
            Category::Particles => "particles",
            Category::PersonalPronouns => "pronouns",
            Category::TemporalWords => "temporal",
            Category::Miscellaneous => "miscellaneous",
        }
    }

    /// Heading of the confirmation report.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Adpositions => "Adpositions",
            Category::Articles => "Articles etc. (various pronouns, demonstratives, ...)",
            Category::Conjunctions => "Conjunctions and subjunctions",
            Category::Interjections => "Interjections",
            Category::Interrogatives => "Interrogative words",
            Category::Numerals => "Numerals",
            Category::Particles => "Particles",
            Category::PersonalPronouns => "Personal pronouns and possessives",
            Category::TemporalWords => "Temporal words",
            Category::Miscellaneous => "Miscellaneous words",
        }
    }

    /// Interactive question.
    pub fn question(&self) -> &'static str {
        match self {
            Category::Adpositions => "Remove adpositions?",
            Category::Articles => "Remove articles etc.?",
            Category::Conjunctions => "Remove conjunctions and subjunctions?",
            Category::Interjections => "Remove interjections?",
            Category::Interrogatives => "Remove interrogative words?",
            Category::Numerals => "Remove numerals?",
            Category::Particles => "Remove particles?",
            Category::PersonalPronouns => "Remove personal pronouns and possessives?",
            Category::TemporalWords => "Remove temporal words?",
            Category::Miscellaneous => "Remove miscellaneous function words?",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
                Error::Custom(format!(
                    "unknown category {:?} (expected one of: {})",
                    s,
                    names.join(", ")
                ))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which categories are to be removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: [bool; 10],
}

impl CategorySelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            selected: [true; 10],
        }
    }

    pub fn select(&mut self, category: Category) {
        self.selected[category.index()] = true;
    }

    pub fn deselect(&mut self, category: Category) {
        self.selected[category.index()] = false;
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected[category.index()]
    }

    /// `true` if at least one category is selected.
    pub fn any(&self) -> bool {
        self.selected.iter().any(|&s| s)
    }

    /// Selected categories, in prompt order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .iter()
            .copied()
            .filter(move |category| self.is_selected(*category))
    }
}

impl FromIterator<Category> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut selection = Self::none();
        for category in iter {
            selection.select(category);
        }
        selection
    }
}
