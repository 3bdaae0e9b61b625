//! Language management.
//!
//! Function word lists exist for two languages,
//! each one stored in its own sub-directory of the data directory.
use std::{fmt, str::FromStr};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// Name of the data sub-directory holding the word lists.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts `eng`/`english` and `ger`/`german`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eng" | "english" => Ok(Language::English),
            "ger" | "german" => Ok(Language::German),
            _ => Err(Error::UnknownLang(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::German => "German",
        };
        write!(f, "{}", name)
    }
}
