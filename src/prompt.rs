//! Interactive questions.
//!
//! Used by the binary when the language or the categories are not provided as arguments.
use std::io::{BufRead, Write};

use crate::{
    categories::{Category, CategorySelection},
    error::Error,
    lang::Language,
};

/// What a category question can be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Select every category and skip the remaining questions.
    All,
}

impl Answer {
    /// `y`/`yes` and `a`/`all`, case-insensitively. Anything else means no.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Answer::Yes,
            "a" | "all" => Answer::All,
            _ => Answer::No,
        }
    }
}

/// Reads the first word of the next line. End of input gives an empty word.
fn read_word<R: BufRead>(input: &mut R) -> Result<String, Error> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}

pub fn ask_language<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Language, Error> {
    write!(
        output,
        "\nDo you want to remove English or German function words?\n(Enter \"english\" or \"german\".) "
    )?;
    output.flush()?;
    read_word(input)?.parse()
}

pub fn ask_categories<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<CategorySelection, Error> {
    writeln!(
        output,
        "What words do you want to remove from your word vector file?\n(Answer by entering 'y' for \"yes\", 'a' to skip the other questions and remove all function words or enter every other character for \"no\")"
    )?;

    let mut selection = CategorySelection::none();
    let total = Category::ALL.len();
    for (idx, category) in Category::ALL.iter().enumerate() {
        write!(output, "{:>2}/{} - {} ", idx + 1, total, category.question())?;
        output.flush()?;
        match Answer::parse(&read_word(input)?) {
            Answer::All => return Ok(CategorySelection::all()),
            Answer::Yes => selection.select(*category),
            Answer::No => (),
        }
    }
    Ok(selection)
}
