//! # Function word killer
//!
//! Removes function words (articles, pronouns, adpositions, ...) and their vectors from a word vector file.
//!
//! ```sh
//! function_word_killer my_word_vectors.txt my_important_word_vectors.txt --lang english --all
//! ```
//!
//! Language and categories are asked for interactively when they are not provided.
//! Files ending with `.gz` are read/written gzipped.
use std::{fs::File, io};

use function_word_killer::{
    categories::CategorySelection,
    config::Config,
    error::Error,
    filtering::NumericToken,
    lang::Language,
    pipeline::{Killer, SelectedWords},
    prompt,
};
use itertools::Itertools;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn print_selection(input: &str, selected: &[SelectedWords]) {
    println!(
        "\nThe following words will be removed from your word vector file (\"{}\"):",
        input
    );
    for s in selected {
        println!("{}:", s.category.label());
        if s.loaded {
            println!("\t{}", s.words.iter().join(", "));
        } else {
            println!("\t(couldn't be loaded)");
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::FunctionWordKiller::from_args();
    debug!("cli args\n{:#?}", opt);

    // checks if the input file is readable before asking anything
    if let Err(e) = File::open(&opt.input) {
        error!(
            "opening {:?} failed, make sure that the file exists and that the path is correct",
            opt.input
        );
        return Err(e.into());
    }
    println!("Input file: {:?}", opt.input);
    println!("Output file: {:?}", opt.output);

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();

    let language: Language = match &opt.lang {
        Some(lang) => lang.parse()?,
        None => prompt::ask_language(&mut stdin, &mut stdout)?,
    };

    let categories = if opt.all {
        CategorySelection::all()
    } else if !opt.categories.is_empty() {
        opt.categories.iter().copied().collect()
    } else {
        prompt::ask_categories(&mut stdin, &mut stdout)?
    };

    if !categories.any() {
        println!("You didn't select words to remove - so there is nothing to do!");
        return Ok(());
    }

    let numeric = if opt.fix_fractional {
        NumericToken::with_fractions()
    } else {
        NumericToken::default()
    };
    let config = Config::new(&opt.input, language, categories)
        .with_output(&opt.output)
        .with_data_dir(&opt.data_dir)
        .with_numeric(numeric)
        .with_seed(opt.seed);

    let input = opt.input.display().to_string();
    let report = Killer::new(config).run_with(|selected| {
        print_selection(&input, selected);
        println!(
            "\n\tCreating new file ({:?}) without those words and their vectors...",
            opt.output
        );
    })?;

    println!("\t---Done.");
    println!("\nNumber of removed word vectors = {}", report.removed());
    Ok(())
}
