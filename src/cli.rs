//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use function_word_killer::categories::Category;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "function_word_killer",
    about = "Removes function words and their vectors from word vector files."
)]
/// Arguments of the `function_word_killer` command.
///
/// ```sh
/// USAGE:
///     function_word_killer [FLAGS] [OPTIONS] <input> [output]
///
/// FLAGS:
///     -a, --all               remove every category
///         --fix-fractional    treat tokens such as -12.5 or 3,14 as numerals
///
/// OPTIONS:
///     -c, --category <categories>...    category to remove (repeatable)
///         --data-dir <data-dir>         word lists location [default: data]
///     -l, --lang <lang>                 english or german
///         --seed <seed>                 seed of the word list shuffling
///
/// ARGS:
///     <input>     word vector file
///     <output>    destination [default: default_output.txt]
/// ```
pub struct FunctionWordKiller {
    #[structopt(parse(from_os_str), help = "word vector file")]
    pub input: PathBuf,
    #[structopt(parse(from_os_str), help = "destination", default_value = "default_output.txt")]
    pub output: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        help = "english or german. Asked for if missing."
    )]
    pub lang: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "data-dir",
        help = "word lists location",
        default_value = "data"
    )]
    pub data_dir: PathBuf,
    #[structopt(short = "a", long = "all", help = "remove every category")]
    pub all: bool,
    #[structopt(
        short = "c",
        long = "category",
        number_of_values = 1,
        help = "category to remove (repeatable): adpositions, articles, conjunctions, interjections, interrogatives, numerals, particles, pronouns, temporal, miscellaneous. Asked for if neither this nor --all is given."
    )]
    pub categories: Vec<Category>,
    #[structopt(
        long = "fix-fractional",
        help = "treat tokens such as -12.5 or 3,14 as numerals"
    )]
    pub fix_fractional: bool,
    #[structopt(long = "seed", help = "seed of the word list shuffling")]
    pub seed: Option<u64>,
}
