use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use function_word_killer::categories::{Category, CategorySelection};
use function_word_killer::config::Config;
use function_word_killer::error::Error;
use function_word_killer::filtering::NumericToken;
use function_word_killer::lang::Language;
use function_word_killer::pipeline::{Killer, Pipeline};

fn write_lists(root: &Path) {
    let english = root.join("english");
    std::fs::create_dir_all(&english).unwrap();
    std::fs::write(english.join("articles_and_the_like.txt"), "a an the\n").unwrap();
    std::fs::write(english.join("numerals.txt"), "one two three\n").unwrap();
    // only the last line counts
    std::fs::write(english.join("particles.txt"), "ignored\nnot to\n").unwrap();
}

const VECTORS: &str = "the 0.1 0.2
The 0.0 0.0
cat 0.3 0.4
a 0.5 0.6
42 0.1 0.1
-12.5 0.2 0.2
one 0.9 0.9
not 0.4 0.4
ignored 0.8 0.8
dog 0.7 0.7
";

fn selection(categories: &[Category]) -> CategorySelection {
    categories.iter().copied().collect()
}

#[test]
fn articles_only() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path());
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("filtered.txt");
    std::fs::write(&input, VECTORS).unwrap();

    let config = Config::new(&input, Language::English, selection(&[Category::Articles]))
        .with_output(&output)
        .with_data_dir(dir.path())
        .with_seed(Some(1));
    let report = Killer::new(config).run().unwrap();

    assert_eq!(report.removed(), 2);
    assert_eq!(report.removed_numeric, 0);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "The 0.0 0.0
cat 0.3 0.4
42 0.1 0.1
-12.5 0.2 0.2
one 0.9 0.9
not 0.4 0.4
ignored 0.8 0.8
dog 0.7 0.7
"
    );
}

#[test]
fn numerals_enable_numeric_rule() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path());
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("filtered.txt");
    std::fs::write(&input, VECTORS).unwrap();

    let config = Config::new(
        &input,
        Language::English,
        selection(&[Category::Numerals, Category::Particles]),
    )
    .with_output(&output)
    .with_data_dir(dir.path());
    let report = Killer::new(config).run().unwrap();

    // "42" is numeric, "-12.5" is not, "one" and "not" are dictionary words
    assert_eq!(report.removed_numeric, 1);
    assert_eq!(report.removed_dictionary, 2);
    let out = std::fs::read_to_string(&output).unwrap();
    assert!(out.contains("-12.5 0.2 0.2\n"));
    assert!(out.contains("ignored 0.8 0.8\n"));
    assert!(!out.contains("42 "));
}

#[test]
fn fixed_fractional_rule() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path());
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("filtered.txt");
    std::fs::write(&input, VECTORS).unwrap();

    let config = Config::new(&input, Language::English, selection(&[Category::Numerals]))
        .with_output(&output)
        .with_data_dir(dir.path())
        .with_numeric(NumericToken::with_fractions());
    let report = Killer::new(config).run().unwrap();

    assert_eq!(report.removed_numeric, 2);
    assert!(!std::fs::read_to_string(&output).unwrap().contains("-12.5"));
}

#[test]
fn missing_lists_degrade() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path());
    let input = dir.path().join("vectors.txt");
    let output = dir.path().join("filtered.txt");
    std::fs::write(&input, VECTORS).unwrap();

    // no german lists at all
    let config = Config::new(&input, Language::German, CategorySelection::all())
        .with_output(&output)
        .with_data_dir(dir.path());
    let mut loaded = Vec::new();
    let report = Killer::new(config)
        .run_with(|selected| loaded.extend(selected.iter().map(|s| s.loaded)))
        .unwrap();

    assert_eq!(loaded, vec![false; 10]);
    // numerals are selected, so the numeric rule still applies
    assert_eq!(report.removed(), 1);
    assert_eq!(report.kept, 9);
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(
        &dir.path().join("nope.vec"),
        Language::English,
        CategorySelection::all(),
    )
    .with_output(&dir.path().join("out.vec"));
    assert!(matches!(Killer::new(config).run(), Err(Error::Io(_))));
}

#[test]
fn gzipped_vectors() {
    let dir = tempfile::tempdir().unwrap();
    write_lists(dir.path());
    let input = dir.path().join("vectors.vec.gz");
    let output = dir.path().join("filtered.vec.gz");

    let mut enc = GzEncoder::new(File::create(&input).unwrap(), Compression::default());
    enc.write_all(VECTORS.as_bytes()).unwrap();
    enc.finish().unwrap();

    let config = Config::new(&input, Language::English, selection(&[Category::Articles]))
        .with_output(&output)
        .with_data_dir(dir.path());
    let report = Killer::new(config).run().unwrap();
    assert_eq!(report.removed(), 2);

    let mut out = String::new();
    GzDecoder::new(File::open(&output).unwrap())
        .read_to_string(&mut out)
        .unwrap();
    assert!(out.starts_with("The 0.0 0.0\ncat 0.3 0.4\n"));
    assert_eq!(out.lines().count(), 8);
}
