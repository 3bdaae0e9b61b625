use std::path::Path;

use function_word_killer::categories::Category;
use function_word_killer::io::{DataDir, WordListSource};
use function_word_killer::lang::Language;

#[test]
fn shipped_lists_load() {
    for language in Language::ALL {
        let d = DataDir::new(Path::new("data"), language);
        for category in Category::ALL {
            let words = d.load(category).unwrap();
            assert!(!words.is_empty(), "{} {} is empty", language, category);
            assert!(words.iter().all(|w| !w.contains(' ')));
        }
    }
}
