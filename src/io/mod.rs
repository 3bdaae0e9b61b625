/*!
# IO utilities

Word list loading and word vector file handles.

Word vector files whose name ends with `.gz` are transparently (de)compressed.
!*/
mod vectors;
mod wordlist;

pub use vectors::{create_output, is_gzip, open_input, VectorWriter};
pub use wordlist::{parse_word_list, DataDir, WordListSource};
