/*! Removable word dictionary.

Words that shall be removed from a word vector file are stored in an unbalanced binary search tree.
Keys are compared with plain lexicographic string ordering, so a word that is a prefix of another
one (`dein` and `deiner`) is stored on the left of it.

The tree is never rebalanced. Inserting sorted words degenerates it into a list,
which is why callers should shuffle word lists before inserting them (see [crate::pipeline::DictionaryBuilder]).
!*/
mod node;
mod set;
mod tree;

pub use set::{Iter, WordSet};
