use super::node::Node;
use super::tree::{self, Tree};

/// A set of words implemented using an unbalanced binary search tree.
///
/// Removing a word shrinks the tree, which is how the line filter consumes the dictionary:
/// every word is expected to match at most one line of a word vector file.
///
/// # Examples
/// ```
/// use function_word_killer::dictionary::WordSet;
///
/// let mut set = WordSet::new();
/// assert!(set.insert("the"));
/// assert!(!set.insert("the"));
///
/// assert_eq!(set.len(), 1);
///
/// assert!(set.remove("the"));
/// assert!(!set.remove("the"));
/// ```
#[derive(Debug, Default)]
pub struct WordSet {
    root: Tree,
    len: usize,
}

impl WordSet {
    /// Constructs a new, empty `WordSet`.
    pub fn new() -> Self {
        WordSet { root: None, len: 0 }
    }

    /// Inserts a word into the set. Returns `false` if it was already present,
    /// in which case the tree is left untouched.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        let inserted = tree::insert(&mut self.root, word.into());
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a word from the set. Returns whether it was found (and removed).
    ///
    /// # Examples
    /// ```
    /// use function_word_killer::dictionary::WordSet;
    ///
    /// let mut set = WordSet::new();
    /// set.insert("m");
    /// set.insert("f");
    /// set.insert("t");
    ///
    /// assert!(set.remove("m"));
    /// assert_eq!(set.root(), Some("f"));
    /// ```
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = tree::remove(&mut self.root, word).is_some();
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a word exists in the set.
    pub fn contains(&self, word: &str) -> bool {
        tree::contains(&self.root, word)
    }

    /// Returns the key stored at the root of the tree.
    pub fn root(&self) -> Option<&str> {
        self.root.as_ref().map(|node| node.key.as_str())
    }

    /// Returns the number of words in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree. A height of `len()` means the tree degenerated into a list.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Removes every word from the set.
    pub fn clear(&mut self) {
        tree::destroy(&mut self.root);
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator will yield words in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl Drop for WordSet {
    fn drop(&mut self) {
        tree::destroy(&mut self.root);
    }
}

impl<S: Into<String>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the words of a [WordSet].
pub struct Iter<'a> {
    current: &'a Tree,
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = &node.left;
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node.key.as_str()
        })
    }
}
