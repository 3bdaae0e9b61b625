use super::tree::Tree;

/// A node of the dictionary tree. Each node owns both of its subtrees.
#[derive(Debug)]
pub struct Node {
    pub key: String,
    pub left: Tree,
    pub right: Tree,
}

impl Node {
    pub fn new(key: String) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}
