//! The sorted clue index
//!
//! A binary search tree keyed by clue text. Inserting a clue that is already
//! present is a no-op, so the index behaves as a sorted set and the in-order
//! walk yields each clue once, in ascending lexicographic order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn leaf(clue: &str) -> Box<Self> {
        Box::new(Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Alphabetical index of every clue collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue. Duplicate text is silently ignored.
    pub fn insert(&mut self, clue: &str) {
        Self::insert_node(&mut self.root, clue);
    }

    fn insert_node(node: &mut Option<Box<ClueNode>>, clue: &str) {
        match node {
            None => *node = Some(ClueNode::leaf(clue)),
            Some(n) => match clue.cmp(n.clue.as_str()) {
                Ordering::Less => Self::insert_node(&mut n.left, clue),
                Ordering::Greater => Self::insert_node(&mut n.right, clue),
                Ordering::Equal => {}
            },
        }
    }

    /// All clues in ascending lexicographic order. Pure; can be called any
    /// number of times.
    pub fn in_order(&self) -> Vec<String> {
        let mut out = Vec::new();
        Self::walk(&self.root, &mut out);
        out
    }

    fn walk(node: &Option<Box<ClueNode>>, out: &mut Vec<String>) {
        if let Some(n) = node {
            Self::walk(&n.left, out);
            out.push(n.clue.clone());
            Self::walk(&n.right, out);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
