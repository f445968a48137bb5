use std::collections::VecDeque;

use tracing::trace;

use crate::expr::Term;
use crate::node::{Node, Tree};

/// Appended once to every cursor so that rules such as `expr "$"` have a
/// concrete token to anchor on.
pub const END_MARKER: &str = "$";

/// A pending input item: either a token nobody has consumed yet, or a node
/// that an earlier reduction pushed back onto the front.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Item {
    Token(String),
    Node(Node),
}

impl From<Node> for Item { fn from(n: Node) -> Item { Item::Node(n) } }
impl From<Tree> for Item { fn from(t: Tree) -> Item { Item::Node(Node::Tree(t)) } }

impl From<String> for Item { fn from(s: String) -> Item { Item::Token(s) } }
impl From<&str> for Item { fn from(s: &str) -> Item { Item::Token(s.to_string()) } }

impl Item {
    /// Undoes a match: a terminal goes back as the raw token it was built
    /// from, everything else goes back as is.
    pub(crate) fn unmatched(node: Node) -> Item {
        match node {
            Node::Terminal(t) => Item::Token(t.into_token()),
            node => Item::Node(node),
        }
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            Item::Token(s) => Some(s),
            Item::Node(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Item::Token(_) => None,
            Item::Node(n) => n.as_tree(),
        }
    }
}

/// Double-ended view over the items still to be parsed. Only the front is
/// ever touched: items are taken from it, and failed attempts as well as new
/// reductions are pushed back onto it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Cursor {
    items: VecDeque<Item>,
}

impl Cursor {
    pub fn new<I>(tokens: I) -> Self
    where I: IntoIterator, I::Item: Into<String>
    {
        Self::with_end_marker(tokens, END_MARKER)
    }

    pub fn with_end_marker<I>(tokens: I, marker: impl Into<String>) -> Self
    where I: IntoIterator, I::Item: Into<String>
    {
        let mut items: VecDeque<Item> = tokens.into_iter().map(|t| Item::Token(t.into())).collect();
        items.push_back(Item::Token(marker.into()));
        Cursor { items }
    }

    pub fn has_next(&self) -> bool { !self.items.is_empty() }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn peek(&self) -> Option<&Item> { self.items.front() }

    pub fn items(&self) -> impl Iterator<Item=&Item> { self.items.iter() }

    /// Unconditionally takes the front item.
    pub fn next(&mut self) -> Option<Item> {
        self.items.pop_front()
    }

    /// Takes the front item iff it is a raw token accepted by `expected`.
    pub fn next_if(&mut self, expected: &Term) -> Option<String> {
        match self.items.pop_front() {
            Some(Item::Token(tok)) if expected.matches(&tok) => {
                trace!(token = %tok, %expected, "consume");
                Some(tok)
            }
            Some(other) => { self.items.push_front(other); None }
            None => None,
        }
    }

    /// Takes the front item iff it is a tree accepted by `accept`.
    pub fn next_tree_if(&mut self, accept: impl FnOnce(&Tree) -> bool) -> Option<Tree> {
        match self.items.pop_front() {
            Some(Item::Node(Node::Tree(tree))) if accept(&tree) => Some(tree),
            Some(other) => { self.items.push_front(other); None }
            None => None,
        }
    }

    pub fn pushback(&mut self, item: impl Into<Item>) {
        self.items.push_front(item.into());
    }

    /// Pushes back everything a failed attempt consumed, last item first, so
    /// the front ends up exactly as it was before the attempt.
    pub(crate) fn unwind(&mut self, matched: Vec<Node>) {
        for node in matched.into_iter().rev() {
            self.items.push_front(Item::unmatched(node));
        }
    }
}

#[cfg(test)]
#[path = "tests/cursor.rs"]
mod tests_for_cursor;
