use derive_more::{AsRef, Display, From};

use crate::precedence::Level;

mod tree;

pub use tree::Tree;

/// Name of a grammar rule. Expressions refer to rules by name only; the
/// grammar resolves the name when it is used.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Display, From, AsRef)]
pub struct RuleName(String);

impl From<&str> for RuleName { fn from(s: &str) -> Self { RuleName(s.to_string()) } }
impl From<&RuleName> for RuleName { fn from(n: &RuleName) -> Self { n.clone() } }

impl RuleName {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl PartialEq<str> for RuleName {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for RuleName {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

/// A raw token that was consumed by a terminal match.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Terminal(pub(crate) String);

impl Terminal {
    pub fn new(token: impl Into<String>) -> Self { Terminal(token.into()) }

    pub fn token(&self) -> &str { &self.0 }

    pub fn into_token(self) -> String { self.0 }

    /// Terminals bind tighter than everything.
    pub fn precedence(&self) -> Level { 0 }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    Terminal(Terminal),
    Tree(Tree),
}

impl Node {
    pub fn precedence(&self) -> Level {
        match self {
            Node::Terminal(t) => t.precedence(),
            Node::Tree(t) => t.level(),
        }
    }

    pub fn name(&self) -> Option<&RuleName> {
        match self {
            Node::Terminal(_) => None,
            Node::Tree(t) => Some(t.name()),
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Node::Terminal(_) => None,
            Node::Tree(t) => Some(t),
        }
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Node::Terminal(t) => Some(t),
            Node::Tree(_) => None,
        }
    }
}

impl From<Terminal> for Node { fn from(t: Terminal) -> Node { Node::Terminal(t) } }
impl From<Tree> for Node { fn from(t: Tree) -> Node { Node::Tree(t) } }

/// Builds the node that a successful alternative reduces to.
pub type Constructor = fn(&RuleName, Level, Vec<Node>) -> Node;

/// The default constructor: a generic named tree over the matched children.
pub fn tree(name: &RuleName, level: Level, children: Vec<Node>) -> Node {
    Node::Tree(Tree::new(name.clone(), level, children))
}

/// Returns the middle child of a bracketed triple such as `"(" expr ")"`, so
/// that grouping leaves no trace in the tree. Anything else falls back to
/// [`tree`].
pub fn inner(name: &RuleName, level: Level, children: Vec<Node>) -> Node {
    match <[Node; 3]>::try_from(children) {
        Ok([_open, inner, _close]) => inner,
        Err(children) => tree(name, level, children),
    }
}
