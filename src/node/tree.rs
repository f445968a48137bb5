use crate::node::{Node, RuleName};
use crate::precedence::Level;

/// A reduced rule application. `level` is the level of the alternative that
/// matched; `children` follow the matched expression left to right.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tree {
    name: RuleName,
    level: Level,
    children: Vec<Node>,
}

impl Tree {
    pub fn new(name: RuleName, level: Level, children: Vec<Node>) -> Self {
        Tree { name, level, children }
    }

    pub fn name(&self) -> &RuleName { &self.name }

    pub fn level(&self) -> Level { self.level }

    pub fn children(&self) -> &[Node] { &self.children }

    pub fn child(&self, i: usize) -> Option<&Node> { self.children.get(i) }

    pub fn child_tree(&self, i: usize) -> Option<&Tree> {
        self.child(i).and_then(Node::as_tree)
    }

    pub fn into_children(self) -> Vec<Node> { self.children }

    /// The consumed tokens under this tree, in input order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut accum: Vec<&str> = Vec::new();
        for n in &self.children {
            match n {
                Node::Terminal(t) => accum.push(t.token()),
                Node::Tree(t) => accum.extend(t.leaves()),
            }
        }
        accum
    }

    /// Follows single-child chains (`expr -> item -> ...`) down to the first
    /// tree that actually branches, or to the bottom-most tree.
    pub fn skip_chains(&self) -> &Tree {
        let mut cur = self;
        while let [Node::Tree(only)] = &cur.children[..] {
            cur = only;
        }
        cur
    }
}
