use crate::cursor::{Cursor, Item};
use crate::node::{Node, Tree};

/// Compact rendering of parse results: single-child chains collapse into
/// their child, every other tree prints as its children in brackets, and
/// terminals print as the bare token. `1*2+1` under the arithmetic grammar
/// renders as `[[1 * 2] + 1]`.
pub trait Rendered {
    fn rendered(&self) -> String;
}

impl Rendered for Tree {
    fn rendered(&self) -> String {
        let tree = self.skip_chains();
        match tree.children() {
            [] => format!("{}()", tree.name()),
            [only] => only.rendered(),
            children => {
                let parts: Vec<String> = children.iter().map(|c| c.rendered()).collect();
                format!("[{}]", parts.join(" "))
            }
        }
    }
}

impl Rendered for Node {
    fn rendered(&self) -> String {
        match self {
            Node::Terminal(t) => t.token().to_string(),
            Node::Tree(t) => t.rendered(),
        }
    }
}

impl Rendered for Option<Tree> {
    fn rendered(&self) -> String {
        match self {
            Some(tree) => tree.rendered(),
            None => "nil".to_string(),
        }
    }
}

impl Rendered for Cursor {
    fn rendered(&self) -> String {
        let parts: Vec<String> = self.items()
            .map(|item| match item {
                Item::Token(s) => s.clone(),
                Item::Node(n) => n.rendered(),
            })
            .collect();
        parts.join(" ")
    }
}
