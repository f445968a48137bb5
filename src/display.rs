use crate::cursor::{Cursor, Item};
use crate::expr::{Expr, Term};
use crate::grammar::Grammar;
use crate::node::{Node, Terminal, Tree};
use crate::precedence::Precedence;

impl std::fmt::Display for Precedence {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Precedence::Below(c) => write!(w, "<{}", c),
            Precedence::AtMost(c) => write!(w, "<={}", c),
        }
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "<{}>", self.0)
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{}(", self.name())?;
        for (i, child) in self.children().iter().enumerate() {
            if i > 0 { write!(w, " ")?; }
            write!(w, "{}", child)?;
        }
        write!(w, ")")
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Node::Terminal(t) => write!(w, "{}", t),
            Node::Tree(t) => write!(w, "{}", t),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Item::Token(s) => write!(w, "{}", s),
            Item::Node(n) => write!(w, "{}", n),
        }
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let content: Vec<String> = self.items().map(|item| item.to_string()).collect();
        write!(w, "[[{}]]", content.join(" "))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Term::Literal(s) => write!(w, "'{}'", s),
            Term::Pattern(p) => write!(w, "/{}/", p.source()),
        }
    }
}

#[derive(Copy, Clone)]
enum ExprContext { Sequence, Choice, Constrained }

impl Expr {
    fn needs_parens(&self, context: ExprContext) -> bool {
        match (self, context) {
            (Expr::Term(_) | Expr::Rule(_), _) => false,

            (Expr::Sequence(..), ExprContext::Sequence) => false,
            (Expr::Sequence(..), ExprContext::Choice | ExprContext::Constrained) => true,

            (Expr::Choice(..), ExprContext::Choice) => false,
            (Expr::Choice(..), ExprContext::Sequence | ExprContext::Constrained) => true,

            (Expr::Constrained(..), ExprContext::Constrained) => true,
            (Expr::Constrained(..), _) => false,
        }
    }

    fn fmt_joined(w: &mut std::fmt::Formatter, elems: &[Expr], sep: &str, ctxt: ExprContext) -> std::fmt::Result {
        for (i, e) in elems.iter().enumerate() {
            if i > 0 { write!(w, "{}", sep)?; }
            if e.needs_parens(ctxt) {
                write!(w, "({})", e)?;
            } else {
                write!(w, "{}", e)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expr::Term(t) => write!(w, "{}", t),
            Expr::Rule(name) => write!(w, "{}", name),
            Expr::Constrained(inner, p) => {
                if inner.needs_parens(ExprContext::Constrained) {
                    write!(w, "({}){}", inner, p)
                } else {
                    write!(w, "{}{}", inner, p)
                }
            }
            Expr::Choice(alts) => Expr::fmt_joined(w, alts, " | ", ExprContext::Choice),
            Expr::Sequence(elems) => Expr::fmt_joined(w, elems, " + ", ExprContext::Sequence),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{}:", self.name())?;
        for (name, alts) in self.rules() {
            for alt in alts {
                write!(w, "\n\t{}[{}] --> {}", name, alt.level(), alt.expr())?;
            }
        }
        Ok(())
    }
}
