//! Grammar expression combinators.
//!
//! An expression never recurses into a rule that has not been reduced yet.
//! Matching is split in two:
//!
//! * the *left corner* takes the leftmost element off the cursor (a raw token
//!   for a terminal, an already reduced tree for a rule reference), and
//! * the *rest* completes the expression given that left element, running a
//!   fresh [`Expr::parse`] for every following element of a sequence.
//!
//! Any attempt that fails puts back everything it took, so the caller can try
//! the next branch from the same position.

use regex::Regex;

use crate::cursor::{Cursor, Item};
use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::node::{Node, RuleName, Terminal};
use crate::precedence::{Level, Precedence};

/// A token pattern, anchored at the start of the token.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(&format!("^(?:{})", source))
            .map_err(|e| GrammarError::Pattern { pattern: source.to_string(), source: e })?;
        Ok(Pattern { source: source.to_string(), regex })
    }

    pub fn source(&self) -> &str { &self.source }

    pub fn is_match(&self, token: &str) -> bool { self.regex.is_match(token) }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool { self.source == other.source }
}

impl Eq for Pattern {}

/// What a terminal accepts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Term {
    Literal(String),
    Pattern(Pattern),
}

impl Term {
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Term::Literal(s) => s == token,
            Term::Pattern(p) => p.is_match(token),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Term(Term),
    Rule(RuleName),
    /// Forces its own predicate on everything underneath it, whatever the
    /// caller passed in.
    Constrained(Box<Expr>, Precedence),
    /// Ordered choice; the grammar tries each branch on its own, in order.
    Choice(Vec<Expr>),
    Sequence(Vec<Expr>),
}

pub fn lit(token: impl Into<String>) -> Expr { Expr::Term(Term::Literal(token.into())) }

pub fn pattern(source: &str) -> Result<Expr, GrammarError> {
    Ok(Expr::Term(Term::Pattern(Pattern::new(source)?)))
}

pub fn rule(name: impl Into<RuleName>) -> Expr { Expr::Rule(name.into()) }

pub fn seq<I>(elems: I) -> Expr where I: IntoIterator, I::Item: Into<Expr> {
    Expr::Sequence(elems.into_iter().map(Into::into).collect())
}

pub fn choice<I>(alts: I) -> Expr where I: IntoIterator, I::Item: Into<Expr> {
    Expr::Choice(alts.into_iter().map(Into::into).collect())
}

impl From<&str> for Expr { fn from(s: &str) -> Expr { lit(s) } }
impl From<String> for Expr { fn from(s: String) -> Expr { lit(s) } }
impl From<Term> for Expr { fn from(t: Term) -> Expr { Expr::Term(t) } }
impl From<Pattern> for Expr { fn from(p: Pattern) -> Expr { Expr::Term(Term::Pattern(p)) } }
impl From<RuleName> for Expr { fn from(n: RuleName) -> Expr { Expr::Rule(n) } }

impl<T: Into<Expr>> std::ops::Add<T> for Expr {
    type Output = Expr;
    fn add(self, rhs: T) -> Expr {
        match self {
            Expr::Sequence(mut elems) => { elems.push(rhs.into()); Expr::Sequence(elems) }
            lhs => Expr::Sequence(vec![lhs, rhs.into()]),
        }
    }
}

impl<T: Into<Expr>> std::ops::BitOr<T> for Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Expr {
        match self {
            Expr::Choice(mut alts) => { alts.push(rhs.into()); Expr::Choice(alts) }
            lhs => Expr::Choice(vec![lhs, rhs.into()]),
        }
    }
}

/// One top-level branch of an alternative, along with the predicate of the
/// innermost constraint wrapped around it, if any.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Branch<'e> {
    pub(crate) expr: &'e Expr,
    constraint: Option<Precedence>,
}

impl<'e> Branch<'e> {
    pub(crate) fn precedence(&self, active: Precedence) -> Precedence {
        self.constraint.unwrap_or(active)
    }
}

impl Expr {
    /// `self < level`: whatever this resolves to must bind strictly tighter.
    pub fn below(self, level: Level) -> Expr { Expr::Constrained(Box::new(self), Precedence::Below(level)) }

    /// `self <= level`
    pub fn at_most(self, level: Level) -> Expr { Expr::Constrained(Box::new(self), Precedence::AtMost(level)) }

    /// Rule names that may appear as the leftmost element of this expression.
    /// Only the head of a sequence counts.
    pub fn corner_names(&self) -> Vec<&RuleName> {
        match self {
            Expr::Term(_) => vec![],
            Expr::Rule(name) => vec![name],
            Expr::Constrained(inner, _) => inner.corner_names(),
            Expr::Choice(alts) => {
                let mut names: Vec<&RuleName> = Vec::new();
                for name in alts.iter().flat_map(|a| a.corner_names()) {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
                names
            }
            Expr::Sequence(elems) => elems.first().map(|e| e.corner_names()).unwrap_or_default(),
        }
    }

    /// Flattens nested choices into the list of branches the bottom-up step
    /// tries one after another. Anything that is not a choice is its own
    /// single branch.
    pub(crate) fn branches(&self) -> Vec<Branch<'_>> {
        let mut out = Vec::new();
        self.collect_branches(None, &mut out);
        out
    }

    fn collect_branches<'e>(&'e self, constraint: Option<Precedence>, out: &mut Vec<Branch<'e>>) {
        match self {
            Expr::Choice(alts) => {
                for alt in alts {
                    alt.collect_branches(constraint, out);
                }
            }
            Expr::Constrained(inner, p) => inner.collect_branches(Some(*p), out),
            _ => out.push(Branch { expr: self, constraint }),
        }
    }

    pub fn match_left_corner(&self, g: &Grammar, cursor: &mut Cursor, p: Precedence) -> Option<Item> {
        match self {
            Expr::Term(term) => cursor.next_if(term).map(Item::Token),
            Expr::Rule(name) => cursor.next_tree_if(|t| t.name() == name).map(Item::from),
            Expr::Constrained(inner, q) => inner.match_left_corner(g, cursor, *q),
            Expr::Choice(_) => None,
            Expr::Sequence(elems) => elems.first()?.match_left_corner(g, cursor, p),
        }
    }

    /// Completes the expression given the item its left corner took. On
    /// failure `left` (and anything consumed after it) is back on the cursor.
    pub fn match_rest(&self, left: Item, g: &Grammar, cursor: &mut Cursor, p: Precedence) -> Option<Vec<Node>> {
        match (self, left) {
            (Expr::Term(_), Item::Token(tok)) => Some(vec![Node::Terminal(Terminal::new(tok))]),
            (Expr::Rule(_), Item::Node(node)) => Some(vec![node]),
            (Expr::Constrained(inner, q), left) => inner.match_rest(left, g, cursor, *q),
            (Expr::Sequence(elems), left) => {
                let (head, tail) = match elems.split_first() {
                    Some(split) => split,
                    None => { cursor.pushback(left); return None; }
                };
                let mut matched = head.match_rest(left, g, cursor, p)?;
                for elem in tail {
                    match elem.parse(g, cursor, p) {
                        Some(nodes) => matched.extend(nodes),
                        None => { cursor.unwind(matched); return None; }
                    }
                }
                Some(matched)
            }
            (_, left) => { cursor.pushback(left); None }
        }
    }

    /// Matches the whole expression from the current front, reducing rules
    /// on demand. Used for every element after the left corner.
    pub fn parse(&self, g: &Grammar, cursor: &mut Cursor, p: Precedence) -> Option<Vec<Node>> {
        match self {
            Expr::Term(term) => cursor.next_if(term).map(|tok| vec![Node::Terminal(Terminal::new(tok))]),
            Expr::Rule(name) => g.parse(name, cursor, p).map(|t| vec![Node::Tree(t)]),
            Expr::Constrained(inner, q) => inner.parse(g, cursor, *q),
            Expr::Choice(_) => {
                self.branches().into_iter().find_map(|b| b.expr.parse(g, cursor, b.precedence(p)))
            }
            Expr::Sequence(elems) => {
                let mut matched = Vec::new();
                for elem in elems {
                    match elem.parse(g, cursor, p) {
                        Some(nodes) => matched.extend(nodes),
                        None => { cursor.unwind(matched); return None; }
                    }
                }
                Some(matched)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/expr.rs"]
mod tests_for_expr;
