use linear_map::LinearMap;
use linear_map::set::LinearSet;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::NoParse;
use crate::expr::Expr;
use crate::node::{self, Constructor, RuleName, Tree};
use crate::precedence::{Level, Precedence, DEFAULT_PRECEDENCE};

/// One leveled alternative of a rule.
#[derive(Clone)]
pub struct Alternative {
    pub(crate) level: Level,
    pub(crate) constructor: Constructor,
    pub(crate) expr: Expr,
}

impl std::fmt::Debug for Alternative {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "[{}] {}", self.level, self.expr)
    }
}

impl Alternative {
    pub fn level(&self) -> Level { self.level }
    pub fn expr(&self) -> &Expr { &self.expr }
}

// A grammar is a table from rule name to its alternatives, in declaration
// order, plus the corner index derived from it:
//
//   corners(A) = { A } ∪ { B | some expansion of A starts with B }
//
// Rules are only ever referred to by name, so they can be declared in any
// order and may refer to themselves.

#[derive(Clone, Debug)]
pub struct Grammar {
    name: String,
    rules: LinearMap<RuleName, Vec<Alternative>>,
    corners: LinearMap<RuleName, LinearSet<RuleName>>,
}

impl Grammar {
    pub fn new(name: impl Into<String>) -> Self {
        Grammar { name: name.into(), rules: LinearMap::new(), corners: LinearMap::new() }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn rules(&self) -> impl Iterator<Item=(&RuleName, &[Alternative])> {
        self.rules.iter().map(|(name, alts)| (name, &alts[..]))
    }

    pub fn alternatives(&self, name: &RuleName) -> Option<&[Alternative]> {
        self.rules.get(name).map(|alts| &alts[..])
    }

    /// Every rule that can start an expansion of `name`, `name` included.
    pub fn corners(&self, name: &RuleName) -> Option<&LinearSet<RuleName>> {
        self.corners.get(name)
    }

    /// Adds an alternative that reduces to a plain [`Tree`].
    pub fn define(&mut self, name: impl Into<RuleName>, level: Level, expr: impl Into<Expr>) -> &mut Self {
        self.define_with(name, level, node::tree, expr)
    }

    pub fn define_with(
        &mut self,
        name: impl Into<RuleName>,
        level: Level,
        constructor: Constructor,
        expr: impl Into<Expr>,
    ) -> &mut Self {
        let name = name.into();
        let alt = Alternative { level, constructor, expr: expr.into() };
        match self.rules.get_mut(&name) {
            Some(alts) => alts.push(alt),
            None => { self.rules.insert(name, vec![alt]); }
        }
        self.reindex();
        self
    }

    // Rebuilds the whole closure rather than patching it, so a rule that
    // names another rule declared later still picks up that rule's corners.
    fn reindex(&mut self) {
        let mut direct: LinearMap<&RuleName, Vec<&RuleName>> = LinearMap::new();
        for (name, alts) in self.rules.iter() {
            direct.insert(name, alts.iter().flat_map(|a| a.expr.corner_names()).collect());
        }

        let mut corners = LinearMap::new();
        for name in self.rules.keys() {
            let mut reached: LinearSet<RuleName> = LinearSet::new();
            let mut stack = vec![name];
            while let Some(n) = stack.pop() {
                if reached.contains(n) {
                    continue;
                }
                reached.insert(n.clone());
                if let Some(next) = direct.get(&n) {
                    stack.extend(next.iter().copied());
                }
            }
            corners.insert(name.clone(), reached);
        }
        debug!(grammar = %self.name, rules = self.rules.len(), "rebuilt corner index");
        self.corners = corners;
    }

    /// Parses `name` with the default predicate (`<= 100`).
    pub fn parse_rule(&self, name: &RuleName, cursor: &mut Cursor) -> Option<Tree> {
        self.parse(name, cursor, DEFAULT_PRECEDENCE)
    }

    /// Reduces the front of `cursor` until no rule in `name`'s corner set
    /// applies, then takes the front if it is a `name` tree whose level
    /// `precedence` accepts.
    ///
    /// Reductions are never rolled back: on failure they stay on the cursor.
    pub fn parse(&self, name: &RuleName, cursor: &mut Cursor, precedence: Precedence) -> Option<Tree> {
        trace!(rule = %name, %precedence, input = %cursor, "parse");
        while cursor.has_next() && self.parse_up(name, cursor, precedence) {}
        let tree = cursor.next_tree_if(|t| t.name() == name && precedence.accepts(t.level()));
        trace!(rule = %name, matched = tree.is_some(), rest = %cursor, "parse done");
        tree
    }

    /// One bottom-up step: finds the first alternative, among the rules that
    /// can start `target`, whose expression matches the front of the cursor,
    /// and replaces what it matched with the node it builds.
    ///
    /// Candidates are tried in declaration order, their alternatives in
    /// declaration order, and the first match wins.
    pub fn parse_up(&self, target: &RuleName, cursor: &mut Cursor, precedence: Precedence) -> bool {
        let corners = match self.corners.get(target) {
            Some(corners) => corners,
            None => return false,
        };
        let candidates = self.rules.iter().filter(|(name, _)| corners.contains(*name));
        for (name, alts) in candidates {
            for alt in alts.iter().filter(|alt| precedence.accepts(alt.level)) {
                for branch in alt.expr.branches() {
                    let p = branch.precedence(precedence);
                    let left = match branch.expr.match_left_corner(self, cursor, p) {
                        Some(left) => left,
                        None => continue,
                    };
                    if let Some(children) = branch.expr.match_rest(left, self, cursor, p) {
                        let node = (alt.constructor)(name, alt.level, children);
                        trace!(rule = %name, level = alt.level, %node, "reduce");
                        cursor.pushback(node);
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Parses a whole token sequence (plus the end marker) as `name`.
    pub fn parse_tokens<I>(&self, name: impl Into<RuleName>, tokens: I) -> Result<Tree, NoParse>
    where I: IntoIterator, I::Item: Into<String>
    {
        let name = name.into();
        let mut cursor = Cursor::new(tokens);
        match self.parse_rule(&name, &mut cursor) {
            Some(tree) => Ok(tree),
            None => Err(NoParse { rule: name, remainder: cursor }),
        }
    }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
