//! The arithmetic grammar used by the `angulus` binary and by the tests:
//!
//! ```text
//! item[0]     = /\d+/
//! add[20]     = expr<=20 "+" expr<20
//! sub[20]     = expr<=20 "-" expr<20
//! mul[10]     = expr<=10 "*" expr<10
//! div[10]     = expr<=10 "/" expr<10
//! subexpr[0]  = "(" expr<=100 ")"          (reduces to the inner expr)
//! expr[0]     = subexpr | item | add | sub | mul | div
//! block[0]    = expr "$"
//! ```
//!
//! All four operators group to the left: the right operand has to bind
//! strictly tighter than the operator itself.

use crate::error::GrammarError;
use crate::expr::{lit, pattern, rule};
use crate::grammar::Grammar;
use crate::node;
use crate::precedence::Level;

pub const ADD: Level = 20;
pub const MUL: Level = 10;

pub fn grammar() -> Result<Grammar, GrammarError> {
    let mut g = Grammar::new("arith");
    let expr = || rule("expr");

    g.define("item", 0, pattern(r"\d+")?);

    g.define("add", ADD, expr().at_most(ADD) + "+" + expr().below(ADD));
    g.define("sub", ADD, expr().at_most(ADD) + "-" + expr().below(ADD));
    g.define("mul", MUL, expr().at_most(MUL) + "*" + expr().below(MUL));
    g.define("div", MUL, expr().at_most(MUL) + "/" + expr().below(MUL));

    g.define_with("subexpr", 0, node::inner, lit("(") + expr().at_most(100) + ")");

    g.define("expr", 0, rule("subexpr") | rule("item") | rule("add") | rule("sub") | rule("mul") | rule("div"));

    g.define("block", 0, expr() + "$");
    Ok(g)
}

/// Splits `input` into one token per non-whitespace character, which is all
/// the arithmetic grammar needs for single-digit operands.
pub fn chars(input: &str) -> Vec<String> {
    input.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_string()).collect()
}

#[cfg(test)]
#[path = "tests/arith.rs"]
mod tests_for_arith;
