//! Left-corner, bottom-up parsing with precedence constraints.
//!
//! A [`Grammar`] maps rule names to leveled alternatives built from [`Expr`]
//! combinators. Parsing never descends into a rule before its left corner has
//! been reduced, so directly left-recursive rules such as
//!
//! ```text
//! mul[10] = expr<=10 "*" expr<10
//! ```
//!
//! need no rewriting and no generated parse table. Precedence predicates on
//! rule references decide binding strength and associativity.

pub mod precedence;
pub mod node;
pub mod cursor;
pub mod expr;
pub mod grammar;
pub mod error;
pub mod rendering;
pub mod arith;

mod display;

pub use cursor::{Cursor, Item, END_MARKER};
pub use error::{GrammarError, NoParse};
pub use expr::{choice, lit, pattern, rule, seq, Expr, Pattern, Term};
pub use grammar::{Alternative, Grammar};
pub use node::{Constructor, Node, RuleName, Terminal, Tree};
pub use precedence::{Level, Precedence, DEFAULT_PRECEDENCE};
pub use rendering::Rendered;
