use expect_test::expect;

use crate::expr::{pattern, rule};
use crate::grammar::*;
use crate::node::{self, Node, RuleName, Tree};
use crate::precedence::{Precedence, DEFAULT_PRECEDENCE};
use crate::rendering::Rendered;
use crate::tests::{arith, bare, cursor, tokens};

fn name(s: &str) -> RuleName { s.into() }

fn corner_names(g: &Grammar, rule: &str) -> Vec<String> {
    let mut v: Vec<String> = g.corners(&name(rule)).unwrap().iter().map(|n| n.to_string()).collect();
    v.sort();
    v
}

/// `item`, `expr = item | add`, and an `add` whose right operand uses `right`.
fn sums(right: Precedence) -> Grammar {
    let mut g = Grammar::new("sums");
    g.define("item", 0, pattern(r"\d+").unwrap());
    g.define("expr", 0, rule("item") | rule("add"));
    let rhs = crate::expr::Expr::Constrained(Box::new(rule("expr")), right);
    g.define("add", 20, rule("expr").below(20) + "+" + rhs);
    g
}

#[test]
fn corner_index_is_transitive() {
    let g = arith();
    assert_eq!(corner_names(&g, "item"), vec!["item"]);
    assert_eq!(corner_names(&g, "subexpr"), vec!["subexpr"]);
    assert_eq!(corner_names(&g, "block"),
               vec!["add", "block", "div", "expr", "item", "mul", "sub", "subexpr"]);
    assert_eq!(corner_names(&g, "mul"),
               vec!["add", "div", "expr", "item", "mul", "sub", "subexpr"]);
    assert!(g.corners(&name("nope")).is_none());
}

#[test]
fn corner_index_ignores_declaration_order() {
    let mut g = Grammar::new("backwards");
    g.define("block", 0, rule("expr") + "$");
    g.define("expr", 0, rule("term") | rule("sum"));
    g.define("sum", 10, rule("expr").at_most(10) + "+" + rule("term"));
    g.define("term", 0, pattern(r"\d+").unwrap());

    assert_eq!(corner_names(&g, "block"), vec!["block", "expr", "sum", "term"]);
    assert_eq!(corner_names(&g, "sum"), vec!["expr", "sum", "term"]);
    assert_eq!(g.parse_tokens("block", tokens("1 + 2 + 3")).unwrap().rendered(), "[[[1 + 2] + 3] $]");
}

#[test]
fn pure_left_recursion_terminates() {
    let mut g = Grammar::new("product");
    g.define("item", 0, pattern(r"\d+").unwrap());
    g.define("expr", 0, rule("item"));
    g.define("expr", 10, rule("expr").at_most(10) + "*" + rule("item"));

    let mut c = cursor("1 * 2 * 3 * 4");
    let tree = g.parse(&name("expr"), &mut c, DEFAULT_PRECEDENCE).unwrap();
    assert_eq!(tree.level(), 10);
    assert_eq!(tree.rendered(), "[[[1 * 2] * 3] * 4]");
    expect![[r#"expr(expr(expr(expr(item(<1>)) <*> item(<2>)) <*> item(<3>)) <*> item(<4>))"#]]
        .assert_eq(&tree.to_string());
    assert_eq!(c.to_string(), "[[$]]");
}

#[test]
fn strict_right_operand_groups_left() {
    let g = sums(Precedence::Below(20));
    let tree = g.parse_tokens("expr", tokens("1 + 2 + 3")).unwrap();
    let add = tree.skip_chains();
    assert_eq!(add.name(), &name("add"));
    assert_eq!(add.child_tree(0).unwrap().skip_chains().leaves(), vec!["1", "+", "2"]);
    assert_eq!(tree.rendered(), "[[1 + 2] + 3]");
}

#[test]
fn inclusive_right_operand_groups_right() {
    let g = sums(Precedence::AtMost(20));
    let tree = g.parse_tokens("expr", tokens("1 + 2 + 3")).unwrap();
    assert_eq!(tree.rendered(), "[1 + [2 + 3]]");
}

#[test]
fn parse_up_is_idempotent_once_stuck() {
    let g = arith();
    let target = name("block");
    let mut c = cursor("1 +");
    while g.parse_up(&target, &mut c, DEFAULT_PRECEDENCE) {}
    let stuck = c.clone();
    assert!(!g.parse_up(&target, &mut c, DEFAULT_PRECEDENCE));
    assert!(!g.parse_up(&target, &mut c, DEFAULT_PRECEDENCE));
    assert_eq!(c, stuck);
}

#[test]
fn trailing_tokens_are_left_on_the_cursor() {
    let g = arith();
    let mut c = cursor("1 + 2 *");
    assert_eq!(g.parse_rule(&name("block"), &mut c), None);
    assert_eq!(c.rendered(), "[1 + 2] * $");

    let mut c = cursor("1 2");
    assert_eq!(g.parse_rule(&name("block"), &mut c), None);
    assert_eq!(c.rendered(), "1 2 $");
}

#[test]
fn completed_tree_must_satisfy_the_predicate() {
    let g = arith();
    let mut c = cursor("");
    c.pushback(bare("pow", 30));
    let before = c.clone();
    assert_eq!(g.parse(&name("pow"), &mut c, Precedence::AtMost(20)), None);
    assert_eq!(c, before);
    assert_eq!(g.parse(&name("pow"), &mut c, Precedence::AtMost(30)), Some(bare("pow", 30)));
}

#[test]
fn alternatives_above_the_predicate_never_fire() {
    let g = arith();
    let mut c = cursor("1 * 2");
    assert_eq!(g.parse(&name("expr"), &mut c, Precedence::Below(10)).unwrap().rendered(), "1");
    assert_eq!(c.to_string(), "[[* 2 $]]");
}

#[test]
fn unknown_rule_is_no_parse() {
    let g = arith();
    let mut c = cursor("1");
    assert_eq!(g.parse_rule(&name("nope"), &mut c), None);
    assert_eq!(c.to_string(), "[[1 $]]");
}

#[test]
fn first_matching_alternative_wins() {
    let mut g = Grammar::new("tie");
    g.define("x", 0, "a");
    g.define("x", 1, "a");
    let tree = g.parse_tokens("x", tokens("a")).unwrap();
    assert_eq!(tree.level(), 0);
}

#[test]
fn custom_constructors_shape_the_tree() {
    fn count(name: &RuleName, level: crate::Level, children: Vec<Node>) -> Node {
        let leaves = children.len().to_string();
        Node::Tree(Tree::new(name.clone(), level, vec![Node::Terminal(crate::Terminal::new(leaves))]))
    }
    let mut g = Grammar::new("count");
    g.define_with("pair", 0, count, crate::lit("a") + "b");
    g.define_with("group", 0, node::inner, crate::lit("[") + rule("pair") + "]");
    let tree = g.parse_tokens("pair", tokens("a b")).unwrap();
    assert_eq!(tree.to_string(), "pair(<2>)");

    let mut c = cursor("[ a b ]");
    assert_eq!(g.parse_rule(&name("group"), &mut c), None);
    assert_eq!(c.to_string(), "[[pair(<2>) $]]");
}

#[test]
fn grammar_display() {
    let g = arith();
    expect![[r#"
        arith:
        	item[0] --> /\d+/
        	add[20] --> expr<=20 + '+' + expr<20
        	sub[20] --> expr<=20 + '-' + expr<20
        	mul[10] --> expr<=10 + '*' + expr<10
        	div[10] --> expr<=10 + '/' + expr<10
        	subexpr[0] --> '(' + expr<=100 + ')'
        	expr[0] --> subexpr | item | add | sub | mul | div
        	block[0] --> expr + '$'"#]]
        .assert_eq(&g.to_string());
}
