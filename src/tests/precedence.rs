use crate::precedence::*;

#[test]
fn at_most_is_inclusive() {
    let p = Precedence::AtMost(10);
    assert!(p.accepts(0));
    assert!(p.accepts(10));
    assert!(!p.accepts(11));
}

#[test]
fn below_is_strict() {
    let p = Precedence::Below(10);
    assert!(p.accepts(9));
    assert!(!p.accepts(10));
    for c in [0, 1, 20, 100] {
        assert!(!Precedence::Below(c).accepts(c));
    }
}

#[test]
fn looser_bound_accepts_more() {
    let levels: Vec<Level> = (0..=30).collect();
    let accepted = |p: Precedence| levels.iter().filter(|l| p.accepts(**l)).count();
    assert!(accepted(Precedence::AtMost(10)) < accepted(Precedence::AtMost(20)));
    assert!(accepted(Precedence::Below(10)) < accepted(Precedence::AtMost(10)));
}

#[test]
fn default_is_at_most_100() {
    assert_eq!(Precedence::default(), Precedence::AtMost(100));
    assert_eq!(DEFAULT_PRECEDENCE.bound(), 100);
    assert_eq!(Precedence::Below(20).to_string(), "<20");
    assert_eq!(Precedence::AtMost(20).to_string(), "<=20");
}
