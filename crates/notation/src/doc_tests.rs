use super::*;

#[test]
fn triple_uniform_sets_all_three() {
    let t = Triple::uniform(5);
    assert_eq!(t, Triple { first: 5, max: 5, last: 5 });
}

#[test]
fn observe_first_only_sets_first_once() {
    let mut t = Triple::default();
    t.observe_first(3);
    t.observe_first(7);
    assert_eq!(t.first, 3);
    assert_eq!(t.max, 7);
}

#[test]
fn observe_first_widens_max_even_after_first_is_set() {
    let mut t = Triple { first: 4, max: 4, last: 0 };
    t.observe_first(2);
    assert_eq!(t.first, 4);
    assert_eq!(t.max, 4);
}

#[test]
fn literal_node_has_one_part() {
    let n = Node::literal("x");
    assert_eq!(n.parts.len(), 1);
    assert!(n.as_str_part().is_none());
}

#[test]
fn str_node_round_trips_as_str_part() {
    let s = StrLit::new("\"x\"".to_string(), None);
    let n = Node::str(s);
    assert!(n.as_str_part().is_some());
}

#[test]
fn node_macro_builds_mixed_parts() {
    let items = vec![Node::literal("a"), Node::literal("b")];
    let n = node!["(", Wrapper::line(", ", items), ")"];
    assert_eq!(n.parts.len(), 3);
}

#[test]
fn wrapper_block_has_no_line_ends_until_decided() {
    let w = Wrapper::block(", ", ",", vec![Node::literal("a")]);
    assert_eq!(w.mode, WrapMode::Block);
    assert!(w.line_ends.is_empty());
}

#[test]
fn wrapper_line_has_empty_suffix() {
    let w = Wrapper::line(", ", vec![]);
    assert_eq!(w.mode, WrapMode::Line);
    assert_eq!(w.suffix, "");
}
