use super::*;
use crate::doc::{node, Node, StrLit, Wrapper};

#[test]
fn literal_length_is_byte_length() {
    let mut n = Node::literal("hello");
    measure(8, &mut n);
    assert_eq!(n.len, 5);
}

#[test]
fn quoted_str_measures_its_quoted_form() {
    let mut n = Node::str(StrLit::new("\"hi\"".to_string(), None));
    measure(8, &mut n);
    assert_eq!(n.len, 4);
    assert_eq!(n.wrap_len, Triple::uniform(4));
}

#[test]
fn raw_str_measures_longest_line() {
    // `raw` carries its own backtick delimiters, so the first/last lines
    // include them: "`a" (2) and "bcd`" (4).
    let mut n = Node::str(StrLit::new("`a\\nbcd`".to_string(), Some("`a\nbcd`".to_string())));
    measure(8, &mut n);
    assert_eq!(n.len, 8);
    assert_eq!(n.wrap_len.first, 2);
    assert_eq!(n.wrap_len.max, 4);
    assert_eq!(n.wrap_len.last, 4);
}

#[test]
fn nested_node_length_sums_children() {
    let mut n = node!["{", Node::literal("x"), "}"];
    measure(8, &mut n);
    assert_eq!(n.len, 3);
}

#[test]
fn empty_wrapper_contributes_nothing() {
    let mut n = node!["{", Wrapper::block(", ", ",", vec![]), "}"];
    measure(8, &mut n);
    assert_eq!(n.len, 2);
}

#[test]
fn block_wrapper_len_accounts_for_tab_and_suffix() {
    let items = vec![Node::literal("ab"), Node::literal("cde")];
    let mut n = node![Wrapper::block(", ", ",", items)];
    measure(2, &mut n);
    // widest item "cde" (len 3) plus tab (2) plus suffix ",": 6.
    assert_eq!(n.wrap_len.max, 6);
}

#[test]
fn line_wrapper_len_is_flat_join_length() {
    let items = vec![Node::literal("a"), Node::literal("bb")];
    let mut n = node![Wrapper::line(", ", items)];
    measure(8, &mut n);
    // "a" + ", " + "bb" = 1 + 2 + 2 = 5
    assert_eq!(n.len, 5);
}
