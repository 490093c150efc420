use super::*;
use crate::doc::{node, Node, Part, Wrapper};
use crate::measure::measure;

#[test]
fn node_under_budget_never_wraps() {
    let mut n = Node::literal("hello");
    measure(8, &mut n);
    decide(8, 72, 72, 97, &mut n);
    assert!(!n.wrap);
}

#[test]
fn atomic_literal_is_left_alone_even_over_budget() {
    // A plain literal has nothing to gain from wrapping (wrap_len and
    // full_wrap never shrink it), so it is never forced to wrap.
    let mut n = Node::literal("abcdef");
    measure(8, &mut n);
    decide(8, 4, 4, 4, &mut n);
    assert!(!n.wrap);
}

#[test]
fn block_wrapper_forces_the_enclosing_node_to_wrap() {
    let items = vec![Node::literal("abcdef"), Node::literal("ghij")];
    let mut n = node!["{", Wrapper::block(", ", ",", items), "}"];
    measure(1, &mut n);
    decide(1, 5, 5, 7, &mut n);
    assert!(n.wrap);
}

#[test]
fn line_wrapper_partitions_items_at_the_fixed_column_width() {
    let items: Vec<Node> = ["00", "01", "02", "03"].into_iter().map(Node::literal).collect();
    let mut n = node![Wrapper::line(" ", items)];
    measure(0, &mut n);
    decide(0, 6, 4, 5, &mut n);
    assert!(n.wrap);
    let Part::Wrapper(w) = &n.parts[0] else { panic!("expected a wrapper part") };
    assert_eq!(w.line_ends, vec![2, 4]);
}

#[test]
fn line_wrapper_with_room_to_spare_is_a_single_partition() {
    let items: Vec<Node> = ["a", "b"].into_iter().map(Node::literal).collect();
    let mut n = node![Wrapper::line(" ", items)];
    measure(0, &mut n);
    decide(0, 80, 80, 100, &mut n);
    assert!(!n.wrap);
}
