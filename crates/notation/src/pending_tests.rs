use super::*;

#[test]
fn first_sighting_then_cycle() {
    let mut p = Pending::new();
    let t = TypeId::of::<Vec<u8>>();
    match p.enter(t, 0x1000) {
        Enter::First { id } => assert_eq!(id, 0),
        Enter::Cycle { .. } => panic!("expected first sighting"),
    }

    match p.enter(t, 0x1000) {
        Enter::Cycle { id } => assert_eq!(id, 0),
        Enter::First { .. } => panic!("expected cycle"),
    }

    assert!(p.leave(t, 0x1000));
}

#[test]
fn leave_without_reference_needs_no_label() {
    let mut p = Pending::new();
    let t = TypeId::of::<Vec<u8>>();
    p.enter(t, 0x2000);
    assert!(!p.leave(t, 0x2000));
}

#[test]
fn different_types_same_address_do_not_collide() {
    let mut p = Pending::new();
    let t1 = TypeId::of::<Vec<u8>>();
    let t2 = TypeId::of::<String>();
    p.enter(t1, 0x3000);
    match p.enter(t2, 0x3000) {
        Enter::First { .. } => {}
        Enter::Cycle { .. } => panic!("distinct types must not share an identity"),
    }
}

#[test]
fn ids_increase_monotonically_across_unrelated_entries() {
    let mut p = Pending::new();
    let t = TypeId::of::<Vec<u8>>();
    let Enter::First { id: a } = p.enter(t, 1) else { panic!() };
    let Enter::First { id: b } = p.enter(t, 2) else { panic!() };
    assert!(b > a);
}
