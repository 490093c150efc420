use super::*;
use std::sync::Arc;

/// Serializes every test in this file that touches the shared process
/// destination, so one test's override can't leak into another's
/// assertion.
static DEST_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn sprint_joins_multiple_values_with_spaces() {
    let a = 1i32;
    let b = "hi".to_string();
    assert_eq!(sprint(&[&a, &b]), "1 \"hi\"");
}

#[test]
fn sprintw_joins_multiple_values_with_newlines() {
    let a = 1i32;
    let b = 2i32;
    assert_eq!(sprintw(&[&a, &b]), "1\n2");
}

#[test]
fn sprintt_elides_the_default_bool_type() {
    let v = true;
    assert_eq!(sprintt(&[&v]), "true");
}

#[test]
fn sprintv_always_shows_the_type() {
    let v = 42i32;
    assert_eq!(sprintv(&[&v]), "i32(42)");
}

#[test]
fn sprint_sorts_map_keys_by_default() {
    let mut m = std::collections::HashMap::new();
    m.insert("b".to_string(), 1i32);
    m.insert("a".to_string(), 2i32);
    assert_eq!(sprint(&[&m]), "map{\"a\": 2, \"b\": 1}");
}

#[test]
fn fprint_reports_the_exact_byte_count_for_a_fully_accepted_write() {
    let mut buf = Vec::new();
    let (n, err) = fprint(&mut buf, &[&1i32]);
    assert!(err.is_none());
    assert_eq!(n, buf.len());
    assert_eq!(buf, b"1");
}

#[test]
fn fprintw_uses_the_configured_column_budget_to_decide_wrapping() {
    let mut narrow = Vec::new();
    let short_text = "x".to_string();
    let (_, err) = fprintw(&mut narrow, &[&short_text]);
    assert!(err.is_none());
    assert_eq!(String::from_utf8(narrow).unwrap(), "\"x\"");
}

#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A one-field struct whose field is spelled exactly as the literal
/// seed scenarios name it, bypassing `#[derive(Reflect)]`'s
/// Rust-identifier naming so the expected strings can be copied
/// verbatim from the spec.
struct FooBarBaz {
    value: i32,
}

impl Reflect for FooBarBaz {
    fn reflect(&self) -> crate::value::Value<'_> {
        crate::value::Value::new(
            crate::value::Kind::Struct(vec![crate::value::FieldRef::new(
                "fooBarBaz",
                self.value.reflect(),
            )]),
            crate::typefmt::Type::Named("FooBarBaz"),
        )
    }
}

fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    static ENV_LOCK: Mutex<()> = Mutex::new(());
    let _guard = ENV_LOCK.lock().unwrap();
    let prev: Vec<_> = vars.iter().map(|(k, _)| (*k, std::env::var(k).ok())).collect();
    for (k, v) in vars {
        std::env::set_var(k, v);
    }
    let result = f();
    for (k, v) in prev {
        match v {
            Some(v) => std::env::set_var(k, v),
            None => std::env::remove_var(k),
        }
    }
    result
}

#[test]
fn wrapped_struct_matches_the_spec_seed_scenario() {
    with_env(&[("TABWIDTH", "0"), ("LINEWIDTH", "0"), ("LINEWIDTH1", "0")], || {
        let v = FooBarBaz { value: 42 };
        assert_eq!(sprintw(&[&v]), "{\n\tfooBarBaz: 42,\n}");
    });
}

#[test]
fn byte_slice_wraps_into_six_per_line_under_a_narrow_budget() {
    with_env(&[("LINEWIDTH", "20"), ("TABWIDTH", "2"), ("LINEWIDTH1", "0")], || {
        let items: Vec<u8> = (0u8..12).collect();
        assert_eq!(
            sprintw(&[&items]),
            "[]{\n\t00 01 02 03 04 05\n\t06 07 08 09 0a 0b\n}"
        );
    });
}

#[test]
fn println_writes_to_the_overridden_default_destination_with_a_trailing_newline() {
    let _guard = DEST_LOCK.lock().unwrap();
    let shared = SharedSink::default();
    set_default_destination(Some(Box::new(shared.clone())));
    println(&[&1i32]);
    set_default_destination(None);
    assert_eq!(shared.0.lock().unwrap().as_slice(), b"1\n");
}

#[test]
fn print_without_ln_has_no_trailing_newline() {
    let _guard = DEST_LOCK.lock().unwrap();
    let shared = SharedSink::default();
    set_default_destination(Some(Box::new(shared.clone())));
    print(&[&1i32]);
    set_default_destination(None);
    assert_eq!(shared.0.lock().unwrap().as_slice(), b"1");
}
