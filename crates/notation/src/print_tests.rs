use super::*;
use crate::doc::{node, StrLit};

#[test]
fn sticky_error_stops_counting() {
    struct FailAfter(i64);
    impl io::Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0 -= buf.len() as i64;
            if self.0 >= 0 {
                Ok(buf.len())
            } else {
                let ok = (buf.len() as i64 + self.0) as usize;
                Err(io::Error::new(io::ErrorKind::Other, "test"))
                    .map_err(|e| {
                        let _ = ok;
                        e
                    })
            }
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut sink = FailAfter(3);
    let n = node!["hello"];
    let mut w = Writer::new(&mut sink);
    print(&mut w, 0, &n);
    let (written, err) = w.finish();
    assert!(written <= 3);
    assert!(err.is_some());
}

#[test]
fn literal_parts_write_verbatim() {
    let n = node!["a", "b", "c"];
    assert_eq!(render_for_test(&n), "abc");
}

#[test]
fn str_part_uses_quoted_form_by_default() {
    let n = Node::str(StrLit::new("\"hi\"".to_string(), None));
    assert_eq!(render_for_test(&n), "\"hi\"");
}

#[test]
fn str_part_uses_backticked_raw_when_flagged() {
    let mut s = StrLit::new("\"a\\nb\"".to_string(), Some("`a\nb`".to_string()));
    s.use_raw = true;
    let n = Node::str(s);
    assert_eq!(render_for_test(&n), "`a\nb`");
}

#[test]
fn unwrapped_wrapper_joins_with_separator() {
    use crate::doc::Wrapper;
    let n = node!["{", Wrapper::block(", ", ",", vec![Node::literal("a"), Node::literal("b")]), "}"];
    assert_eq!(render_for_test(&n), "{a, b}");
}
