//! The printer: walks a wrap-decided [`Node`] tree once and writes
//! bytes to a sink, keyed by each node's `wrap` flag and each
//! wrapper's mode.
//!
//! Errors from the sink are sticky: once one is observed, subsequent
//! writes are no-ops and the byte counter stops advancing. The facade
//! surfaces the accumulated count and the first error together.

use std::io;

use crate::doc::{Node, Part, WrapMode};
use crate::error::NotationError;

#[cfg(test)]
#[path = "print_tests.rs"]
mod print_tests;

/// Wraps a byte sink with a running count and a sticky first error.
pub(crate) struct Writer<'w> {
    sink: &'w mut dyn io::Write,
    written: usize,
    err: Option<io::Error>,
}

impl<'w> Writer<'w> {
    pub fn new(sink: &'w mut dyn io::Write) -> Self {
        Writer { sink, written: 0, err: None }
    }

    /// Write a literal separator between independently rendered nodes.
    /// Used by [`crate::facade`] to join multiple top-level values.
    pub(crate) fn write(&mut self, s: &str) {
        if self.err.is_some() || s.is_empty() {
            return;
        }

        let bytes = s.as_bytes();
        let mut off = 0;
        while off < bytes.len() {
            match self.sink.write(&bytes[off..]) {
                Ok(0) => {
                    self.err = Some(io::Error::new(io::ErrorKind::WriteZero, "sink accepted 0 bytes"));
                    return;
                }
                Ok(n) => {
                    off += n;
                    self.written += n;
                }
                Err(e) => {
                    self.err = Some(e);
                    return;
                }
            }
        }
    }

    fn line(&mut self, depth: usize) {
        self.write("\n");
        for _ in 0..depth {
            self.write("\t");
        }
    }

    /// Consume the writer, returning the total bytes written and the
    /// first sink error observed, if any.
    pub fn finish(self) -> (usize, Option<NotationError>) {
        let written = self.written;
        match self.err {
            Some(source) => (written, Some(NotationError::Write { written, source })),
            None => (written, None),
        }
    }
}

/// Render `n` into `w` at indent depth `t`.
pub(crate) fn print(w: &mut Writer, t: usize, n: &Node) {
    if w.err.is_some() {
        return;
    }

    for part in &n.parts {
        match part {
            Part::Node(child) => print(w, t, child),
            Part::Str(s) => {
                if s.use_raw {
                    w.write(s.raw.as_deref().unwrap_or(&s.quoted));
                } else {
                    w.write(&s.quoted);
                }
            }
            Part::Literal(s) => w.write(s),
            Part::Wrapper(wr) => {
                if wr.items.is_empty() {
                    continue;
                }

                if !n.wrap {
                    for (i, item) in wr.items.iter().enumerate() {
                        if i > 0 {
                            w.write(wr.sep);
                        }
                        print(w, t, item);
                    }
                    continue;
                }

                match wr.mode {
                    WrapMode::Line => {
                        let mut last = 0;
                        for &end in &wr.line_ends {
                            w.line(1);
                            for (i, item) in wr.items[last..end].iter().enumerate() {
                                if i > 0 {
                                    w.write(wr.sep);
                                }
                                print(w, 0, item);
                            }
                            last = end;
                        }
                    }
                    WrapMode::Block => {
                        let t2 = t + 1;
                        for item in &wr.items {
                            w.line(t2);
                            print(w, t2, item);
                            w.write(wr.suffix);
                        }
                    }
                }

                w.line(t);
            }
        }
    }
}

/// Renders `n` to a plain `String` at indent 0, honoring whatever
/// `wrap`/`line_ends` decisions are already on the tree (or none, for a
/// freshly emitted node that hasn't been measured and wrapped). Used by
/// [`crate::emit`] to turn a map key into its sort-key string.
pub(crate) fn render_flat(n: &Node) -> String {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut w = Writer::new(&mut buf);
        print(&mut w, 0, n);
    }
    String::from_utf8(buf).expect("rendered output is valid utf-8")
}

/// Test-only alias kept for readability at call sites that build nodes
/// directly without going through [`crate::measure`] or [`crate::wrap`].
#[cfg(test)]
pub(crate) fn render_for_test(n: &Node) -> String {
    render_flat(n)
}
