//! Two-pass length measurement.
//!
//! [`measure`] walks a freshly emitted [`Node`] tree once, bottom-up,
//! filling in `len`, `wrap_len` and `full_wrap` for every node and
//! wrapper item. Nothing here decides whether a node actually wraps —
//! that's [`crate::wrap::decide`]'s job, working off these numbers.

use crate::doc::{Node, Part, Triple, WrapMode};

#[cfg(test)]
#[path = "measure_tests.rs"]
mod measure_tests;

/// Measure `n` and everything nested inside it, given the indent width
/// `tab` (used only by block-mode wrapper contributions).
pub(crate) fn measure(tab: usize, n: &mut Node) {
    if let Some(s) = n.as_str_part_mut() {
        n.len = s.quoted.len();
        match &s.raw {
            None => {
                n.wrap_len = Triple::uniform(n.len);
                n.full_wrap = Triple::uniform(n.len);
            }
            Some(raw) => {
                let rl = measure_raw_lines(raw);
                s.raw_len = rl;
                n.wrap_len = rl;
                n.full_wrap = rl;
            }
        }
        return;
    }

    for part in &mut n.parts {
        match part {
            Part::Node(child) => measure(tab, child),
            Part::Wrapper(w) => {
                for item in &mut w.items {
                    measure(tab, item);
                }
            }
            Part::Literal(_) | Part::Str(_) => {}
        }
    }

    for part in &n.parts {
        match part {
            Part::Literal(s) => n.len += s.len(),
            Part::Str(s) => n.len += s.quoted.len(),
            Part::Node(child) => n.len += child.len,
            Part::Wrapper(w) => {
                if w.items.is_empty() {
                    continue;
                }
                n.len += (w.items.len() - 1) * w.sep.len();
                for item in &w.items {
                    n.len += item.len;
                }
            }
        }
    }

    let mut w = 0usize;
    let mut f = 0usize;
    for part in &n.parts {
        match part {
            Part::Node(child) => {
                w += child.wrap_len.first;
                if child.len != child.wrap_len.first {
                    n.wrap_len.observe_first(w);
                    n.wrap_len.max = n.wrap_len.max.max(child.wrap_len.max);
                    w = child.wrap_len.last;
                }

                f += child.full_wrap.first;
                if child.len != child.full_wrap.first {
                    n.full_wrap.observe_first(f);
                    n.full_wrap.max = n.full_wrap.max.max(child.full_wrap.max);
                    f = child.full_wrap.last;
                }
            }
            Part::Wrapper(wr) => {
                if wr.items.is_empty() {
                    continue;
                }

                n.wrap_len.observe_first(w);
                n.full_wrap.observe_first(f);
                w = 0;
                f = 0;

                match wr.mode {
                    WrapMode::Line => {
                        w = (wr.items.len() - 1) * wr.sep.len();
                        for item in &wr.items {
                            w += item.len;
                        }
                        f = wr.items.iter().map(|item| item.full_wrap.max).max().unwrap_or(0);
                    }
                    WrapMode::Block => {
                        w = wr
                            .items
                            .iter()
                            .map(|item| tab + item.len + wr.suffix.len())
                            .max()
                            .unwrap_or(0);
                        f = wr
                            .items
                            .iter()
                            .map(|item| {
                                (tab + item.full_wrap.max).max(tab + item.full_wrap.last + wr.suffix.len())
                            })
                            .max()
                            .unwrap_or(0);
                    }
                }

                n.wrap_len.max = n.wrap_len.max.max(w);
                n.full_wrap.max = n.full_wrap.max.max(f);
                w = 0;
                f = 0;
            }
            Part::Literal(s) => {
                w += s.len();
                f += s.len();
            }
            Part::Str(s) => {
                w += s.quoted.len();
                f += s.quoted.len();
            }
        }
    }

    n.wrap_len.observe_first(w);
    n.wrap_len.last = w;
    n.full_wrap.observe_first(f);
    n.full_wrap.last = f;
}

/// First/max/last widths of a raw string's lines, split on `\n`.
fn measure_raw_lines(raw: &str) -> Triple {
    let mut t = Triple::default();
    let lines: Vec<&str> = raw.split('\n').collect();
    for (j, line) in lines.iter().enumerate() {
        if j == 0 {
            t.first = line.len();
        }
        if line.len() > t.max {
            t.max = line.len();
        }
        if j == lines.len() - 1 {
            t.last = line.len();
        }
    }
    t
}
