//! The wrap decision: given the widths [`crate::measure::measure`]
//! computed, decide which nodes actually break across lines and where
//! line-mode wrappers end a line.
//!
//! Budgets are signed because the trackback below deliberately drives
//! the running budget negative to force an earlier wrapper to re-wrap.

use crate::doc::{Node, Part, WrapMode};

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod wrap_tests;

/// Decide wrapping for `n` and everything nested inside it.
///
/// `t` is the current indent width, `cf0` the fixed full-line width used
/// only for line-mode flow, and `c0`/`c1` the primary budget and its
/// tolerance (`c1 >= c0`).
pub(crate) fn decide(t: isize, cf0: isize, c0: isize, c1: isize, n: &mut Node) {
    let len = n.len as isize;

    // fits:
    if len <= c0 {
        return;
    }

    // we don't want to make it longer:
    if n.wrap_len.max as isize >= len && n.full_wrap.max as isize >= len {
        return;
    }

    // tolerate below c1 when it's not worth wrapping:
    if len <= c1 && len - c0 <= c0 - n.wrap_len.max as isize {
        return;
    }

    n.wrap = true;

    if let Some(s) = n.as_str_part_mut() {
        s.use_raw = s.raw.is_some();
        return;
    }

    // Take a copy of the available column width and modify only the
    // copy, so a trackback can rewind it.
    let mut cc0 = c0;
    let mut cc1 = c1;
    let mut last_wrapper_index: isize = -1;
    let mut track_back = false;

    let mut i: isize = 0;
    while (i as usize) < n.parts.len() {
        let idx = i as usize;
        match &mut n.parts[idx] {
            Part::Node(child) => {
                decide(t, cf0, cc0, cc1, child);
                if child.wrap {
                    // Approximation: sometimes child.full_wrap.last
                    // should be used here, but usually they agree.
                    cc0 -= child.wrap_len.first as isize;
                    cc1 -= child.wrap_len.first as isize;
                } else {
                    cc0 -= child.len as isize;
                    cc1 -= child.len as isize;
                }

                if cc1 >= 0 {
                    if child.wrap {
                        cc0 = c0 - child.wrap_len.last as isize;
                        cc1 = c1 - child.wrap_len.last as isize;
                    }
                } else if !track_back {
                    i = last_wrapper_index;
                    track_back = true;
                    cc0 = 0;
                    cc1 = 0;
                }
            }
            Part::Wrapper(wr) => {
                if !wr.items.is_empty() {
                    cc0 = c0;
                    cc1 = c1;
                    track_back = false;
                    last_wrapper_index = i;

                    match wr.mode {
                        WrapMode::Line => {
                            // Only the line endings are set here, using
                            // the full column width.
                            let cl = cf0 - t;
                            let mut w: isize = 0;
                            wr.line_ends.clear();
                            for (j, item) in wr.items.iter().enumerate() {
                                if w > 0 && w + wr.sep.len() as isize + item.len as isize > cl {
                                    wr.line_ends.push(j);
                                    w = 0;
                                }
                                if w > 0 {
                                    w += wr.sep.len() as isize;
                                }
                                w += item.len as isize;
                            }
                            wr.line_ends.push(wr.items.len());
                        }
                        WrapMode::Block => {
                            for item in &mut wr.items {
                                decide(t, cf0, c0 - t, c1 - t, item);
                            }
                        }
                    }
                }
            }
            Part::Literal(s) => {
                let l = s.len() as isize;
                cc0 -= l;
                cc1 -= l;
                if cc1 >= 0 {
                    // nothing to do
                } else if !track_back {
                    i = last_wrapper_index;
                    track_back = true;
                    cc0 = 0;
                    cc1 = 0;
                }
            }
            Part::Str(_) => {
                unreachable!("a Str part is always the sole part of its node")
            }
        }
        i += 1;
    }
}
