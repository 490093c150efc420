//! Public entry points: the Cartesian product of destination (sink,
//! stderr, string) × wrap (off, on) × type annotation (none, moderate,
//! verbose) described by `Fprint{,w}{,t|v}`, `Print{,ln}{,w}{,t|v}` and
//! `Sprint{,w}{,t|v}`.
//!
//! Each function accepts a slice of values rather than a true variadic
//! list — the idiomatic Rust shape for "print these, however many there
//! are". Multiple values are joined by `" "` when not wrapping, `"\n"`
//! when wrapping.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Config;
use crate::emit::{emit, RenderOptions};
use crate::error::NotationError;
use crate::measure::measure;
use crate::pending::Pending;
use crate::print::{self, Writer};
use crate::value::Reflect;
use crate::wrap::decide;

/// The process-local destination used by the `print`/`println` family.
/// `None` means stderr; tests substitute a buffer here instead of
/// redirecting the real stream.
static DESTINATION: Mutex<Option<Box<dyn Write + Send>>> = Mutex::new(None);

#[cfg(test)]
pub(crate) fn set_default_destination(dest: Option<Box<dyn Write + Send>>) {
    *DESTINATION.lock().unwrap() = dest;
}

fn with_default_destination<R>(f: impl FnOnce(&mut dyn Write) -> R) -> R {
    let mut guard = DESTINATION.lock().unwrap();
    match guard.as_mut() {
        Some(dest) => f(dest.as_mut()),
        None => f(&mut io::stderr()),
    }
}

/// Render `values` into `sink`, honoring `opts` and the environment
/// configuration, optionally appending a trailing newline.
fn render_to(
    opts: RenderOptions,
    trailing_newline: bool,
    sink: &mut dyn Write,
    values: &[&dyn Reflect],
) -> (usize, Option<NotationError>) {
    let cfg = Config::from_env();
    let opts = if cfg.sort_maps { opts } else { opts | RenderOptions::RANDOM_MAPS };

    let mut w = Writer::new(sink);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            w.write(if opts.contains(RenderOptions::WRAP) { "\n" } else { " " });
        }

        let reflected = value.reflect();
        let mut pending = Pending::new();
        let mut node = emit(opts, &mut pending, &reflected);

        if opts.contains(RenderOptions::WRAP) {
            measure(cfg.tab, &mut node);
            let (t, c0, c1) = (cfg.tab as isize, cfg.c0 as isize, cfg.c1 as isize);
            decide(t, c0, c0, c1, &mut node);
        }

        print::print(&mut w, 0, &node);
    }

    if trailing_newline {
        w.write("\n");
    }

    w.finish()
}

fn render_string(opts: RenderOptions, values: &[&dyn Reflect]) -> String {
    let mut buf = Vec::new();
    render_to(opts, false, &mut buf, values);
    String::from_utf8(buf).expect("rendered output is valid utf-8")
}

/// Defines one `Fprint*` entry point writing to an explicit sink.
macro_rules! fprint_fn {
    ($(#[$doc:meta])* $name:ident, $opts:expr) => {
        $(#[$doc])*
        pub fn $name(
            sink: &mut dyn Write,
            values: &[&dyn Reflect],
        ) -> (usize, Option<NotationError>) {
            render_to($opts, false, sink, values)
        }
    };
}

/// Defines one `Print*`/`Println*` entry point writing to the process
/// default destination (stderr, unless a test substituted it).
macro_rules! print_fn {
    ($(#[$doc:meta])* $name:ident, $opts:expr, $ln:expr) => {
        $(#[$doc])*
        pub fn $name(values: &[&dyn Reflect]) -> (usize, Option<NotationError>) {
            with_default_destination(|dest| render_to($opts, $ln, dest, values))
        }
    };
}

/// Defines one `Sprint*` entry point returning an owned `String`. A
/// string sink can't fail to write, so there is no error to report.
macro_rules! sprint_fn {
    ($(#[$doc:meta])* $name:ident, $opts:expr) => {
        $(#[$doc])*
        pub fn $name(values: &[&dyn Reflect]) -> String {
            render_string($opts, values)
        }
    };
}

const NONE: RenderOptions = RenderOptions::empty();
const WRAP: RenderOptions = RenderOptions::WRAP;
const MODERATE: RenderOptions = RenderOptions::TYPES;
const WRAP_MODERATE: RenderOptions = RenderOptions::WRAP.union(RenderOptions::TYPES);
const VERBOSE: RenderOptions = RenderOptions::ALL_TYPES;
const WRAP_VERBOSE: RenderOptions = RenderOptions::WRAP.union(RenderOptions::ALL_TYPES);

fprint_fn!(
    /// Writes `values` to `sink`, no wrapping, no type annotations.
    fprint, NONE
);
fprint_fn!(
    /// Writes `values` to `sink`, wrapping lines that exceed the
    /// configured column budget.
    fprintw, WRAP
);
fprint_fn!(
    /// Writes `values` to `sink` with moderate type annotations (types
    /// elided where recoverable from context).
    fprintt, MODERATE
);
fprint_fn!(
    /// Wrapping plus moderate type annotations.
    fprintwt, WRAP_MODERATE
);
fprint_fn!(
    /// Writes `values` to `sink` with every value's type made explicit.
    fprintv, VERBOSE
);
fprint_fn!(
    /// Wrapping plus verbose type annotations.
    fprintwv, WRAP_VERBOSE
);

print_fn!(
    /// Writes `values` to the process default destination (stderr
    /// unless overridden), no wrapping, no type annotations.
    print, NONE, false
);
print_fn!(
    /// Wrapping, no type annotations.
    printw, WRAP, false
);
print_fn!(
    /// Moderate type annotations, no wrapping.
    printt, MODERATE, false
);
print_fn!(
    /// Wrapping plus moderate type annotations.
    printwt, WRAP_MODERATE, false
);
print_fn!(
    /// Verbose type annotations, no wrapping.
    printv, VERBOSE, false
);
print_fn!(
    /// Wrapping plus verbose type annotations.
    printwv, WRAP_VERBOSE, false
);
print_fn!(
    /// Like [`print`], with a trailing newline.
    println, NONE, true
);
print_fn!(
    /// Like [`printw`], with a trailing newline.
    printlnw, WRAP, true
);
print_fn!(
    /// Like [`printt`], with a trailing newline.
    printlnt, MODERATE, true
);
print_fn!(
    /// Like [`printwt`], with a trailing newline.
    printlnwt, WRAP_MODERATE, true
);
print_fn!(
    /// Like [`printv`], with a trailing newline.
    printlnv, VERBOSE, true
);
print_fn!(
    /// Like [`printwv`], with a trailing newline.
    printlnwv, WRAP_VERBOSE, true
);

sprint_fn!(
    /// Renders `values` to a `String`, no wrapping, no type annotations.
    sprint, NONE
);
sprint_fn!(
    /// Wrapping, no type annotations.
    sprintw, WRAP
);
sprint_fn!(
    /// Moderate type annotations, no wrapping.
    sprintt, MODERATE
);
sprint_fn!(
    /// Wrapping plus moderate type annotations.
    sprintwt, WRAP_MODERATE
);
sprint_fn!(
    /// Verbose type annotations, no wrapping.
    sprintv, VERBOSE
);
sprint_fn!(
    /// Wrapping plus verbose type annotations.
    sprintwv, WRAP_VERBOSE
);

#[cfg(test)]
#[path = "facade_tests.rs"]
mod facade_tests;
