//! The document model: [`Node`], [`Part`], [`Wrapper`] and [`StrLit`].
//!
//! A `Node` is a container of parts plus the measurement fields that
//! [`crate::measure`] fills in and the wrap decision [`crate::wrap`]
//! makes. Nothing in this module measures or decides anything — it is
//! pure data.

#[cfg(test)]
#[path = "doc_tests.rs"]
mod doc_tests;

/// Three widths describing a contiguous single-line rendering regime:
/// the leading segment, the widest segment seen, and the trailing
/// segment. When a node never breaks, all three are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Triple {
    pub first: usize,
    pub max: usize,
    pub last: usize,
}

impl Triple {
    pub fn uniform(n: usize) -> Self {
        Triple {
            first: n,
            max: n,
            last: n,
        }
    }

    /// "Initialize if zero" accumulation: the first non-zero width
    /// observed in a segment becomes `first`; `max` always widens.
    pub fn observe_first(&mut self, w: usize) {
        if self.first == 0 {
            self.first = w;
        }
        if w > self.max {
            self.max = w;
        }
    }
}

/// Block items sit one per line; line items flow, wrapping only where
/// the fixed-width flow calculation demands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WrapMode {
    Block,
    Line,
}

/// An ordered, breakable sequence of child nodes.
///
/// A wrapper with zero items renders and measures as nothing.
#[derive(Debug, Clone)]
pub(crate) struct Wrapper {
    pub mode: WrapMode,
    pub sep: &'static str,
    pub suffix: &'static str,
    pub items: Vec<Node>,
    /// Exclusive-upper-bound item indices at which a line ends, set by
    /// [`crate::wrap::decide`] for line-mode wrappers inside a wrapping
    /// node. Empty until then.
    pub line_ends: Vec<usize>,
}

impl Wrapper {
    pub fn block(sep: &'static str, suffix: &'static str, items: Vec<Node>) -> Self {
        Wrapper {
            mode: WrapMode::Block,
            sep,
            suffix,
            items,
            line_ends: Vec::new(),
        }
    }

    pub fn line(sep: &'static str, items: Vec<Node>) -> Self {
        Wrapper {
            mode: WrapMode::Line,
            sep,
            suffix: "",
            items,
            line_ends: Vec::new(),
        }
    }
}

/// A specialized string leaf carrying both an escaped quoted form and an
/// optional raw (backtick-delimited) alternative.
///
/// Invariant: a `Str` part is always the sole part of its parent node
/// (the parent may still wrap that node in type decoration via an
/// *enclosing* node).
#[derive(Debug, Clone)]
pub(crate) struct StrLit {
    pub quoted: String,
    pub raw: Option<String>,
    pub use_raw: bool,
    pub raw_len: Triple,
}

impl StrLit {
    pub fn new(quoted: String, raw: Option<String>) -> Self {
        StrLit {
            quoted,
            raw,
            use_raw: false,
            raw_len: Triple::default(),
        }
    }
}

/// One piece of a [`Node`]'s content.
#[derive(Debug, Clone)]
pub(crate) enum Part {
    Literal(String),
    Str(StrLit),
    Node(Node),
    Wrapper(Wrapper),
}

impl From<&str> for Part {
    fn from(s: &str) -> Self {
        Part::Literal(s.to_string())
    }
}

impl From<String> for Part {
    fn from(s: String) -> Self {
        Part::Literal(s)
    }
}

impl From<usize> for Part {
    fn from(n: usize) -> Self {
        Part::Literal(n.to_string())
    }
}

impl From<Node> for Part {
    fn from(n: Node) -> Self {
        Part::Node(n)
    }
}

impl From<Wrapper> for Part {
    fn from(w: Wrapper) -> Self {
        Part::Wrapper(w)
    }
}

impl From<StrLit> for Part {
    fn from(s: StrLit) -> Self {
        Part::Str(s)
    }
}

/// A container of parts plus the measurements [`crate::measure::measure`]
/// computes and the wrap flag [`crate::wrap::decide`] sets.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub parts: Vec<Part>,
    pub wrap: bool,
    pub len: usize,
    pub wrap_len: Triple,
    pub full_wrap: Triple,
}

impl Node {
    /// Build a node from a heterogeneous part list, mirroring the
    /// original `nodeOf(parts...)` constructor.
    pub fn of(parts: Vec<Part>) -> Self {
        Node {
            parts,
            ..Default::default()
        }
    }

    pub fn literal(s: impl Into<String>) -> Self {
        Node::of(vec![Part::Literal(s.into())])
    }

    pub fn str(s: StrLit) -> Self {
        Node::of(vec![Part::Str(s)])
    }

    /// `true` for a node whose sole part is a `Str` — the shortcut case
    /// the measurer and printer both special-case.
    pub fn as_str_part(&self) -> Option<&StrLit> {
        match self.parts.as_slice() {
            [Part::Str(s)] => Some(s),
            _ => None,
        }
    }

    pub fn as_str_part_mut(&mut self) -> Option<&mut StrLit> {
        match self.parts.as_mut_slice() {
            [Part::Str(s)] => Some(s),
            _ => None,
        }
    }
}

/// Builds a [`Node`] from a mixed list of literals, nodes and wrappers,
/// mirroring the ergonomics of the original `nodeOf(parts...)`.
macro_rules! node {
    ($($part:expr),* $(,)?) => {
        $crate::doc::Node::of(vec![$($crate::doc::Part::from($part)),*])
    };
}

pub(crate) use node;
