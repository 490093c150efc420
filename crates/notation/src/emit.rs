//! The value→document translator.
//!
//! [`emit`] walks a [`Value`] tree (produced by [`crate::value::Reflect`])
//! and produces an unmeasured [`Node`] tree: cycle detection through
//! [`crate::pending::Pending`], deterministic map key ordering, byte
//! hex-grouping, string escaping, and the three type-annotation levels
//! all live here.

use crate::doc::{node, Node, Part, Wrapper};
use crate::pending::{Enter, Pending};
use crate::print;
use crate::typefmt::{self, Type};
use crate::value::{Kind, TypeId, Value};

bitflags::bitflags! {
    /// The independently combinable render option flags. `POINTER_VALUES`
    /// is internal: it is never set by the façade, only by
    /// [`extended_key_string`] while computing a map's sort keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct RenderOptions: u8 {
        const WRAP            = 0b0000_0001;
        const TYPES           = 0b0000_0010;
        const SKIP_TYPES      = 0b0000_0100;
        const ALL_TYPES       = 0b0000_1000;
        const RANDOM_MAPS     = 0b0001_0000;
        const POINTER_VALUES  = 0b0010_0000;
    }
}

/// Translate a reflected value into a document node. `pending` tracks
/// cycles for the lifetime of one top-level render; callers pass a
/// fresh one per top-level value (per §5, cycle identity does not
/// cross values).
pub(crate) fn emit(opts: RenderOptions, pending: &mut Pending, v: &Value<'_>) -> Node {
    if v.nil {
        return if matches!(v.ty, Type::Option(_)) {
            emit_nil_interface(opts, v)
        } else {
            emit_nil_grouped(opts, v)
        };
    }

    match &v.kind {
        Kind::Bool(b) => paren(opts, v, Node::literal(if *b { "true" } else { "false" })),
        Kind::Int(n) => paren(opts, v, Node::literal(n.to_string())),
        Kind::Uint(n) => paren(opts, v, Node::literal(n.to_string())),
        Kind::Float(f) => paren(opts, v, Node::literal(format!("{f}"))),
        Kind::Str(s) => emit_string(opts, v, s),
        Kind::List(items) => emit_list(opts, pending, v, items),
        Kind::Map(pairs) => emit_map(opts, pending, v, pairs),
        Kind::Pointer(inner) => emit_pointer(opts, pending, v, inner.as_deref()),
        Kind::Interface(inner) => emit_interface(opts, pending, v, inner.as_deref()),
        Kind::Struct(fields) => emit_struct(opts, pending, v, fields),
        Kind::Chan => emit_hidden(opts, v, "chan"),
        Kind::Func => emit_hidden(opts, v, "func()"),
        Kind::UnsafePointer => emit_unsafe_pointer(opts, v),
    }
}

/// §4.2.2, the slice/map/pointer/chan/unsafe-pointer nil case: verbose
/// mode groups the type (parenthesizing an unnamed one) around `nil`;
/// every other mode is always bare `nil`, matching `reflectNil`.
fn emit_nil_grouped(opts: RenderOptions, v: &Value<'_>) -> Node {
    let content = Node::literal("nil");
    if opts.contains(RenderOptions::ALL_TYPES) {
        if matches!(v.ty, Type::Named(_)) {
            node![typefmt::format(&v.ty), "(", content, ")"]
        } else {
            node!["(", typefmt::format(&v.ty), ")(", content, ")"]
        }
    } else {
        content
    }
}

/// §4.2's Interface clause: nil is `TYPE(nil)` in verbose mode, plain
/// `nil` in every other mode (moderate does *not* decorate it, unlike
/// every other kind).
fn emit_nil_interface(opts: RenderOptions, v: &Value<'_>) -> Node {
    if opts.contains(RenderOptions::ALL_TYPES) {
        node![typefmt::format(&v.ty), "(nil)"]
    } else {
        Node::literal("nil")
    }
}

/// §4.2.1's three-case type decoration, shared by every kind that
/// wraps in `TYPENAME(value)` rather than a brace form.
fn paren(opts: RenderOptions, v: &Value<'_>, content: Node) -> Node {
    if opts.contains(RenderOptions::ALL_TYPES) {
        node![typefmt::format(&v.ty), "(", content, ")"]
    } else if opts.contains(RenderOptions::TYPES) {
        if v.default_type || opts.contains(RenderOptions::SKIP_TYPES) {
            content
        } else {
            node![typefmt::format(&v.ty), "(", content, ")"]
        }
    } else {
        content
    }
}

/// The brace-form counterpart of [`paren`] used by arrays, slices,
/// maps and structs: `untyped{ … }` or `TYPENAME{ … }`.
fn brace(opts: RenderOptions, ty: &Type, untyped: Node, content: Wrapper) -> Node {
    let prefix = if opts.contains(RenderOptions::ALL_TYPES) {
        typefmt::format(ty)
    } else if opts.contains(RenderOptions::TYPES) {
        if opts.contains(RenderOptions::SKIP_TYPES) {
            untyped
        } else {
            typefmt::format(ty)
        }
    } else {
        untyped
    };
    node![prefix, "{", content, "}"]
}

fn emit_string(opts: RenderOptions, v: &Value<'_>, s: &str) -> Node {
    paren(opts, v, Node::str(quote(s)))
}

/// Escapes `\ " \b \f \n \r \t \v`, leaving every other byte verbatim,
/// and sets the raw (backtick) alternative only when the source
/// contains a newline and no backtick of its own.
fn quote(s: &str) -> crate::doc::StrLit {
    let mut q = String::with_capacity(s.len() + 2);
    q.push('"');
    for c in s.chars() {
        match c {
            '\\' => q.push_str("\\\\"),
            '"' => q.push_str("\\\""),
            '\u{8}' => q.push_str("\\b"),
            '\u{c}' => q.push_str("\\f"),
            '\n' => q.push_str("\\n"),
            '\r' => q.push_str("\\r"),
            '\t' => q.push_str("\\t"),
            '\u{b}' => q.push_str("\\v"),
            other => q.push(other),
        }
    }
    q.push('"');
    let raw = (s.contains('\n') && !s.contains('`')).then(|| format!("`{s}`"));
    crate::doc::StrLit::new(q, raw)
}

fn elem_type(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Array(_, elem) | Type::Slice(elem) => Some(elem),
        _ => None,
    }
}

fn emit_list(opts: RenderOptions, pending: &mut Pending, v: &Value<'_>, items: &[Value<'_>]) -> Node {
    let is_array = matches!(v.ty, Type::Array(_, _));
    let is_byte_elem = matches!(elem_type(&v.ty), Some(Type::Named("byte")));

    let untyped = match &v.ty {
        Type::Array(n, _) => Node::literal(format!("[{n}]")),
        _ => Node::literal("[]"),
    };

    let build = |pending: &mut Pending| -> Node {
        let content = if is_byte_elem {
            let hex = items
                .iter()
                .map(|it| {
                    let byte = match &it.kind {
                        Kind::Uint(n) => *n as u8,
                        _ => 0,
                    };
                    Node::literal(format!("{byte:02x}"))
                })
                .collect();
            Wrapper::line(" ", hex)
        } else {
            let child_opts = opts | RenderOptions::SKIP_TYPES;
            let item_nodes = items.iter().map(|it| emit(child_opts, pending, it)).collect();
            Wrapper::block(", ", ",", item_nodes)
        };
        brace(opts, &v.ty, untyped.clone(), content)
    };

    if is_array {
        build(pending)
    } else {
        with_cycle_tracking(pending, v.identity, build)
    }
}

fn emit_map(opts: RenderOptions, pending: &mut Pending, v: &Value<'_>, pairs: &[(Value<'_>, Value<'_>)]) -> Node {
    let build = |pending: &mut Pending| -> Node {
        let child_opts = opts | RenderOptions::SKIP_TYPES;
        let mut rendered: Vec<(String, Node)> = Vec::with_capacity(pairs.len());
        for (k, val) in pairs {
            let key_node = emit(child_opts, pending, k);
            let value_node = emit(child_opts, pending, val);
            let sort_key = if opts.contains(RenderOptions::RANDOM_MAPS) {
                String::new()
            } else {
                extended_key_string(opts, k)
            };
            rendered.push((sort_key, node![key_node, ": ", value_node]));
        }
        if !opts.contains(RenderOptions::RANDOM_MAPS) {
            // `sort_by` is stable, so ties (identical extended renderings)
            // keep their insertion order rather than depending on an
            // unordered hash iteration.
            rendered.sort_by(|a, b| a.0.cmp(&b.0));
        }
        let items = rendered.into_iter().map(|(_, n)| n).collect();
        let content = Wrapper::block(", ", ",", items);
        brace(opts, &v.ty, Node::literal("map"), content)
    };
    with_cycle_tracking(pending, v.identity, build)
}

/// Renders `key` the way [`emit_map`] sorts by: skip-types suppressed
/// like any other map child, but with `POINTER_VALUES` active so a
/// pointer anywhere in the key appends its address. Uses a scratch
/// cycle tracker scoped to just this call — the resulting string is
/// only ever compared against other keys' extended strings, never
/// printed, so its `rN` ids don't need to agree with the real render.
fn extended_key_string(opts: RenderOptions, key: &Value<'_>) -> String {
    let ext_opts = (opts | RenderOptions::SKIP_TYPES | RenderOptions::POINTER_VALUES)
        & !RenderOptions::RANDOM_MAPS;
    let mut scratch = Pending::new();
    let node = emit(ext_opts, &mut scratch, key);
    print::render_flat(&node)
}

fn emit_pointer(opts: RenderOptions, pending: &mut Pending, v: &Value<'_>, inner: Option<&Value<'_>>) -> Node {
    let inner_value = inner.expect("non-nil pointer always carries a pointee");
    let build = |pending: &mut Pending| -> Node {
        let child = emit(opts, pending, inner_value);
        let content = if opts.contains(RenderOptions::TYPES) || opts.contains(RenderOptions::ALL_TYPES) {
            node!["*", child]
        } else {
            child
        };
        if opts.contains(RenderOptions::POINTER_VALUES) {
            if let Some((_, addr)) = v.identity {
                return node![content, format!("_ADDR{addr:x}")];
            }
        }
        content
    };
    with_cycle_tracking(pending, v.identity, build)
}

fn emit_interface(opts: RenderOptions, pending: &mut Pending, v: &Value<'_>, inner: Option<&Value<'_>>) -> Node {
    let inner_value = inner.expect("non-nil interface always carries an element");
    let child_opts = opts & !RenderOptions::SKIP_TYPES;
    let elem = emit(child_opts, pending, inner_value);
    paren(opts, v, elem)
}

fn emit_struct(opts: RenderOptions, pending: &mut Pending, v: &Value<'_>, fields: &[crate::value::FieldRef<'_>]) -> Node {
    let child_opts = opts | RenderOptions::SKIP_TYPES;
    let items = fields
        .iter()
        .map(|f| {
            let val = emit(child_opts, pending, &f.value);
            node![f.name, ": ", val]
        })
        .collect();
    let content = Wrapper::block(", ", ",", items);
    brace(opts, &v.ty, Node::literal(""), content)
}

fn emit_hidden(opts: RenderOptions, v: &Value<'_>, token: &str) -> Node {
    if opts.contains(RenderOptions::TYPES) || opts.contains(RenderOptions::ALL_TYPES) {
        typefmt::format(&v.ty)
    } else {
        Node::literal(token)
    }
}

fn emit_unsafe_pointer(opts: RenderOptions, v: &Value<'_>) -> Node {
    if opts.contains(RenderOptions::ALL_TYPES) {
        node![typefmt::format(&v.ty), "(pointer)"]
    } else {
        Node::literal("pointer")
    }
}

/// §4.2.3's cycle tracker wrapper: consult `pending` before building
/// the node for a slice, map or non-nil pointer, and prepend a `rN=`
/// definition label if a descendant referenced it while in flight.
fn with_cycle_tracking(
    pending: &mut Pending,
    identity: Option<(TypeId, usize)>,
    build: impl FnOnce(&mut Pending) -> Node,
) -> Node {
    let Some((type_id, addr)) = identity else {
        return build(pending);
    };

    match pending.enter(type_id, addr) {
        Enter::Cycle { id } => Node::literal(format!("r{id}")),
        Enter::First { id } => {
            let mut n = build(pending);
            if pending.leave(type_id, addr) {
                n.parts.insert(0, Part::Literal(format!("r{id}=")));
            }
            n
        }
    }
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod emit_tests;
