//! Type descriptors and their textual rendering.
//!
//! [`Type`] is a small structural description of a Rust type — just
//! enough shape to render a `TYPENAME` the way [`crate::emit`] wants it
//! for type decoration. It carries no values; [`format`] turns one into
//! a [`crate::doc::Node`].

use crate::doc::{node, Node, Part, Wrapper};

#[cfg(test)]
#[path = "typefmt_tests.rs"]
mod typefmt_tests;

/// A channel type's direction, as carried by `chan`, `<-chan` and
/// `chan<-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChanDir {
    Both,
    Recv,
    Send,
}

/// A type's shape, as far as rendering cares.
///
/// `Named` covers every type with an intrinsic name — primitives,
/// `String`, and every `#[derive(Reflect)]` struct or enum. The
/// remaining variants describe the structural (unnamed) Rust types:
/// arrays, slices, maps, pointers, tuples, channels, functions,
/// interfaces, structs and `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Named(&'static str),
    Array(usize, Box<Type>),
    Slice(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Pointer(Box<Type>),
    Option(Box<Type>),
    Tuple(Vec<Type>),
    Chan(ChanDir, Box<Type>),
    /// Parameters, whether the last parameter is variadic, returns.
    Func(Vec<Type>, bool, Vec<Type>),
    /// Method name paired with its function-base signature (params,
    /// variadic, returns) — no `func` keyword, the method name stands
    /// in for it.
    Interface(Vec<(&'static str, Vec<Type>, bool, Vec<Type>)>),
    Struct(Vec<(&'static str, Type)>),
    /// The catch-all default for a type kind this crate has no
    /// constructor for.
    Invalid,
}

impl Type {
    pub fn named(name: &'static str) -> Self {
        Type::Named(name)
    }

    /// The bare name used by [`crate::emit`]'s implicit-default check
    /// (`int`, `bool`, `string` in the host language's terms — here
    /// the primitive and `String` names) — only meaningful for `Named`.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Type::Named(n) => Some(*n),
            _ => None,
        }
    }
}

/// Render a [`Type`] into a document node.
pub(crate) fn format(t: &Type) -> Node {
    match t {
        Type::Named(name) => Node::literal(*name),
        Type::Array(n, elem) => node!["[", *n, "]", format(elem)],
        Type::Slice(elem) => node!["[]", format(elem)],
        Type::Map(key, val) => node!["map[", format(key), "]", format(val)],
        Type::Pointer(elem) => node!["*", format(elem)],
        Type::Option(elem) => node!["Option<", format(elem), ">"],
        Type::Tuple(items) => {
            let parts = items.iter().map(format).collect();
            node!["(", Wrapper::block(", ", "", parts), ")"]
        }
        Type::Chan(dir, elem) => match dir {
            ChanDir::Both => node!["chan ", format(elem)],
            ChanDir::Recv => node!["<-chan ", format(elem)],
            ChanDir::Send => node!["chan<- ", format(elem)],
        },
        Type::Func(params, variadic, returns) => {
            let mut parts = vec![Part::from("func")];
            parts.extend(func_base_parts(params, *variadic, returns));
            Node::of(parts)
        }
        Type::Interface(methods) => {
            if methods.is_empty() {
                return Node::literal("interface{}");
            }
            let items = methods
                .iter()
                .map(|(name, params, variadic, returns)| {
                    let mut parts = vec![Part::from(*name)];
                    parts.extend(func_base_parts(params, *variadic, returns));
                    Node::of(parts)
                })
                .collect();
            node!["interface{", Wrapper::block("; ", "", items), "}"]
        }
        Type::Struct(fields) => {
            if fields.is_empty() {
                return Node::literal("struct{}");
            }
            let items = fields
                .iter()
                .map(|(name, ty)| node![*name, " ", format(ty)])
                .collect();
            node!["struct{", Wrapper::block("; ", "", items), "}"]
        }
        Type::Invalid => Node::literal("<invalid>"),
    }
}

/// The `(ARGS) RETS` shared by standalone function types and interface
/// methods — everything but the leading `func` keyword.
fn func_base_parts(params: &[Type], variadic: bool, returns: &[Type]) -> Vec<Part> {
    let items: Vec<Node> = params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if variadic && i == params.len() - 1 {
                node!["...", format(p)]
            } else {
                format(p)
            }
        })
        .collect();
    let mut parts = vec![Part::from("("), Part::from(Wrapper::block(", ", "", items)), Part::from(")")];
    match returns.len() {
        0 => {}
        1 => {
            parts.push(Part::from(" "));
            parts.push(Part::from(format(&returns[0])));
        }
        _ => {
            let ritems = returns.iter().map(format).collect();
            parts.push(Part::from(" ("));
            parts.push(Part::from(Wrapper::block(", ", "", ritems)));
            parts.push(Part::from(")"));
        }
    }
    parts
}
