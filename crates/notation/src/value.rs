//! The reflection seam: [`Reflect`] and [`Value`].
//!
//! Go's `reflect.Value`/`reflect.Type` give the original renderer a
//! single uniform way to walk any value at runtime. Rust has no such
//! API, so this module is the mechanical substitute: [`Reflect`] is the
//! one-method trait any renderable type implements (by hand or via
//! `#[derive(Reflect)]`), and [`Value`] is the small tree it produces —
//! just enough shape for [`crate::emit`] to walk.

use crate::typefmt::Type;

/// A value's type identity, used to key the cycle tracker in
/// [`crate::pending`] alongside its address. Re-exported so derive-macro
/// output can name it without a direct dependency on `std::any`.
pub use std::any::TypeId;

/// One field of a reflected struct (or a tuple, rendered as a struct
/// with numeric field names).
pub struct FieldRef<'a> {
    pub name: &'static str,
    pub value: Value<'a>,
}

impl<'a> FieldRef<'a> {
    pub fn new(name: &'static str, value: Value<'a>) -> Self {
        FieldRef { name, value }
    }
}

/// The shape-specific payload of a [`Value`].
///
/// This mirrors the kinds [`crate::emit`] dispatches on. Unlike Go's
/// `reflect.Kind`, nil-ness is not folded in here — a nilable kind
/// (`Slice`, `Map`, `Pointer`, `Interface`, `Chan`, `Func`,
/// `UnsafePointer`) always carries its payload as an `Option`, and
/// `Value::nil` mirrors that same fact for the emitter's convenience.
pub enum Kind<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// The original string, quoted/escaped on demand by `crate::emit`.
    Str(&'a str),
    /// Array and slice elements alike; array-vs-slice and nil-vs-empty
    /// are distinguished by `Value::ty` and `Value::nil`.
    List(Vec<Value<'a>>),
    Map(Vec<(Value<'a>, Value<'a>)>),
    Pointer(Option<Box<Value<'a>>>),
    /// `Option<T>` and other interface-like containers.
    Interface(Option<Box<Value<'a>>>),
    Struct(Vec<FieldRef<'a>>),
    Chan,
    Func,
    UnsafePointer,
}

/// A reflected value: a [`Kind`]-tagged payload plus the bookkeeping
/// [`crate::emit`] needs — the type (for decoration), an address (for
/// cycle identity), and whether this occurrence is nil.
pub struct Value<'a> {
    pub kind: Kind<'a>,
    pub ty: Type,
    /// `(type identity, address)` for values cycle detection must
    /// track: non-nil slices, maps and pointers. `None` for everything
    /// else. The type identity can't be recovered from `Kind`/`Type`
    /// alone (two distinct Rust types can share both), so the `Reflect`
    /// impl that knows `Self` concretely stamps it in directly.
    pub identity: Option<(TypeId, usize)>,
    /// Whether this occurrence is the nil value of a nilable kind.
    pub nil: bool,
    /// Whether this type is recoverable from context and so elided in
    /// moderate-type mode — Go's `int`/`bool`/`string` defaults. Rust
    /// has no single default integer type, so only `bool` and `string`
    /// carry this; every sized integer/float is its own explicit type.
    pub default_type: bool,
}

impl<'a> Value<'a> {
    pub fn new(kind: Kind<'a>, ty: Type) -> Self {
        Value { kind, ty, identity: None, nil: false, default_type: false }
    }

    pub fn with_identity(mut self, type_id: TypeId, addr: usize) -> Self {
        self.identity = Some((type_id, addr));
        self
    }

    pub fn with_default_type(mut self) -> Self {
        self.default_type = true;
        self
    }

    pub fn nil(ty: Type) -> Self {
        Value { kind: Kind::Interface(None), ty, identity: None, nil: true, default_type: false }
    }
}

/// Implemented by any type this crate can render.
///
/// A blanket set of implementations covers the primitives and standard
/// collections in [`crate::impls`]; `#[derive(Reflect)]` (the `derive`
/// feature, enabled by default) generates one for a user struct or enum
/// by walking its fields.
pub trait Reflect {
    fn reflect(&self) -> Value<'_>;

    /// The type [`Self::reflect`] would report, recoverable without an
    /// instance. Collections with no elements to sample (an empty
    /// `Vec<T>`, an empty `HashMap<K, V>`) fall back to this to label
    /// their element type in type modes rather than emitting
    /// [`Type::Invalid`]. Every impl should report the same type its
    /// `reflect()` does.
    fn reflected_type() -> Type
    where
        Self: Sized,
    {
        Type::Invalid
    }
}
