//! `Reflect` implementations for the standard primitives and
//! collections. A user type gets one of these for free only if it's
//! built from these pieces plus `#[derive(Reflect)]`.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use crate::typefmt::Type;
use crate::value::{FieldRef, Kind, Reflect, TypeId, Value};

macro_rules! int_impl {
    ($ty:ty, $name:literal, $variant:ident) => {
        impl Reflect for $ty {
            fn reflect(&self) -> Value<'_> {
                Value::new(Kind::$variant(*self as _), Type::Named($name))
            }

            fn reflected_type() -> Type {
                Type::Named($name)
            }
        }
    };
}

int_impl!(i8, "i8", Int);
int_impl!(i16, "i16", Int);
int_impl!(i32, "i32", Int);
int_impl!(i64, "i64", Int);
int_impl!(i128, "i128", Int);
int_impl!(isize, "isize", Int);
int_impl!(u8, "byte", Uint);
int_impl!(u16, "u16", Uint);
int_impl!(u32, "u32", Uint);
int_impl!(u64, "u64", Uint);
int_impl!(u128, "u128", Uint);
int_impl!(usize, "usize", Uint);

impl Reflect for bool {
    fn reflect(&self) -> Value<'_> {
        Value::new(Kind::Bool(*self), Type::Named("bool")).with_default_type()
    }

    fn reflected_type() -> Type {
        Type::Named("bool")
    }
}

impl Reflect for f32 {
    fn reflect(&self) -> Value<'_> {
        Value::new(Kind::Float(*self as f64), Type::Named("f32"))
    }

    fn reflected_type() -> Type {
        Type::Named("f32")
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Value<'_> {
        Value::new(Kind::Float(*self), Type::Named("f64"))
    }

    fn reflected_type() -> Type {
        Type::Named("f64")
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::new(Kind::Str(self), Type::Named("string")).with_default_type()
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::new(Kind::Str(self.as_str()), Type::Named("string")).with_default_type()
    }

    fn reflected_type() -> Type {
        Type::Named("string")
    }
}

impl<T: Reflect + 'static> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        reflect_slice(self.as_slice(), TypeId::of::<Vec<T>>())
    }

    fn reflected_type() -> Type {
        Type::Slice(Box::new(T::reflected_type()))
    }
}

impl<T: Reflect + 'static> Reflect for [T] {
    fn reflect(&self) -> Value<'_> {
        reflect_slice(self, TypeId::of::<[T]>())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        let elem_ty = elem_type(self.as_slice());
        let items = self.iter().map(Reflect::reflect).collect();
        Value::new(Kind::List(items), Type::Array(N, Box::new(elem_ty)))
    }

    fn reflected_type() -> Type {
        Type::Array(N, Box::new(T::reflected_type()))
    }
}

/// Recovers an element type by sampling the first item; falls back to
/// `T::reflected_type()` when `items` is empty, so an empty typed
/// collection still names its element type in type modes.
fn elem_type<T: Reflect>(items: &[T]) -> Type {
    items.first().map(|v| v.reflect().ty).unwrap_or_else(T::reflected_type)
}

fn reflect_slice<T: Reflect>(items: &[T], type_id: TypeId) -> Value<'_> {
    let elem_ty = elem_type(items);
    let addr = items.as_ptr() as usize;
    let values = items.iter().map(Reflect::reflect).collect();
    Value::new(Kind::List(values), Type::Slice(Box::new(elem_ty))).with_identity(type_id, addr)
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        match self {
            None => Value::nil(Type::Option(Box::new(T::reflected_type()))),
            Some(v) => {
                let inner = v.reflect();
                let ty = Type::Option(Box::new(inner.ty.clone()));
                Value::new(Kind::Interface(Some(Box::new(inner))), ty)
            }
        }
    }

    fn reflected_type() -> Type {
        Type::Option(Box::new(T::reflected_type()))
    }
}

impl<T: Reflect + ?Sized + 'static> Reflect for Box<T> {
    fn reflect(&self) -> Value<'_> {
        let inner = (**self).reflect();
        let addr = &**self as *const T as *const () as usize;
        let ty = Type::Pointer(Box::new(inner.ty.clone()));
        Value::new(Kind::Pointer(Some(Box::new(inner))), ty).with_identity(TypeId::of::<Box<T>>(), addr)
    }
}

impl<T: Reflect + 'static> Reflect for Rc<T> {
    fn reflect(&self) -> Value<'_> {
        let inner = (**self).reflect();
        let addr = Rc::as_ptr(self) as usize;
        let ty = Type::Pointer(Box::new(inner.ty.clone()));
        Value::new(Kind::Pointer(Some(Box::new(inner))), ty).with_identity(TypeId::of::<Rc<T>>(), addr)
    }

    fn reflected_type() -> Type {
        Type::Pointer(Box::new(T::reflected_type()))
    }
}

impl<T: Reflect + 'static> Reflect for Arc<T> {
    fn reflect(&self) -> Value<'_> {
        let inner = (**self).reflect();
        let addr = Arc::as_ptr(self) as usize;
        let ty = Type::Pointer(Box::new(inner.ty.clone()));
        Value::new(Kind::Pointer(Some(Box::new(inner))), ty).with_identity(TypeId::of::<Arc<T>>(), addr)
    }

    fn reflected_type() -> Type {
        Type::Pointer(Box::new(T::reflected_type()))
    }
}

impl<K: Reflect + 'static, V: Reflect + 'static> Reflect for HashMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        let addr = self as *const Self as usize;
        let (kt, vt) = map_elem_types(self.iter());
        let items = self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect();
        Value::new(Kind::Map(items), Type::Map(Box::new(kt), Box::new(vt)))
            .with_identity(TypeId::of::<HashMap<K, V>>(), addr)
    }

    fn reflected_type() -> Type {
        Type::Map(Box::new(K::reflected_type()), Box::new(V::reflected_type()))
    }
}

impl<K: Reflect + 'static, V: Reflect + 'static> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        let addr = self as *const Self as usize;
        let (kt, vt) = map_elem_types(self.iter());
        let items = self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect();
        Value::new(Kind::Map(items), Type::Map(Box::new(kt), Box::new(vt)))
            .with_identity(TypeId::of::<BTreeMap<K, V>>(), addr)
    }

    fn reflected_type() -> Type {
        Type::Map(Box::new(K::reflected_type()), Box::new(V::reflected_type()))
    }
}

/// Recovers key/value types by sampling the first entry; falls back to
/// `K::reflected_type()`/`V::reflected_type()` when the map is empty.
fn map_elem_types<'a, K: Reflect + 'a, V: Reflect + 'a>(
    mut it: impl Iterator<Item = (&'a K, &'a V)>,
) -> (Type, Type) {
    match it.next() {
        Some((k, v)) => (k.reflect().ty, v.reflect().ty),
        None => (K::reflected_type(), V::reflected_type()),
    }
}

macro_rules! tuple_impl {
    ($($idx:tt : $name:ident),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn reflect(&self) -> Value<'_> {
                let fields = vec![
                    $(FieldRef::new(stringify!($idx), self.$idx.reflect())),+
                ];
                let types = fields.iter().map(|f| f.value.ty.clone()).collect();
                Value::new(Kind::Struct(fields), Type::Tuple(types))
            }

            fn reflected_type() -> Type {
                Type::Tuple(vec![$($name::reflected_type()),+])
            }
        }
    };
}

tuple_impl!(0: A);
tuple_impl!(0: A, 1: B);
tuple_impl!(0: A, 1: B, 2: C);
tuple_impl!(0: A, 1: B, 2: C, 3: D);
tuple_impl!(0: A, 1: B, 2: C, 3: D, 4: E);
tuple_impl!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
tuple_impl!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
tuple_impl!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
