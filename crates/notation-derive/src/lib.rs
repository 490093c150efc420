//! `#[derive(Reflect)]`: generates a `notation::Reflect` implementation
//! for a struct or enum by walking its fields, the way `notation`'s own
//! blanket impls (`crates/notation/src/impls.rs`) walk the standard
//! collections.
//!
//! A struct becomes one `Kind::Struct` node named after the type. An
//! enum becomes a `match` over its variants, each arm producing its own
//! `Kind::Struct` node named `Enum::Variant` — Rust has no tagged-union
//! kind for `notation::Kind` to dispatch on, so a variant is rendered as
//! a distinctly-named struct rather than folded into one shared shape.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, Variant};

#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let type_name = name.to_string();

    let body = match &input.data {
        Data::Struct(data) => struct_body(&data.fields, &quote!(self), &type_name),
        Data::Enum(data) => enum_body(name, &type_name, &data.variants),
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "Reflect cannot be derived for unions",
            ));
        }
    }?;

    // An enum's `reflected_type()` can't name a variant without an
    // instance to inspect, so it falls back to the bare enum name —
    // the same approximation `struct_body` would give a unit struct.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(notation::Reflect));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics notation::Reflect for #name #ty_generics #where_clause {
            fn reflect(&self) -> notation::__private::Value<'_> {
                #body
            }

            fn reflected_type() -> notation::__private::Type {
                notation::__private::Type::Named(#type_name)
            }
        }
    })
}

/// Builds the `Value::new(Kind::Struct(..), Type::Named(..))` expression
/// for one field set, with `receiver` the path to the value the fields
/// are read off (`self` for a struct, a bound match variable for an
/// enum variant).
fn struct_body(fields: &Fields, receiver: &TokenStream2, type_name: &str) -> syn::Result<TokenStream2> {
    let field_refs: Vec<TokenStream2> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|f| {
                let ident = f.ident.as_ref().expect("named field has an ident");
                let field_name = ident.to_string();
                quote! {
                    notation::__private::FieldRef::new(
                        #field_name,
                        notation::Reflect::reflect(&#receiver.#ident),
                    )
                }
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let index = Index::from(i);
                let field_name = i.to_string();
                quote! {
                    notation::__private::FieldRef::new(
                        #field_name,
                        notation::Reflect::reflect(&#receiver.#index),
                    )
                }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    Ok(quote! {
        notation::__private::Value::new(
            notation::__private::Kind::Struct(vec![#(#field_refs),*]),
            notation::__private::Type::Named(#type_name),
        )
    })
}

/// Builds the `match self { .. }` over an enum's variants, binding each
/// variant's fields so [`struct_body`] can read them by name.
fn enum_body(
    enum_name: &syn::Ident,
    enum_type_name: &str,
    variants: &syn::punctuated::Punctuated<Variant, syn::Token![,]>,
) -> syn::Result<TokenStream2> {
    let arms = variants
        .iter()
        .map(|variant| {
            let variant_ident = &variant.ident;
            let variant_type_name = format!("{enum_type_name}::{variant_ident}");

            let (pattern, receiver) = match &variant.fields {
                Fields::Named(named) => {
                    let idents: Vec<_> = named
                        .named
                        .iter()
                        .map(|f| f.ident.clone().expect("named field has an ident"))
                        .collect();
                    (quote!(#enum_name::#variant_ident { #(#idents),* }), Binding::Named(idents))
                }
                Fields::Unnamed(unnamed) => {
                    let idents: Vec<_> = (0..unnamed.unnamed.len())
                        .map(|i| format_ident!("field_{}", i))
                        .collect();
                    (quote!(#enum_name::#variant_ident ( #(#idents),* )), Binding::Unnamed(idents))
                }
                Fields::Unit => (quote!(#enum_name::#variant_ident), Binding::Unit),
            };

            let field_refs = match (&variant.fields, &receiver) {
                (Fields::Named(_), Binding::Named(idents)) => idents
                    .iter()
                    .map(|ident| {
                        let field_name = ident.to_string();
                        quote! {
                            notation::__private::FieldRef::new(
                                #field_name,
                                notation::Reflect::reflect(#ident),
                            )
                        }
                    })
                    .collect::<Vec<_>>(),
                (Fields::Unnamed(_), Binding::Unnamed(idents)) => idents
                    .iter()
                    .enumerate()
                    .map(|(i, ident)| {
                        let field_name = i.to_string();
                        quote! {
                            notation::__private::FieldRef::new(
                                #field_name,
                                notation::Reflect::reflect(#ident),
                            )
                        }
                    })
                    .collect::<Vec<_>>(),
                _ => Vec::new(),
            };

            quote! {
                #pattern => notation::__private::Value::new(
                    notation::__private::Kind::Struct(vec![#(#field_refs),*]),
                    notation::__private::Type::Named(#variant_type_name),
                ),
            }
        })
        .collect::<Vec<_>>();

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}

enum Binding {
    Named(Vec<syn::Ident>),
    Unnamed(Vec<syn::Ident>),
    Unit,
}
