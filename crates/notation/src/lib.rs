//! Human-readable textual notation for arbitrary Rust values.
//!
//! Values are translated into a tree of document nodes, measured in a
//! single recursive pass, and then wrapped across lines only where a
//! configured column budget demands it. The result is a compact,
//! indentation-stable rendering meant for debugging and diagnostics —
//! not a serialization format, and not guaranteed stable across crate
//! versions.
//!
//! The entry points are the `fprint*` (explicit sink), `print*`/`println*`
//! (process default destination) and `sprint*` (owned `String`) families,
//! each with `w`/`t`/`v` suffixes selecting wrapping and type-annotation
//! verbosity. Values are reflected into the document tree through the
//! [`Reflect`] trait, implemented for the standard primitives and
//! collections in this crate and derivable for user types with
//! `#[derive(Reflect)]` (the `derive` feature, enabled by default).

mod config;
mod doc;
mod emit;
mod error;
mod facade;
mod impls;
mod measure;
mod pending;
mod print;
mod typefmt;
mod value;
mod wrap;

pub use error::NotationError;
pub use facade::{
    fprint, fprintt, fprintv, fprintw, fprintwt, fprintwv, print, println, printlnt, printlnv,
    printlnw, printlnwt, printlnwv, printt, printv, printw, printwt, printwv, sprint, sprintt,
    sprintv, sprintw, sprintwt, sprintwv,
};
pub use value::{Reflect, Value};

#[cfg(feature = "derive")]
pub use notation_derive::Reflect;

// Re-exported so derive-macro output doesn't need a direct dependency edge.
#[doc(hidden)]
pub mod __private {
    pub use crate::typefmt::Type;
    pub use crate::value::{FieldRef, Kind, TypeId, Value};
}
