//! The cycle tracker: a per-render table of in-flight aggregate
//! identities, used to detect directed cycles through slice/map/pointer
//! edges and label them with `rN=`/`rN` markers.

use indexmap::IndexMap;
use std::any::TypeId;

#[cfg(test)]
#[path = "pending_tests.rs"]
mod pending_tests;

/// An entry's bookkeeping: the identifier assigned on first sight, and
/// how many times a descendant has re-encountered it while still
/// in-flight.
#[derive(Debug, Clone, Copy)]
struct Entry {
    id: usize,
    ref_count: usize,
}

/// Tracks aggregate values (slices, maps, non-nil pointers) currently
/// being descended into, keyed by (type identity, address). Addresses
/// alone are unsafe to use as keys: two values of different types can
/// share a heap cell (e.g. zero-sized types), so every key carries a
/// type fingerprint alongside the address.
#[derive(Debug, Default)]
pub(crate) struct Pending {
    entries: IndexMap<(TypeId, usize), Entry>,
    next_id: usize,
}

/// What happened when entering an aggregate value.
pub(crate) enum Enter {
    /// First sighting — recurse, then call [`Pending::leave`] with the
    /// returned `id` and check `ref_count` to decide whether a `rN=`
    /// prefix is needed.
    First { id: usize },
    /// Already in-flight — a cycle. Emit a bare `rN` reference and do
    /// not recurse.
    Cycle { id: usize },
}

impl Pending {
    pub fn new() -> Self {
        Pending::default()
    }

    /// Consult the tracker before descending into an aggregate value.
    pub fn enter(&mut self, type_id: TypeId, addr: usize) -> Enter {
        if let Some(entry) = self.entries.get_mut(&(type_id, addr)) {
            entry.ref_count += 1;
            return Enter::Cycle { id: entry.id };
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert((type_id, addr), Entry { id, ref_count: 0 });
        Enter::First { id }
    }

    /// Called after the top-level occurrence's node has been built.
    /// Returns `true` if a descendant referenced it while in-flight,
    /// meaning the caller must prepend a `rN=` definition label.
    pub fn leave(&mut self, type_id: TypeId, addr: usize) -> bool {
        match self.entries.shift_remove(&(type_id, addr)) {
            Some(entry) => entry.ref_count > 0,
            None => false,
        }
    }
}
