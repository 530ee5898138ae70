use std::{
    cell::RefCell,
    hash::{BuildHasher, Hash},
};

use hashbrown::{DefaultHashBuilder, HashTable, hash_table::Entry};
use typed_arena::Arena;

// derive_where to remove `T: Default` bound
#[derive_where::derive_where(Default)]
struct InternTable<'a, T> {
    hash_builder: DefaultHashBuilder,
    table: HashTable<&'a T>,
}

/// Arena-backed interner: structurally equal values share a single
/// allocation, and everything interned lives exactly as long as the arena.
pub struct Interner<'a, T> {
    // would prefer to be able to own this but that'd require self reference,
    // which becomes real complex real quick
    arena: &'a Arena<T>,

    table: RefCell<InternTable<'a, T>>,
}

impl<'a, T> Interner<'a, T>
where
    T: Hash + Eq,
{
    pub fn with_arena(arena: &'a Arena<T>) -> Self {
        Self {
            arena,
            table: RefCell::new(InternTable::default()),
        }
    }

    pub fn intern(&self, val: T) -> &'a T {
        let InternTable {
            hash_builder,
            table,
        } = &mut *self.table.borrow_mut();

        let hasher = |v: &&T| hash_builder.hash_one(v);
        match table.entry(hasher(&&val), |k: &&'a T| k == &&val, hasher) {
            Entry::Occupied(occupied) => *occupied.get(),
            Entry::Vacant(vacant) => *vacant.insert(self.arena.alloc(val)).get(),
        }
    }
}
