//! Foreign-key resolution against a loaded collection.

use std::collections::HashMap;
use zoo_types::RecordId;

/// Collections larger than this get an identifier map instead of a linear scan.
pub const INDEX_THRESHOLD: usize = 64;

/// Resolves identifiers against a lookup collection.
///
/// Both strategies return the *first* record carrying a given identifier;
/// duplicates later in the collection are never seen.
pub enum Lookup<'a, T> {
    Scan {
        items: &'a [T],
        key: fn(&T) -> &RecordId,
    },
    Indexed(HashMap<&'a RecordId, &'a T>),
}

impl<'a, T> Lookup<'a, T> {
    /// Picks a strategy from the collection size.
    pub fn new(items: &'a [T], key: fn(&T) -> &RecordId) -> Self {
        if items.len() > INDEX_THRESHOLD {
            Self::indexed(items, key)
        } else {
            Self::scan(items, key)
        }
    }

    pub fn scan(items: &'a [T], key: fn(&T) -> &RecordId) -> Self {
        Lookup::Scan { items, key }
    }

    pub fn indexed(items: &'a [T], key: fn(&T) -> &RecordId) -> Self {
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            map.entry(key(item)).or_insert(item);
        }
        Lookup::Indexed(map)
    }

    /// A `None` key is a miss.
    pub fn find(&self, id: Option<&RecordId>) -> Option<&'a T> {
        let id = id?;
        match self {
            Lookup::Scan { items, key } => {
                let items: &'a [T] = items;
                items.iter().find(|item| key(item) == id)
            }
            Lookup::Indexed(map) => map.get(id).copied(),
        }
    }
}
