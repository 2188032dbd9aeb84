use std::collections::BTreeMap;

use taskboard_types::models::{Category, Todo};

/// A record that can live in an [`IdStore`].
pub trait Keyed {
    fn id(&self) -> u64;
    fn assign_id(&mut self, id: u64);
}

impl Keyed for Todo {
    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Keyed for Category {
    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// In-memory id -> record map with its own monotonically increasing counter.
///
/// Ids start at 1 and are never handed out twice, even after the record is
/// deleted. Because ids only grow, key order is insertion order, so `all()`
/// enumerates records in the order they were inserted.
#[derive(Debug)]
pub struct IdStore<T> {
    records: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Keyed + Clone> IdStore<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id to `record`, store it and return a copy.
    pub fn insert(&mut self, mut record: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        record.assign_id(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.records.get_mut(&id)
    }

    /// Returns whether a record was actually removed.
    pub fn delete(&mut self, id: u64) -> bool {
        self.records.remove(&id).is_some()
    }

    pub fn all(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record and restart numbering at 1.
    pub fn clear(&mut self) {
        self.records.clear();
        self.next_id = 1;
    }
}

impl<T: Keyed + Clone> Default for IdStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
