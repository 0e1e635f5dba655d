//! The canonical, server-synchronized record collection for one entity kind.

use model::Entity;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Replace/remove target is not in the collection. Non-fatal: the caller
    /// usually lets the next recompute drop the stale row.
    NotFound,
}

/// A mutation applied to the store after the server confirmed it.
#[derive(Debug, Clone)]
pub enum Mutation<T: Entity> {
    Insert(T),
    Replace(T::Key, T),
    Remove(T::Key),
}

/// Holds records in the order the server returned them (inserts append).
/// That order is the identity order of the projection pipeline: filtering
/// keeps it, and so does an unsorted view.
///
/// Records whose key cannot be derived (reservations with a missing key
/// half) are kept: they still belong in the table, they just cannot be
/// addressed by replace/remove.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Replaces the collection wholesale, used after a full fetch.
    pub fn load(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.position(key).map(|index| &self.records[index])
    }

    /// Applies a confirmed mutation and returns the new collection size.
    pub fn apply(&mut self, mutation: Mutation<T>) -> Result<usize, StoreError> {
        match mutation {
            Mutation::Insert(record) => {
                self.records.push(record);
            }
            Mutation::Replace(key, record) => {
                let index = self.position(&key).ok_or(StoreError::NotFound)?;
                self.records[index] = record;
            }
            Mutation::Remove(key) => {
                let index = self.position(&key).ok_or(StoreError::NotFound)?;
                self.records.remove(index);
            }
        }
        Ok(self.records.len())
    }

    fn position(&self, key: &T::Key) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.key().as_ref() == Some(key))
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Coordinates, Station};
    use utility::id::Id;

    fn station(id: i64, name: &str) -> Station {
        Station {
            id: Some(Id::new(id)),
            name: name.to_owned(),
            description: None,
            capacity: 10,
            coordinates: Coordinates::default(),
        }
    }

    #[test]
    fn replace_keeps_the_record_position() {
        let mut store = EntityStore::new();
        store.load(vec![station(1, "a"), station(2, "b"), station(3, "c")]);
        let size = store
            .apply(Mutation::Replace(Id::new(2), station(2, "renamed")))
            .unwrap();
        assert_eq!(size, 3);
        assert_eq!(store.records()[1].name, "renamed");
    }

    #[test]
    fn remove_preserves_the_order_of_the_rest() {
        let mut store = EntityStore::new();
        store.load(vec![station(1, "a"), station(2, "b"), station(3, "c")]);
        assert_eq!(store.apply(Mutation::Remove(Id::new(2))), Ok(2));
        let names: Vec<_> = store.records().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn unknown_key_is_reported_and_leaves_the_store_alone() {
        let mut store = EntityStore::new();
        store.load(vec![station(1, "a")]);
        assert_eq!(
            store.apply(Mutation::Remove(Id::new(99))),
            Err(StoreError::NotFound)
        );
        assert_eq!(store.len(), 1);
    }
}
