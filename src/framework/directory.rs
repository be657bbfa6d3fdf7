//! # Directory
//!
//! An ordered, in-memory collection of entities. This is the state a
//! [`ResourceActor`](crate::framework::ResourceActor) owns exclusively.
//!
//! ## List Semantics
//!
//! Records live in a `Vec` in insertion order. Every lookup is a linear scan where the
//! first match wins, and removal preserves the relative order of the remaining records.
//! At the sizes this store is meant for, the scan is cheaper than keeping a second index
//! consistent.

use crate::framework::entity::ActorEntity;
use crate::framework::error::DirectoryError;

/// Ordered store of `T` records with CRUD and search operations.
///
/// `Directory` is plain synchronous data. It performs no locking; callers that share
/// it across tasks must serialize access (the actor does this by owning it).
#[derive(Debug, Clone)]
pub struct Directory<T: ActorEntity> {
    records: Vec<T>,
}

impl<T: ActorEntity> Default for Directory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Directory<T> {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a copy of every record in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Returns the first record whose id equals `id`.
    pub fn get(&self, id: &T::Id) -> Result<&T, DirectoryError<T::Id>> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }

    /// Appends a new record and returns it with its allocated id.
    ///
    /// The id is `next_id(max)` over the ids currently stored, so it is always
    /// greater than every existing id but may repeat an id that was deleted.
    /// Fails with [`DirectoryError::IdsExhausted`] when no id is left above the maximum;
    /// nothing is appended in that case.
    pub fn create(&mut self, params: T::Create) -> Result<T, DirectoryError<T::Id>> {
        let id = self.next_id()?;
        let item = T::from_create_params(id, params);
        self.records.push(item.clone());
        Ok(item)
    }

    /// Applies `update` to the record with `id` and returns the new state.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<T, DirectoryError<T::Id>> {
        let item = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;
        item.on_update(update);
        Ok(item.clone())
    }

    /// Removes the record with `id` and returns it.
    pub fn delete(&mut self, id: &T::Id) -> Result<T, DirectoryError<T::Id>> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;
        Ok(self.records.remove(pos))
    }

    /// Returns the matching records in insertion order.
    ///
    /// A blank query yields an empty result, it does not match everything.
    pub fn search(&self, query: &T::Query) -> Vec<T> {
        if T::is_blank_query(query) {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.matches(query))
            .cloned()
            .collect()
    }

    /// Drops every record. The next create starts again from `first_id`.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn next_id(&self) -> Result<T::Id, DirectoryError<T::Id>> {
        match self.records.iter().map(T::id).max() {
            Some(max) => T::next_id(max).ok_or_else(|| DirectoryError::IdsExhausted(max.clone())),
            None => Ok(T::first_id()),
        }
    }
}
