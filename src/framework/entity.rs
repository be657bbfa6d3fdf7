//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must satisfy to be stored in a
//! [`Directory`](crate::framework::Directory) and served by a
//! [`ResourceActor`](crate::framework::ResourceActor). It names the associated types for ids,
//! DTOs and search queries, and the small set of rules the directory delegates to the entity:
//! how ids are allocated, how updates are applied and what a query matches.
//!
//! # Architecture Note
//! The directory owns *ordering* and *lookup*; the entity owns *meaning*. Keeping the
//! id policy and the match rule on the entity lets the store and the actor loop stay generic
//! while each record type decides its own semantics.

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Id Allocation
/// Ids are allocated from the *current maximum*, not from a monotonic counter: the directory
/// calls [`ActorEntity::next_id`] with the largest id present, or [`ActorEntity::first_id`]
/// when it is empty. Deleting the highest record therefore frees its id for reuse. When
/// `next_id` returns `None` the create fails with [`DirectoryError::IdsExhausted`](crate::framework::DirectoryError::IdsExhausted).
///
/// # Provided Methods
/// [`ActorEntity::is_blank_query`] defaults to `false` (every query is scanned).
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity. `Ord` is required for max-based allocation.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The search term accepted by [`ActorEntity::matches`].
    type Query: Send + Sync + Debug;

    /// The id assigned to this record by the directory.
    fn id(&self) -> &Self::Id;

    /// Id given to the first record of an empty directory.
    fn first_id() -> Self::Id;

    /// Id following `max`, the largest id currently stored, or `None` once the id
    /// type has no value above `max`.
    fn next_id(max: &Self::Id) -> Option<Self::Id>;

    /// Construct the full entity from its allocated id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Apply an update in place. Must never change [`ActorEntity::id`].
    fn on_update(&mut self, update: Self::Update);

    /// Returns `true` if `query` should short-circuit to an empty result.
    fn is_blank_query(_query: &Self::Query) -> bool {
        false
    }

    /// Returns `true` if this record belongs in the result of `query`.
    fn matches(&self, query: &Self::Query) -> bool;
}
