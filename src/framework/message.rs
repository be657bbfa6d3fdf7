//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map one-to-one onto the [`Directory`](crate::framework::Directory) operations:
///
/// - **List**: Every record, in insertion order.
/// - **Get**: A single record by id; `NotFound` if absent.
/// - **Create**: Uses [`ActorEntity::Create`] and replies with the stored record.
/// - **Update**: Uses [`ActorEntity::Update`] and replies with the new state.
/// - **Delete**: Removes the record and replies with what was removed.
/// - **Search**: Read-only filter using [`ActorEntity::Query`].
///
/// This type is generic over `T: ActorEntity`, so a "User Create" payload can only ever be
/// sent to a `User` actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Search {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
