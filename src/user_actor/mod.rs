//! # User Actor
//!
//! This module implements the User resource actor, serving the [`UserDirectory`] with CRUD
//! and search operations.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use user_directory::framework::ActorClient;
//! use user_directory::model::UserCreate;
//! use user_directory::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, client) = user_actor::new();
//!
//!     // Start the actor
//!     tokio::spawn(actor.run());
//!
//!     // Use the client
//!     let user = client.create(UserCreate::new("Alice", "alice@example.com")).await?;
//!     assert_eq!(user.id, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::{User, UserDirectory};

/// Channel capacity used by [`new`].
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Creates a new User actor with an empty directory, and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    with_buffer(DEFAULT_BUFFER_SIZE)
}

/// Like [`new`], with an explicit channel capacity.
pub fn with_buffer(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    with_directory(buffer_size, UserDirectory::new())
}

/// Creates a User actor serving an existing directory.
pub fn with_directory(
    buffer_size: usize,
    directory: UserDirectory,
) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::with_directory(buffer_size, directory);
    (actor, UserClient::new(generic_client))
}
