//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a [`Directory`] and answers
//! requests against it. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the directory.

use crate::framework::client::ResourceClient;
use crate::framework::directory::Directory;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a [`Directory`] of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`directory`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Every request is handled to completion before the next one is received, so the
/// directory needs no `Mutex` or `RwLock`. Any number of cloned
/// [`ResourceClient`]s may send concurrently; the channel serializes them.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the loop drains and exits.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<User>::new(32);
/// let handle = tokio::spawn(actor.run());
///
/// let user = client.create(UserCreate::new("Alice", "alice@example.com")).await?;
/// assert_eq!(user.id, 1);
///
/// drop(client);
/// handle.await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    directory: Directory<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty directory and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space. Must be non-zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_directory(buffer_size, Directory::new())
    }

    /// Same as [`ResourceActor::new`], starting from an existing directory.
    pub fn with_directory(buffer_size: usize, directory: Directory<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            directory,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "user_directory::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.directory.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.directory.len(), "List");
                    let _ = respond_to.send(Ok(self.directory.list()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.directory.get(&id).cloned().map_err(FrameworkError::from);
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.directory.create(params);
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), size = self.directory.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.directory.update(&id, update);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(_) => warn!(entity_type, %id, "Not found"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.directory.delete(&id);
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.directory.len(), "Deleted"),
                        Err(_) => warn!(entity_type, %id, "Not found"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Search { query, respond_to } => {
                    let hits = self.directory.search(&query);
                    debug!(entity_type, ?query, hits = hits.len(), "Search");
                    let _ = respond_to.send(Ok(hits));
                }
            }
        }

        info!(entity_type, size = self.directory.len(), "Shutdown");
    }
}
