//! Generic actor framework for directory-backed resources.
//!
//! This module provides the building blocks for serving an ordered, in-memory
//! [`Directory`] from a single Tokio task.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored and served
//! - [`Directory`] - Ordered store with CRUD and search semantics
//! - [`ResourceActor`] - Task that owns a directory and processes requests one by one
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`ActorClient`] - Default CRUD methods for resource-specific client wrappers
//! - [`FrameworkError`] / [`DirectoryError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod directory;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use directory::Directory;
pub use entity::ActorEntity;
pub use error::{DirectoryError, FrameworkError};
pub use message::{ResourceRequest, Response};
