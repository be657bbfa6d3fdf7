//! # System Lifecycle
//!
//! Starting and stopping the user directory, plus the tracing setup the binary
//! installs before anything else runs.
//!
//! ## The UserSystem Pattern
//!
//! ```rust,ignore
//! let system = UserSystem::new(32);
//! let app = http::router(system.user_client.clone());
//! // ... serve ...
//! drop(app);
//! system.shutdown().await?;
//! ```
//!
//! The actor exits once every [`UserClient`](crate::clients::UserClient) clone is gone,
//! so anything holding a clone (the router, spawned tasks) must be dropped before
//! [`UserSystem::shutdown`] can return.

pub mod tracing;
pub mod user_system;

pub use user_system::*;
