//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes [`UserError`] instead of
//! framework errors.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::User;
use crate::user_actor::UserError;
use async_trait::async_trait;

/// Client for interacting with the User actor.
///
/// Every CRUD and search method comes from [`ActorClient`]; bring the trait into scope
/// to call them.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}
