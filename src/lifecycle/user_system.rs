use crate::clients::UserClient;
use crate::model::UserDirectory;
use crate::user_actor;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Owns the running user actor and hands out its client.
pub struct UserSystem {
    /// Client for the user actor. Clone it freely.
    pub user_client: UserClient,

    handle: JoinHandle<()>,
}

impl UserSystem {
    /// Spawns a user actor over an empty directory.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        Self::with_directory(buffer_size, UserDirectory::new())
    }

    /// Spawns a user actor over `directory`.
    pub fn with_directory(buffer_size: usize, directory: UserDirectory) -> Self {
        let (actor, user_client) = user_actor::with_directory(buffer_size, directory);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size, "User system started");
        Self {
            user_client,
            handle,
        }
    }

    /// Drops this system's client and waits for the actor to finish.
    ///
    /// Hangs while other clones of the client are still alive.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
