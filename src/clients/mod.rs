//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod user_client;

pub use user_client::*;
