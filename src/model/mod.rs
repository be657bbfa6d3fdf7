//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod user;
pub mod validation;

pub use user::*;
pub use validation::FieldError;
