use crate::framework::Directory;
use crate::model::validation::{required, FieldError};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a [`User`] by the directory.
///
/// Signed, so that lookups with `0` or negative values are representable and simply miss.
pub type UserId = i32;

/// The ordered, in-memory collection of all users.
pub type UserDirectory = Directory<User>;

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored in a [`Directory`] and served by a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates a User with both fields present.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Payload for creating a new user. Carries no id; the directory assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Payload for updating an existing user.
///
/// Both fields are written verbatim, including `None` and empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Form model bound from create and edit submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Checks that `name` and `email` are present and not blank.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        required(&mut errors, "name", "Name", self.name.as_deref());
        required(&mut errors, "email", "Email", self.email.as_deref());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<UserForm> for UserCreate {
    fn from(form: UserForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
        }
    }
}

impl From<UserForm> for UserUpdate {
    fn from(form: UserForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
        }
    }
}
