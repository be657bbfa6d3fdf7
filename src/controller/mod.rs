//! # User Controller
//!
//! The request-facing actions for the user directory. Each action delegates to one
//! [`UserClient`] operation and turns the outcome into an [`ActionResult`], which the
//! [`http`](crate::http) layer renders.
//!
//! | Action | Success | Failure |
//! |--------|---------|---------|
//! | [`index`](UserController::index) | list of users | |
//! | [`details`](UserController::details) | one user | `NotFound` |
//! | [`create_form`](UserController::create_form) | empty form | |
//! | [`create`](UserController::create) | `RedirectToIndex` | `InvalidForm` |
//! | [`edit_form`](UserController::edit_form) | one user | `NotFound` |
//! | [`edit`](UserController::edit) | `RedirectToIndex` | `NotFound`, `InvalidForm` |
//! | [`delete_confirm`](UserController::delete_confirm) | one user | `NotFound` |
//! | [`delete`](UserController::delete) | `RedirectToIndex` | `NotFound` |
//! | [`search`](UserController::search) | query + matches | |
//!
//! `NotFound` and `InvalidForm` are outcomes, not errors. The `Err` side of
//! [`ControllerResult`] is reserved for infrastructure failures such as a closed actor.

use crate::clients::UserClient;
use crate::framework::ActorClient;
use crate::model::validation::summarize;
use crate::model::{FieldError, User, UserCreate, UserForm, UserId, UserUpdate};
use crate::user_actor::UserError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Outcome of a controller action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<M> {
    /// Render the model.
    View(M),
    /// The referenced record does not exist.
    NotFound,
    /// The write succeeded; go back to the list.
    RedirectToIndex,
    /// Re-show the submitted form with its errors. Nothing was written.
    InvalidForm {
        form: UserForm,
        errors: Vec<FieldError>,
    },
}

pub type ControllerResult<M> = Result<ActionResult<M>, UserError>;

/// Model for the search page: the query as typed plus its matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchView {
    pub query: Option<String>,
    pub users: Vec<User>,
}

/// Turns a lookup into a view, mapping a missing record to [`ActionResult::NotFound`].
fn found<M>(result: Result<M, UserError>) -> ControllerResult<M> {
    match result {
        Ok(model) => Ok(ActionResult::View(model)),
        Err(UserError::NotFound(_)) => Ok(ActionResult::NotFound),
        Err(e) => Err(e),
    }
}

/// Turns a write into a redirect, mapping a missing record to [`ActionResult::NotFound`].
fn redirect<M>(result: Result<User, UserError>) -> ControllerResult<M> {
    match result {
        Ok(_) => Ok(ActionResult::RedirectToIndex),
        Err(UserError::NotFound(_)) => Ok(ActionResult::NotFound),
        Err(e) => Err(e),
    }
}

fn invalid<M>(form: UserForm, errors: Vec<FieldError>) -> ControllerResult<M> {
    warn!(errors = %summarize(&errors), "Form rejected");
    Ok(ActionResult::InvalidForm { form, errors })
}

/// Handles the user actions against a running user actor.
#[derive(Clone)]
pub struct UserController {
    users: UserClient,
}

impl UserController {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// GET: every user in insertion order.
    #[instrument(skip(self))]
    pub async fn index(&self) -> ControllerResult<Vec<User>> {
        Ok(ActionResult::View(self.users.list().await?))
    }

    /// GET: one user.
    #[instrument(skip(self))]
    pub async fn details(&self, id: UserId) -> ControllerResult<User> {
        found(self.users.get(id).await)
    }

    /// GET: the blank create form.
    pub fn create_form(&self) -> ActionResult<UserForm> {
        ActionResult::View(UserForm::default())
    }

    /// POST: validate, then append a new user.
    #[instrument(skip(self))]
    pub async fn create(&self, form: UserForm) -> ControllerResult<()> {
        if let Err(errors) = form.validate() {
            return invalid(form, errors);
        }
        let user = self.users.create(UserCreate::from(form)).await?;
        debug!(id = user.id, "Created user");
        Ok(ActionResult::RedirectToIndex)
    }

    /// GET: the edit form, pre-filled with the stored user.
    #[instrument(skip(self))]
    pub async fn edit_form(&self, id: UserId) -> ControllerResult<User> {
        found(self.users.get(id).await)
    }

    /// POST: overwrite name and email of an existing user.
    ///
    /// A missing user wins over an invalid form.
    #[instrument(skip(self))]
    pub async fn edit(&self, id: UserId, form: UserForm) -> ControllerResult<()> {
        if let ActionResult::NotFound = found(self.users.get(id).await)? {
            return Ok(ActionResult::NotFound);
        }
        if let Err(errors) = form.validate() {
            return invalid(form, errors);
        }
        redirect(self.users.update(id, UserUpdate::from(form)).await)
    }

    /// GET: the delete confirmation for one user.
    #[instrument(skip(self))]
    pub async fn delete_confirm(&self, id: UserId) -> ControllerResult<User> {
        found(self.users.get(id).await)
    }

    /// POST: remove one user.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> ControllerResult<()> {
        redirect(self.users.delete(id).await)
    }

    /// GET: users whose name or email contains `query`.
    ///
    /// A missing or blank query shows no users.
    #[instrument(skip(self))]
    pub async fn search(&self, query: Option<String>) -> ControllerResult<SearchView> {
        let users = self
            .users
            .search(query.clone().unwrap_or_default())
            .await?;
        Ok(ActionResult::View(SearchView { query, users }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_actor;

    fn controller() -> UserController {
        let (actor, client) = user_actor::new();
        tokio::spawn(actor.run());
        UserController::new(client)
    }

    async fn seed(controller: &UserController, name: &str, email: &str) {
        let result = controller.create(UserForm::new(name, email)).await.unwrap();
        assert_eq!(result, ActionResult::RedirectToIndex);
    }

    #[tokio::test]
    async fn index_returns_view_with_user_list() {
        let c = controller();
        seed(&c, "Test", "test@email.com").await;

        let ActionResult::View(users) = c.index().await.unwrap() else {
            panic!("expected a view");
        };
        assert_eq!(users, vec![User::new(1, "Test", "test@email.com")]);
    }

    #[tokio::test]
    async fn details_returns_user_when_it_exists() {
        let c = controller();
        seed(&c, "User1", "user1@email.com").await;
        seed(&c, "User2", "user2@email.com").await;

        let result = c.details(2).await.unwrap();
        assert_eq!(result, ActionResult::View(User::new(2, "User2", "user2@email.com")));
    }

    #[tokio::test]
    async fn lookups_return_not_found_for_missing_ids() {
        let c = controller();
        assert_eq!(c.details(999).await.unwrap(), ActionResult::NotFound);
        assert_eq!(c.edit_form(999).await.unwrap(), ActionResult::NotFound);
        assert_eq!(c.delete_confirm(999).await.unwrap(), ActionResult::NotFound);
        assert_eq!(c.delete(999).await.unwrap(), ActionResult::NotFound);
        assert_eq!(
            c.edit(999, UserForm::new("DoesNotExist", "none@email.com"))
                .await
                .unwrap(),
            ActionResult::NotFound
        );
    }

    #[tokio::test]
    async fn create_form_is_blank() {
        let c = controller();
        assert_eq!(c.create_form(), ActionResult::View(UserForm::default()));
    }

    #[tokio::test]
    async fn invalid_create_reshows_form_and_writes_nothing() {
        let c = controller();
        let form = UserForm {
            name: Some("NoEmail".into()),
            email: None,
        };

        let result = c.create(form.clone()).await.unwrap();
        assert_eq!(
            result,
            ActionResult::InvalidForm {
                form,
                errors: vec![FieldError::new("email", "The Email field is required.")],
            }
        );
        assert_eq!(c.index().await.unwrap(), ActionResult::View(vec![]));
    }

    #[tokio::test]
    async fn edit_updates_user_and_redirects() {
        let c = controller();
        seed(&c, "OldName", "old@email.com").await;

        let result = c.edit(1, UserForm::new("NewName", "new@email.com")).await.unwrap();
        assert_eq!(result, ActionResult::RedirectToIndex);
        assert_eq!(
            c.details(1).await.unwrap(),
            ActionResult::View(User::new(1, "NewName", "new@email.com"))
        );
    }

    #[tokio::test]
    async fn invalid_edit_leaves_user_untouched() {
        let c = controller();
        seed(&c, "Keep", "keep@email.com").await;

        let result = c.edit(1, UserForm::new("", "")).await.unwrap();
        assert!(matches!(result, ActionResult::InvalidForm { ref errors, .. } if errors.len() == 2));
        assert_eq!(
            c.details(1).await.unwrap(),
            ActionResult::View(User::new(1, "Keep", "keep@email.com"))
        );
    }

    #[tokio::test]
    async fn delete_removes_user_and_redirects() {
        let c = controller();
        seed(&c, "ToDelete", "todelete@email.com").await;

        assert_eq!(c.delete(1).await.unwrap(), ActionResult::RedirectToIndex);
        assert_eq!(c.details(1).await.unwrap(), ActionResult::NotFound);
    }

    #[tokio::test]
    async fn search_returns_matches_and_echoes_query() {
        let c = controller();
        seed(&c, "Alice", "alice@email.com").await;
        seed(&c, "Bob", "bob@email.com").await;

        let result = c.search(Some("alice".into())).await.unwrap();
        assert_eq!(
            result,
            ActionResult::View(SearchView {
                query: Some("alice".into()),
                users: vec![User::new(1, "Alice", "alice@email.com")],
            })
        );
    }

    #[tokio::test]
    async fn search_without_match_or_query_is_empty() {
        let c = controller();
        seed(&c, "Alice", "alice@email.com").await;

        for query in [Some("notfound".to_string()), Some(String::new()), None] {
            let ActionResult::View(view) = c.search(query.clone()).await.unwrap() else {
                panic!("expected a view");
            };
            assert_eq!(view.query, query);
            assert!(view.users.is_empty());
        }
    }
}
