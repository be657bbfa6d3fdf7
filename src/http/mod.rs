//! # HTTP Surface
//!
//! Binds the [`UserController`] actions to axum routes. Paths follow the
//! `/user/<action>/<id>` shape, one prefix per action:
//!
//! | Route | Action |
//! |-------|--------|
//! | `GET /user` | index |
//! | `GET /user/details/:id` | details |
//! | `GET /user/create`, `POST /user/create` | create form / submit |
//! | `GET /user/edit/:id`, `POST /user/edit/:id` | edit form / submit |
//! | `GET /user/delete/:id`, `POST /user/delete/:id` | delete confirm / submit |
//! | `GET /user/search?query=` | search |
//! | `GET /healthz` | liveness |
//!
//! Views render as JSON with `200`, a missing record as `404`, a successful write as a
//! `303` redirect to `/user`, and a rejected form as `422` carrying the form and its errors.

use crate::clients::UserClient;
use crate::controller::{ActionResult, ControllerResult, SearchView, UserController};
use crate::model::{FieldError, User, UserForm, UserId};
use crate::user_actor::UserError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

/// Where successful writes send the client.
pub const INDEX_PATH: &str = "/user";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    controller: UserController,
}

/// Builds the application router around a user actor client.
pub fn router(users: UserClient) -> Router {
    let state = AppState {
        controller: UserController::new(users),
    };

    Router::new()
        .route(INDEX_PATH, get(index))
        .route("/user/details/:id", get(details))
        .route("/user/create", get(create_form).post(create))
        .route("/user/edit/:id", get(edit_form).post(edit))
        .route("/user/delete/:id", get(delete_confirm).post(delete))
        .route("/user/search", get(search))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct InvalidFormBody {
    form: UserForm,
    errors: Vec<FieldError>,
}

impl<M: Serialize> IntoResponse for ActionResult<M> {
    fn into_response(self) -> Response {
        match self {
            ActionResult::View(model) => Json(model).into_response(),
            ActionResult::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "record not found".to_string(),
                }),
            )
                .into_response(),
            ActionResult::RedirectToIndex => Redirect::to(INDEX_PATH).into_response(),
            ActionResult::InvalidForm { form, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(InvalidFormBody { form, errors }),
            )
                .into_response(),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Controller actions turn misses into `ActionResult::NotFound`; this only
            // answers for a miss propagated with `?`.
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::IdsExhausted(_) | UserError::ActorCommunicationError(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

async fn index(State(state): State<AppState>) -> ControllerResult<Vec<User>> {
    state.controller.index().await
}

async fn details(State(state): State<AppState>, Path(id): Path<UserId>) -> ControllerResult<User> {
    state.controller.details(id).await
}

async fn create_form(State(state): State<AppState>) -> ActionResult<UserForm> {
    state.controller.create_form()
}

async fn create(State(state): State<AppState>, Json(form): Json<UserForm>) -> ControllerResult<()> {
    state.controller.create(form).await
}

async fn edit_form(State(state): State<AppState>, Path(id): Path<UserId>) -> ControllerResult<User> {
    state.controller.edit_form(id).await
}

async fn edit(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(form): Json<UserForm>,
) -> ControllerResult<()> {
    state.controller.edit(id, form).await
}

async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> ControllerResult<User> {
    state.controller.delete_confirm(id).await
}

async fn delete(State(state): State<AppState>, Path(id): Path<UserId>) -> ControllerResult<()> {
    state.controller.delete(id).await
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: Option<String>,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ControllerResult<SearchView> {
    state.controller.search(params.query).await
}

#[derive(Serialize)]
struct Healthz {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> Json<Healthz> {
    Json(Healthz {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
