//! # User Directory
//!
//! > **An in-memory user directory served by a resource actor.**
//!
//! Users live in an ordered [`Directory`](framework::Directory) owned by a single Tokio task.
//! Everything else talks to that task through a cloneable client, so every list, lookup,
//! write and search is applied one at a time, in arrival order.
//!
//! ## 🏗️ Behaviour at a Glance
//!
//! - Ids are assigned by the directory: one more than the highest id present, or `1`
//!   when empty. Deleting the highest user lets its id come back.
//! - Lists and search results keep insertion order.
//! - Search is a case-insensitive substring match on name or email. A blank query
//!   matches nothing.
//! - Directory updates overwrite name and email verbatim. Presence checks happen on the
//!   submitted [`UserForm`](model::UserForm), before any request reaches the actor.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor<T>`](framework::ResourceActor) and its
//! [`Directory<T>`](framework::Directory). Record types plug in by implementing
//! [`ActorEntity`](framework::ActorEntity).
//!
//! ### 2. The Domain ([`model`], [`user_actor`])
//! [`User`](model::User), its create/update payloads and form, and the
//! `ActorEntity` rules that give users their id and search semantics.
//!
//! ### 3. The Interface ([`clients`], [`controller`], [`http`])
//! [`UserClient`](clients::UserClient) hides message passing behind typed calls.
//! [`UserController`](controller::UserController) turns those calls into page outcomes,
//! and [`http::router`] serves them with axum.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`UserSystem`](lifecycle::UserSystem) starts and stops the actor;
//! [`setup_tracing`](lifecycle::tracing::setup_tracing) installs logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080
//! curl -X POST localhost:8080/user/create \
//!     -H 'content-type: application/json' \
//!     -d '{"name":"Alice","email":"alice@example.com"}'
//! curl 'localhost:8080/user/search?query=ali'
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for driving a client without spawning the actor.

pub mod clients;
pub mod config;
pub mod controller;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
