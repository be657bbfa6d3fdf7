//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter for the whole
//! process. Levels come from `RUST_LOG` and default to `info`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final record count
//! - **Directory writes**: `Created`, `Updated`, `Deleted` with the record `id`
//! - **Misses**: `Not found` at `warn`
//! - **Rejected forms**: `Form rejected` at `warn` with the field errors
//! - **HTTP**: one span per request from `tower_http::trace::TraceLayer`
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! cargo run
//!
//! # Request payloads and read operations
//! RUST_LOG=debug cargo run
//!
//! # Only the actor
//! RUST_LOG=user_directory::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a create through the HTTP layer reads:
//!
//! ```text
//! DEBUG request{method=POST uri=/user/create version=HTTP/1.1}: started processing request
//! DEBUG request{method=POST uri=/user/create version=HTTP/1.1}:create{form=UserForm { name: Some("Ann"), email: Some("ann@x.io") }}:create{params=UserCreate { name: Some("Ann"), email: Some("ann@x.io") }}: Sending request
//! DEBUG Create entity_type="User" params=UserCreate { name: Some("Ann"), email: Some("ann@x.io") }
//!  INFO Created entity_type="User" id=1 size=1
//! DEBUG request{method=POST uri=/user/create version=HTTP/1.1}: finished processing request latency=0 ms status=303
//! ```
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the context
        .compact()
        .init();
}
