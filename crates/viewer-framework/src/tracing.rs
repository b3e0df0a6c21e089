//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by the
//! viewer binaries.
//!
//! ## What Gets Traced
//!
//! - **Aggregations**: one `debug` per issued fetch batch, one `error` per
//!   failed resource (`key`, `error` fields), a closing summary with
//!   `requested` / `fulfilled` / `rejected` counts.
//! - **Stores**: startup and shutdown, every applied mutation (`debug`,
//!   with the full mutation), every effective change (`info`), rejected
//!   mutations (`warn`).
//! - **Clients**: instrumented spans around each request.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # summaries and state changes
//! RUST_LOG=debug cargo run     # per-key fetches and full mutations
//! ```
//!
//! A failed edition shows up as:
//!
//! ```text
//! ERROR Fetch failed key=editie-2 error=HTTP 404 Not Found
//!  WARN Aggregation settled with failures requested=5 fulfilled=4 rejected=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
