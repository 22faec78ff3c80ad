//! A webhook relay that forwards newsletter signups to a Listmonk instance.
//!
//! One inbound `POST` triggers two sequential Listmonk API calls: subscriber
//! creation on the configured list, then a transactional email carrying the
//! lead-magnet download link.

pub mod app;
pub mod config;
mod error;
pub mod listmonk;
pub mod web;

// re-export
pub use app::{serve, App, AppState};
pub use error::{Error, Result};
pub use listmonk::ListmonkClient;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Compact, timestamp-free console logging for local development and tests.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
