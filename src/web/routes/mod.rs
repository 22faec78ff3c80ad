//! Contains all the routes that this application can handle.

mod signup;

pub use signup::signup;

use axum::{http::StatusCode, routing::get, Router};

use crate::AppState;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server.
///
/// The signup handler is registered as the fallback so it serves every path;
/// it owns the method check and rejects anything that isn't a `POST`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .fallback(signup)
        .with_state(app_state)
}
