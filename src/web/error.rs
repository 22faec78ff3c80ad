use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;

use super::data::DataParsingError;
use crate::{config::ConfigError, listmonk};

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("invalid request method")]
    MethodNotAllowed,

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
    #[error("listmonk client error: {0}")]
    Listmonk(#[from] listmonk::Error),
}

impl Error {
    /// Central mapping from error kind to HTTP status and plain-text body.
    pub fn status_and_body(&self) -> (StatusCode, String) {
        match self {
            Error::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Invalid request method".to_string(),
            ),
            Error::Config(ConfigError::MissingEnv(names)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Missing environment variables: {}", names.join(", ")),
            ),
            Error::DataParsing(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid request: email and name are required".to_string(),
            ),
            Error::Config(er) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {er}"),
            ),
            Error::Listmonk(er) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {er}"),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        tracing::error!("{:<12} - {} {} - {self:?}", "INTO_RES", self.as_ref(), status);

        (status, body).into_response()
    }
}
