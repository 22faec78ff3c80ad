pub mod data;
mod error;
pub mod routes;

pub use error::{Error, WebResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
