use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode},
    Json,
};
use tracing::info;

use crate::{
    web::{
        data::{DataParsingError, DeserSignup, ValidSignup},
        Error, WebResult,
    },
    AppState, ListmonkClient,
};

/// Relays a newsletter signup to Listmonk: creates the subscriber, then
/// triggers the transactional email carrying the download link.
///
/// Checks run in a fixed order - method, configuration presence, payload -
/// and nothing goes out on the wire until all of them pass.
#[tracing::instrument(name = "Handling newsletter signup", skip_all)]
pub async fn signup(
    State(app_state): State<AppState>,
    method: Method,
    payload: Result<Json<DeserSignup>, JsonRejection>,
) -> WebResult<(StatusCode, &'static str)> {
    if method != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let config = app_state.listmonk_env.validate()?;

    let Json(signup) = payload.map_err(DataParsingError::from)?;
    let signup: ValidSignup = signup.try_into()?;

    let client = ListmonkClient::from_config(app_state.http_client.clone(), &config)?;

    // The email depends on subscriber existence, so the calls stay sequential.
    client
        .create_subscriber(&signup, config.list_id, config.magnet_id.as_deref())
        .await?;
    info!("Subscriber successfully added to list {}.", config.list_id);

    client
        .send_lead_magnet(
            &signup,
            config.template_id,
            &config.from_email,
            &config.download_url,
        )
        .await?;
    info!("Lead magnet email sent.");

    Ok((StatusCode::OK, "Subscription successful, email sent!"))
}
