use reqwest::{header, Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::ListmonkConfig;
use crate::web::data::ValidSignup;

const SUBSCRIBERS_PATH: &str = "/api/subscribers";
const TX_PATH: &str = "/api/tx";

/// Client for the two Listmonk API endpoints this service talks to.
///
/// Cheap to construct per request: the underlying `reqwest::Client` is shared
/// and reference-counted, only the base URL and credentials are cloned out of
/// the validated config.
#[derive(Debug)]
pub struct ListmonkClient {
    pub http_client: Client,
    base_url: String,
    api_user: String,
    api_key: SecretString,
}

impl ListmonkClient {
    pub fn from_config(http_client: Client, config: &ListmonkConfig) -> Result<Self> {
        // Request URLs are built by concatenation so a base path prefix
        // survives; parse up front to reject a malformed base early.
        Url::parse(&config.base_url).map_err(|er| Error::UrlParsing(er.to_string()))?;

        Ok(ListmonkClient {
            http_client,
            base_url: config.base_url.clone(),
            api_user: config.api_user.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Creates (or re-attaches) a subscriber on the given list, tagging it
    /// with the lead magnet it signed up for.
    pub async fn create_subscriber(
        &self,
        signup: &ValidSignup,
        list_id: i64,
        lead_magnet: Option<&str>,
    ) -> Result<()> {
        let payload = NewSubscriber {
            email: signup.email.as_ref(),
            name: signup.name.as_ref(),
            lists: [list_id],
            status: "enabled",
            attribs: SubscriberAttribs { lead_magnet },
        };

        let resp = self.post(SUBSCRIBERS_PATH, &payload).await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            return Err(Error::SubscriberRejected { status, body });
        }

        Ok(())
    }

    /// Triggers the transactional email that delivers the download link.
    pub async fn send_lead_magnet(
        &self,
        signup: &ValidSignup,
        template_id: i64,
        from_email: &str,
        download_url: &str,
    ) -> Result<()> {
        let payload = TxEmail {
            subscriber_email: signup.email.as_ref(),
            template_id,
            from_email,
            data: TxData {
                name: signup.name.as_ref(),
                download_url,
            },
        };

        let resp = self.post(TX_PATH, &payload).await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            return Err(Error::EmailRejected { status, body });
        }

        Ok(())
    }

    /// POSTs a JSON payload to `{base_url}{path}` with the
    /// `Authorization: token {user}:{key}` header Listmonk expects.
    /// Returns the raw response; callers decide what a non-2xx status means.
    async fn post<B>(&self, path: &str, body: &B) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|er| Error::UrlParsing(er.to_string()))?;

        let resp = self
            .http_client
            .post(url)
            .header(
                header::AUTHORIZATION,
                format!("token {}:{}", self.api_user, self.api_key.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        Ok(resp)
    }
}

#[derive(Serialize)]
pub struct NewSubscriber<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub lists: [i64; 1],
    pub status: &'a str,
    pub attribs: SubscriberAttribs<'a>,
}

#[derive(Serialize)]
pub struct SubscriberAttribs<'a> {
    // Dropped from the JSON entirely when no magnet id is configured.
    #[serde(rename = "leadMagnet", skip_serializing_if = "Option::is_none")]
    pub lead_magnet: Option<&'a str>,
}

#[derive(Serialize)]
pub struct TxEmail<'a> {
    pub subscriber_email: &'a str,
    pub template_id: i64,
    pub from_email: &'a str,
    pub data: TxData<'a>,
}

#[derive(Serialize)]
pub struct TxData<'a> {
    pub name: &'a str,
    #[serde(rename = "downloadUrl")]
    pub download_url: &'a str,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to add subscriber: {body}")]
    SubscriberRejected { status: StatusCode, body: String },
    #[error("Failed to send email: {body}")]
    EmailRejected { status: StatusCode, body: String },
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
