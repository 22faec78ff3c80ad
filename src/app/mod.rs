pub mod serve;

// re-export
pub use serve::serve;

use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{AppConfig, ListmonkEnv},
    listmonk, Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}

impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        // One shared HTTP client for the process; Listmonk credentials get
        // attached per request from the validated config.
        let http_client = reqwest::Client::builder()
            .timeout(config.listmonk.timeout())
            .build()
            .map_err(listmonk::Error::from)?;

        let app_state = AppState::new(http_client, config.listmonk);

        let addr = SocketAddr::from((config.net.host, config.net.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub http_client: reqwest::Client,
    pub listmonk_env: ListmonkEnv,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`.
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(http_client: reqwest::Client, listmonk_env: ListmonkEnv) -> Self {
        AppState(Arc::new(InternalState {
            http_client,
            listmonk_env,
        }))
    }
}
