use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Result;
use magnetomat::{
    config::{AppConfig, ListmonkEnv, NetConfig},
    App,
};
use secrecy::SecretString;
use wiremock::MockServer;

pub const TEST_LIST_ID: i64 = 7;
pub const TEST_TEMPLATE_ID: i64 = 3;
pub const TEST_API_USER: &str = "listmonk-api";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_FROM_EMAIL: &str = "Newsletter <newsletter@example.com>";
pub const TEST_DOWNLOAD_URL: &str = "https://files.example.com/trend-report.pdf";
pub const TEST_MAGNET_ID: &str = "trend-report";

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    /// Mock Listmonk instance; every outbound call this app makes lands here.
    pub listmonk_server: MockServer,
}

impl TestApp {
    /// Spawns the app with a fully-populated configuration pointing at a
    /// fresh mock Listmonk server.
    pub async fn spawn() -> Result<TestApp> {
        let listmonk_server = MockServer::start().await;
        let listmonk_env = test_listmonk_env(&listmonk_server.uri());
        TestApp::spawn_with_env(listmonk_server, listmonk_env).await
    }

    /// Spawns the app with a caller-supplied environment snapshot, so tests
    /// can punch holes in the configuration.
    pub async fn spawn_with_env(
        listmonk_server: MockServer,
        listmonk_env: ListmonkEnv,
    ) -> Result<TestApp> {
        // Binding port 0 triggers an OS scan for an available port.
        let config = AppConfig {
            net: NetConfig {
                host: Ipv4Addr::LOCALHOST,
                app_port: 0,
            },
            listmonk: listmonk_env,
        };

        let app = App::build_from_config(config).await?;
        let addr = app.listener.local_addr()?;
        tokio::spawn(magnetomat::serve(app));

        Ok(TestApp {
            addr,
            http_client: reqwest::Client::new(),
            listmonk_server,
        })
    }

    pub async fn post_signup(&self, body: &serde_json::Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/", self.addr))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }
}

pub fn test_listmonk_env(base_url: &str) -> ListmonkEnv {
    ListmonkEnv {
        base_url: Some(base_url.to_string()),
        list_id: Some(TEST_LIST_ID),
        api_user: Some(TEST_API_USER.to_string()),
        api_key: Some(SecretString::from(TEST_API_KEY.to_string())),
        template_id: Some(TEST_TEMPLATE_ID),
        from_email: Some(TEST_FROM_EMAIL.to_string()),
        download_url: Some(TEST_DOWNLOAD_URL.to_string()),
        magnet_id: Some(TEST_MAGNET_ID.to_string()),
        ..Default::default()
    }
}
