//! Environment-sourced configuration.
//!
//! The environment is read exactly once at process start into an [`AppConfig`]
//! that gets passed explicitly into the app. Presence of the Listmonk
//! variables is validated per request on that snapshot so a misconfigured
//! deployment reports every missing variable at once instead of failing on
//! the first one.

use std::net::Ipv4Addr;
use std::time::Duration;

use secrecy::SecretString;

pub const ENV_BASE_URL: &str = "LISTMONK_BASE_URL";
pub const ENV_LIST_ID: &str = "LIST_ID";
pub const ENV_API_USER: &str = "LISTMONK_API_USER";
pub const ENV_API_KEY: &str = "LISTMONK_API_KEY";
pub const ENV_TEMPLATE_ID: &str = "TEMPLATE_ID";
pub const ENV_FROM_EMAIL: &str = "FROM_EMAIL";
pub const ENV_DOWNLOAD_URL: &str = "DOWNLOAD_URL";
pub const ENV_MAGNET_ID: &str = "MAGNET_ID";
pub const ENV_TIMEOUT_MILLIS: &str = "LISTMONK_TIMEOUT_MILLIS";

pub const ENV_APP_HOST: &str = "APP_HOST";
pub const ENV_APP_PORT: &str = "APP_PORT";

const DEFAULT_TIMEOUT_MILLIS: u64 = 10_000;
const DEFAULT_APP_PORT: u16 = 8080;

// ###################################
// ->   RESULT & ERROR
// ###################################

pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),
    #[error("failed to parse environment variable '{name}': {reason}")]
    InvalidEnv { name: &'static str, reason: String },
}

// ###################################
// ->   STRUCTS
// ###################################

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub net: NetConfig,
    pub listmonk: ListmonkEnv,
}

#[derive(Debug, Clone)]
pub struct NetConfig {
    pub host: Ipv4Addr,
    pub app_port: u16,
}

/// Raw snapshot of the Listmonk deployment environment.
///
/// Every field is optional here; [`ListmonkEnv::validate`] decides whether a
/// request can be served. An empty variable counts as absent, and so does an
/// unparseable `LIST_ID`/`TEMPLATE_ID`.
#[derive(Debug, Clone)]
pub struct ListmonkEnv {
    pub base_url: Option<String>,
    pub list_id: Option<i64>,
    pub api_user: Option<String>,
    pub api_key: Option<SecretString>,
    pub template_id: Option<i64>,
    pub from_email: Option<String>,
    pub download_url: Option<String>,
    pub magnet_id: Option<String>,
    pub timeout_millis: u64,
}

/// Listmonk settings with all required values present, produced by
/// [`ListmonkEnv::validate`] for a single request.
#[derive(Debug, Clone)]
pub struct ListmonkConfig {
    pub base_url: String,
    pub list_id: i64,
    pub api_user: String,
    pub api_key: SecretString,
    pub template_id: i64,
    pub from_email: String,
    pub download_url: String,
    pub magnet_id: Option<String>,
}

// ###################################
// ->   IMPLs
// ###################################

impl AppConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Ok(AppConfig {
            net: NetConfig::from_env()?,
            listmonk: ListmonkEnv::from_env(),
        })
    }
}

impl NetConfig {
    pub fn from_env() -> ConfigResult<Self> {
        let host = match env_opt(ENV_APP_HOST) {
            Some(raw) => raw.parse().map_err(|er| ConfigError::InvalidEnv {
                name: ENV_APP_HOST,
                reason: format!("{er}"),
            })?,
            None => Ipv4Addr::UNSPECIFIED,
        };
        let app_port = match env_opt(ENV_APP_PORT) {
            Some(raw) => raw.parse().map_err(|er| ConfigError::InvalidEnv {
                name: ENV_APP_PORT,
                reason: format!("{er}"),
            })?,
            None => DEFAULT_APP_PORT,
        };

        Ok(NetConfig { host, app_port })
    }
}

impl ListmonkEnv {
    pub fn from_env() -> Self {
        ListmonkEnv {
            base_url: env_opt(ENV_BASE_URL),
            list_id: env_opt(ENV_LIST_ID).and_then(|v| v.parse().ok()),
            api_user: env_opt(ENV_API_USER),
            api_key: env_opt(ENV_API_KEY).map(SecretString::from),
            template_id: env_opt(ENV_TEMPLATE_ID).and_then(|v| v.parse().ok()),
            from_email: env_opt(ENV_FROM_EMAIL),
            download_url: env_opt(ENV_DOWNLOAD_URL),
            magnet_id: env_opt(ENV_MAGNET_ID),
            timeout_millis: env_opt(ENV_TIMEOUT_MILLIS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MILLIS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }

    /// Checks that every required value is present, collecting the names of
    /// ALL missing variables rather than stopping at the first one.
    /// `MAGNET_ID` is the only optional value.
    pub fn validate(&self) -> ConfigResult<ListmonkConfig> {
        let mut missing = Vec::new();

        if self.base_url.is_none() {
            missing.push(ENV_BASE_URL);
        }
        if self.list_id.is_none() {
            missing.push(ENV_LIST_ID);
        }
        if self.api_user.is_none() {
            missing.push(ENV_API_USER);
        }
        if self.api_key.is_none() {
            missing.push(ENV_API_KEY);
        }
        if self.template_id.is_none() {
            missing.push(ENV_TEMPLATE_ID);
        }
        if self.from_email.is_none() {
            missing.push(ENV_FROM_EMAIL);
        }
        if self.download_url.is_none() {
            missing.push(ENV_DOWNLOAD_URL);
        }

        let (
            Some(base_url),
            Some(list_id),
            Some(api_user),
            Some(api_key),
            Some(template_id),
            Some(from_email),
            Some(download_url),
        ) = (
            self.base_url.clone(),
            self.list_id,
            self.api_user.clone(),
            self.api_key.clone(),
            self.template_id,
            self.from_email.clone(),
            self.download_url.clone(),
        )
        else {
            return Err(ConfigError::MissingEnv(missing));
        };

        Ok(ListmonkConfig {
            base_url,
            list_id,
            api_user,
            api_key,
            template_id,
            from_email,
            download_url,
            magnet_id: self.magnet_id.clone(),
        })
    }
}

impl Default for ListmonkEnv {
    fn default() -> Self {
        ListmonkEnv {
            base_url: None,
            list_id: None,
            api_user: None,
            api_key: None,
            template_id: None,
            from_email: None,
            download_url: None,
            magnet_id: None,
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
        }
    }
}

/// Reads an environment variable, treating an empty value as absent.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

// ###################################
// ->   TESTS
// ###################################
