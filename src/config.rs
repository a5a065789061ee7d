use crate::error::{ConfigError, Result as AppResult};
use serde_derive::Deserialize;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

fn default_octopus_base_url() -> String {
    "https://api.octopus.energy".to_string()
}

fn default_group_by() -> String {
    "quarter".to_string()
}

fn default_max_pages() -> usize {
    10_000
}

#[derive(Deserialize, Debug, Clone)]
pub struct OctopusConfig {
    #[serde(default = "default_octopus_base_url")]
    pub base_url: String,
    // value of the `group_by` query parameter
    #[serde(default = "default_group_by")]
    pub group_by: String,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

pub(crate) fn load_octopus_config() -> Result<OctopusConfig, ConfigError> {
    let config = envy::prefixed("OCTOPUS_")
        .from_env::<OctopusConfig>()
        .map_err(ConfigError::env_parse)?;
    if config.max_pages == 0 {
        return Err(ConfigError::invalid("OCTOPUS_MAX_PAGES", "must be at least 1"));
    }
    Ok(config)
}

fn default_tado_auth_url() -> String {
    "https://auth.tado.com".to_string()
}

fn default_tado_api_url() -> String {
    "https://my.tado.com".to_string()
}

fn default_tado_eiq_url() -> String {
    "https://energy-insights.tado.com".to_string()
}

fn default_tado_client_id() -> String {
    "tado-web-app".to_string()
}

// Public client secret of the tado° web app.
fn default_tado_client_secret() -> String {
    "wZaRN7rpjn3FoNyF5IFuxg9uMzYJcvOoQ8QWiIqS3hfk6gLhVlG57j5YNoZL2Rtc".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct TadoConfig {
    #[serde(default = "default_tado_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_tado_api_url")]
    pub api_url: String,
    #[serde(default = "default_tado_eiq_url")]
    pub eiq_url: String,
    #[serde(default = "default_tado_client_id")]
    pub client_id: String,
    #[serde(default = "default_tado_client_secret")]
    pub client_secret: String,
}

pub(crate) fn load_tado_config() -> Result<TadoConfig, ConfigError> {
    envy::prefixed("TADO_")
        .from_env::<TadoConfig>()
        .map_err(ConfigError::env_parse)
}

fn default_request_timeout_sec() -> u64 {
    30
}

fn default_fetch_max_retries() -> u32 {
    0
}

fn default_retry_base_delay_ms() -> u64 {
    500
}

#[derive(Deserialize, Debug, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_request_timeout_sec")]
    pub request_timeout_sec: u64,
    // retries per consumption page; submissions are never retried
    #[serde(default = "default_fetch_max_retries")]
    pub fetch_max_retries: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_sec)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }
}

pub(crate) fn load_http_config() -> Result<HttpConfig, ConfigError> {
    let config = envy::prefixed("SYNC_")
        .from_env::<HttpConfig>()
        .map_err(ConfigError::env_parse)?;
    if config.request_timeout_sec == 0 {
        return Err(ConfigError::invalid(
            "SYNC_REQUEST_TIMEOUT_SEC",
            "must be at least 1",
        ));
    }
    Ok(config)
}

/// Everything the Octopus Energy and tado° clients are built from.
pub(crate) struct ClientConfigs {
    pub octopus: OctopusConfig,
    pub tado: TadoConfig,
    pub http: HttpConfig,
}

pub(crate) fn load_client_configs() -> AppResult<ClientConfigs> {
    Ok(ClientConfigs {
        octopus: load_octopus_config()?,
        tado: load_tado_config()?,
        http: load_http_config()?,
    })
}
