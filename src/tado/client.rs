use crate::config::{HttpConfig, TadoConfig};
use crate::error::SubmissionError;
use crate::model::{AccountCredentials, MeterReading, ReadingSink, SubmissionAck};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, SecretString};
use serde_derive::Deserialize;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct HomeRef {
    id: u64,
}

#[derive(Deserialize)]
struct Me {
    #[serde(rename = "homeId", default)]
    home_id: Option<u64>,
    #[serde(default)]
    homes: Vec<HomeRef>,
}

impl Me {
    fn home_id(&self) -> Option<u64> {
        self.home_id.or_else(|| self.homes.first().map(|home| home.id))
    }
}

/// Client for the tado° account and Energy IQ APIs.
pub struct Client {
    http_client: HttpClient,
    config: TadoConfig,
}

impl Client {
    pub fn new(config: TadoConfig, http_config: &HttpConfig) -> Result<Self, SubmissionError> {
        let http_client = HttpClient::builder()
            .timeout(http_config.request_timeout())
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    async fn access_token(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<SecretString, SubmissionError> {
        let url = format!("{}/oauth/token", self.config.auth_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("grant_type", "password"),
                ("scope", "home.user"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.expose_secret()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(SubmissionError::auth_failed(status, body));
        }
        let token: TokenResponse = response.json().await?;
        Ok(SecretString::from(token.access_token))
    }

    async fn home_id(&self, token: &SecretString) -> Result<u64, SubmissionError> {
        let url = format!("{}/api/v2/me", self.config.api_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(SubmissionError::status("account lookup", status, body));
        }
        let me: Me = response.json().await?;
        me.home_id().ok_or(SubmissionError::NoHome)
    }

    async fn post_reading(
        &self,
        token: &SecretString,
        home_id: u64,
        reading: &MeterReading,
    ) -> Result<SubmissionAck, SubmissionError> {
        let url = format!(
            "{}/api/homes/{}/meterReadings",
            self.config.eiq_url.trim_end_matches('/'),
            home_id
        );
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(reading)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SubmissionError::status("meter reading", status, body));
        }
        let response = if body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
        };
        Ok(SubmissionAck { response })
    }
}

#[async_trait]
impl ReadingSink for Client {
    async fn submit_reading(
        &self,
        credentials: &AccountCredentials,
        reading: &MeterReading,
    ) -> Result<SubmissionAck, SubmissionError> {
        let token = self.access_token(credentials).await?;
        let home_id = self.home_id(&token).await?;
        tracing::debug!(home_id, "Resolved tado home");
        self.post_reading(&token, home_id, reading).await
    }
}
