use crate::config::{HttpConfig, OctopusConfig};
use crate::error::FetchError;
use crate::model::{ConsumptionPage, PageSource};
use crate::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, SecretString};

/// Authenticated client for the Octopus Energy REST API.
pub struct Client {
    http_client: HttpClient,
    config: OctopusConfig,
    api_key: SecretString,
    retry: RetryPolicy,
}

impl Client {
    pub fn new(
        config: OctopusConfig,
        http_config: &HttpConfig,
        api_key: SecretString,
    ) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(http_config.request_timeout())
            .build()?;
        Ok(Self {
            http_client,
            config,
            api_key,
            retry: RetryPolicy {
                max_retries: http_config.fetch_max_retries,
                base_delay: http_config.retry_base_delay(),
            },
        })
    }

    /// First page of the gas consumption listing for one meter.
    pub fn consumption_url(&self, mprn: &str, serial_number: &str) -> String {
        format!(
            "{}/v1/gas-meter-points/{}/meters/{}/consumption/?group_by={}",
            self.config.base_url.trim_end_matches('/'),
            mprn,
            serial_number,
            self.config.group_by
        )
    }

    pub fn max_pages(&self) -> usize {
        self.config.max_pages
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(url)
            .basic_auth(self.api_key.expose_secret(), Some(""))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(FetchError::status(status, body))
        }
    }
}

#[async_trait]
impl PageSource for Client {
    async fn fetch_page(&self, url: &str) -> Result<ConsumptionPage, FetchError> {
        let body = self
            .retry
            .retry_async(|| self.get(url), FetchError::is_transient)
            .await?;
        tracing::debug!(url, body = %body, "Fetched consumption page");
        Ok(serde_json::from_str(&body)?)
    }
}
