//! Configuration utilities for testing.
//!
//! Builders default to local, non-routable endpoints so a test only has to
//! override the URLs its mock server answers on.

use crate::config::{HttpConfig, OctopusConfig, TadoConfig};

/// Builder for creating test Octopus Energy configurations.
#[derive(Debug)]
pub struct TestOctopusConfigBuilder {
    base_url: String,
    group_by: String,
    max_pages: usize,
}

impl TestOctopusConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            base_url: "http://octopus.test.local".to_string(),
            group_by: "quarter".to_string(),
            max_pages: 10_000,
        }
    }

    /// Sets the API root for the test configuration.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the pagination guard for the test configuration.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Builds the Octopus Energy configuration.
    pub fn build(self) -> OctopusConfig {
        OctopusConfig {
            base_url: self.base_url,
            group_by: self.group_by,
            max_pages: self.max_pages,
        }
    }
}

/// Builder for creating test tado° configurations.
#[derive(Debug)]
pub struct TestTadoConfigBuilder {
    auth_url: String,
    api_url: String,
    eiq_url: String,
}

impl TestTadoConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            auth_url: "http://auth.test.local".to_string(),
            api_url: "http://api.test.local".to_string(),
            eiq_url: "http://eiq.test.local".to_string(),
        }
    }

    /// Points every tado° endpoint at the same server.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.auth_url = url.clone();
        self.api_url = url.clone();
        self.eiq_url = url;
        self
    }

    /// Builds the tado° configuration.
    pub fn build(self) -> TadoConfig {
        TadoConfig {
            auth_url: self.auth_url,
            api_url: self.api_url,
            eiq_url: self.eiq_url,
            client_id: "test-client".to_string(),
            client_secret: "test-client-secret".to_string(),
        }
    }
}

/// HTTP settings for tests: short timeout, no retries.
pub fn test_http_config() -> HttpConfig {
    HttpConfig {
        request_timeout_sec: 5,
        fetch_max_retries: 0,
        retry_base_delay_ms: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octopus_config_builder() {
        let config = TestOctopusConfigBuilder::new()
            .with_base_url("http://custom.local")
            .with_max_pages(2)
            .build();

        assert_eq!(config.base_url, "http://custom.local");
        assert_eq!(config.group_by, "quarter");
        assert_eq!(config.max_pages, 2);
    }

    #[test]
    fn test_tado_config_builder() {
        let config = TestTadoConfigBuilder::new()
            .with_server_url("http://mock.local")
            .build();

        assert_eq!(config.auth_url, "http://mock.local");
        assert_eq!(config.api_url, "http://mock.local");
        assert_eq!(config.eiq_url, "http://mock.local");
    }
}
