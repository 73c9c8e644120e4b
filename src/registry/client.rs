//! HTTP client for the company registry name-search API

use std::time::Instant;

use async_trait::async_trait;
use rand::RngCore;
use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;

use super::{RegistrySearch, SyntheticRegistry};
use crate::error::{CompanyForgeError, Result};
use crate::name::similarity;
use crate::types::{FallbackConfig, RegistrationStatus, RegistryConfig, RegistryMatch};

/// Registry search client with a synthetic fallback.
///
/// Any failure talking to the API (timeout, refused connection, non-2xx,
/// unexpected payload) is logged and answered from [`SyntheticRegistry`];
/// callers never see a network error.
pub struct RegistrySearchClient {
    config: RegistryConfig,
    client: Client,
    fallback: SyntheticRegistry,
}

impl RegistrySearchClient {
    /// Create a new client for the configured endpoint
    pub fn new(config: RegistryConfig, fallback: FallbackConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("company-forge/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create configured HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self {
            config,
            client,
            fallback: SyntheticRegistry::new(fallback),
        }
    }

    /// Get client configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn search_url(&self) -> String {
        format!("{}/company/search", self.config.base_url)
    }

    /// Query the live API without any fallback
    pub async fn fetch(&self, term: &str, limit: usize) -> Result<Vec<RegistryMatch>> {
        let url = self.search_url();
        let limit = limit.to_string();
        let timeout_secs = self.config.timeout.as_secs();

        let request = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", self.config.api_key.as_str())
            .header("x-api-secret-key", self.config.api_secret.as_str())
            .query(&[("name", term), ("limit", limit.as_str())]);

        let response = timeout(self.config.timeout, request.send())
            .await
            .map_err(|_| CompanyForgeError::timeout("Registry search", timeout_secs))?
            .map_err(|e| {
                if e.is_timeout() {
                    CompanyForgeError::timeout("Registry search", timeout_secs)
                } else {
                    CompanyForgeError::network(e.to_string(), None, Some(url.clone()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompanyForgeError::network(
                format!("Registry search failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let text = response.text().await.map_err(|e| {
            CompanyForgeError::network(e.to_string(), None, Some(url.clone()))
        })?;

        parse_search_response(term, &text)
    }
}

#[async_trait]
impl RegistrySearch for RegistrySearchClient {
    async fn search(
        &self,
        term: &str,
        limit: usize,
        rng: &mut (dyn RngCore + Send),
    ) -> Result<Vec<RegistryMatch>> {
        let start_time = Instant::now();

        match self.fetch(term, limit).await {
            Ok(matches) => {
                tracing::debug!(
                    term = %term,
                    source = "api",
                    found = %matches.len(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Registry search completed"
                );
                Ok(matches)
            }
            Err(e) => {
                let matches = self.fallback.generate(term, rng);
                tracing::warn!(
                    term = %term,
                    source = "fallback",
                    error = %e,
                    found = %matches.len(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Registry search failed, using synthetic conflicts"
                );
                Ok(matches)
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "api"
    }
}

/// Turn a search API body into matches scored against `term`.
fn parse_search_response(term: &str, body: &str) -> Result<Vec<RegistryMatch>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| CompanyForgeError::parse(e.to_string(), Some(body.to_string())))?;

    if !response.success {
        return Err(CompanyForgeError::registry(term, "API reported an unsuccessful search"));
    }

    let records = response
        .data
        .ok_or_else(|| CompanyForgeError::parse("Missing data array", Some(body.to_string())))?;

    Ok(records
        .into_iter()
        .map(|record| RegistryMatch {
            similarity: similarity(term, &record.company_name),
            registration_status: RegistrationStatus::from(record.status.as_str()),
            registration_id: record.cin,
            registered_name: record.company_name,
        })
        .collect())
}

/// Search API response structures
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    success: bool,
    data: Option<Vec<CompanyRecord>>,
}

#[derive(Debug, Deserialize)]
struct CompanyRecord {
    company_name: String,
    #[serde(default)]
    cin: String,
    #[serde(default)]
    status: String,
}
