//! Core types and structures for company-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config_error;
use crate::error::Result;

/// Registration status of a company as reported by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Active,
    Inactive,
    StruckOff,
    #[default]
    Unknown,
}

impl From<&str> for RegistrationStatus {
    fn from(s: &str) -> Self {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "active" => Self::Active,
            "inactive" | "dormant" => Self::Inactive,
            "struckoff" | "strikeoff" | "struck" => Self::StruckOff,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationStatus::Active => write!(f, "Active"),
            RegistrationStatus::Inactive => write!(f, "Inactive"),
            RegistrationStatus::StruckOff => write!(f, "Struck Off"),
            RegistrationStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One company record returned by a registry search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryMatch {
    pub registered_name: String,
    pub registration_id: String,
    pub registration_status: RegistrationStatus,
    /// 0-100. Set by the search source against its query term, then
    /// overwritten by the resolver against the normalized key.
    pub similarity: u8,
}

/// Outcome of the naming-convention rules for one raw name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub score: u8,
}

/// Registry conflicts for one normalized key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub available: bool,
    pub exact_matches: Vec<RegistryMatch>,
    pub similar_companies: Vec<RegistryMatch>,
    pub total_found: usize,
}

/// Categorical availability verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    ExactMatch,
    SimilarCompanies { count: usize },
    ValidationFailed { errors: usize },
    MinorIssues { warnings: usize },
    Compliant,
    CheckFailed,
}

impl Verdict {
    /// Whether the name can be taken forward as-is
    pub fn is_available(&self) -> bool {
        matches!(self, Verdict::MinorIssues { .. } | Verdict::Compliant)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::ExactMatch => {
                write!(f, "❌ Name not available - exact match found in MCA database")
            }
            Verdict::SimilarCompanies { count } => {
                write!(f, "⚠️ Name may be rejected - {} similar companies found", count)
            }
            Verdict::ValidationFailed { errors } => {
                write!(f, "❌ Name validation failed - {} naming convention errors", errors)
            }
            Verdict::MinorIssues { warnings } => {
                write!(f, "⚠️ Name available with minor issues - {} warnings to consider", warnings)
            }
            Verdict::Compliant => {
                write!(f, "✅ Name appears available and compliant with MCA guidelines")
            }
            Verdict::CheckFailed => write!(f, "❌ Name check failed"),
        }
    }
}

/// Complete result of checking one candidate name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameCheckResult {
    pub name: String,
    pub cleaned_name: String,
    pub is_available: bool,
    pub existing_companies: Vec<RegistryMatch>,
    #[serde(default)]
    pub exact_matches: Vec<RegistryMatch>,
    #[serde(default)]
    pub total_found: usize,
    pub validation: ConventionReport,
    pub verdict: Verdict,
    pub recommendation: String,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NameCheckResult {
    /// Compliance score of the underlying convention report
    pub fn score(&self) -> u8 {
        self.validation.score
    }

    /// One-line "N errors, M warnings" summary
    pub fn validation_summary(&self) -> String {
        if self.error.is_some() {
            return "Check failed".to_string();
        }
        format!(
            "{} errors, {} warnings",
            self.validation.errors.len(),
            self.validation.warnings.len()
        )
    }
}

/// Connection settings for the external registry search API
#[derive(Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub timeout: Duration,
    pub limit: usize,
}

impl RegistryConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.finanvo.in";

    /// Build the configuration from `MCA_API_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("MCA_API_KEY").ok_or_else(|| config_error!("MCA_API_KEY is not set"))?;
        let api_secret =
            non_empty("MCA_API_SECRET").ok_or_else(|| config_error!("MCA_API_SECRET is not set"))?;

        let timeout = match non_empty("MCA_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    config_error!("MCA_API_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw)
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(10),
        };

        Ok(Self {
            base_url: non_empty("MCA_API_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            api_secret,
            timeout,
            limit: 10,
        })
    }
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Similarity buckets used when resolving conflicts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Strictly above this is an exact match
    pub exact_threshold: u8,
    /// Strictly above this (and not exact) is a similar company
    pub similar_threshold: u8,
    pub max_similar: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 95,
            similar_threshold: 70,
            max_similar: 5,
        }
    }
}

/// Synthetic conflict generation used when the registry is unreachable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Candidates at or below this similarity to the query are dropped
    pub min_similarity: u8,
    pub max_candidates: usize,
    pub max_results: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            min_similarity: 30,
            max_candidates: 4,
            max_results: 3,
        }
    }
}

/// Configuration for alternative name generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub count: usize,
    /// Retry budget per requested name before giving up on distinctness
    pub max_attempts_per_name: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: 20,
            max_attempts_per_name: 200,
        }
    }
}

/// Pacing for sequential batch checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(RegistrationStatus::from("Active"), RegistrationStatus::Active);
        assert_eq!(RegistrationStatus::from("INACTIVE"), RegistrationStatus::Inactive);
        assert_eq!(RegistrationStatus::from("Struck Off"), RegistrationStatus::StruckOff);
        assert_eq!(RegistrationStatus::from("strike-off"), RegistrationStatus::StruckOff);
        assert_eq!(RegistrationStatus::from("Under Liquidation"), RegistrationStatus::Unknown);
        assert_eq!(RegistrationStatus::from(""), RegistrationStatus::Unknown);
    }

    #[test]
    fn test_registry_config_from_lookup() {
        let config = RegistryConfig::from_lookup(lookup(&[
            ("MCA_API_KEY", "key"),
            ("MCA_API_SECRET", "secret"),
            ("MCA_API_BASE_URL", "http://localhost:8080/"),
            ("MCA_API_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.limit, 10);
    }

    #[test]
    fn test_registry_config_defaults() {
        let config = RegistryConfig::from_lookup(lookup(&[
            ("MCA_API_KEY", "key"),
            ("MCA_API_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, RegistryConfig::DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_registry_config_requires_credentials() {
        assert!(RegistryConfig::from_lookup(lookup(&[("MCA_API_KEY", "key")])).is_err());
        assert!(RegistryConfig::from_lookup(lookup(&[
            ("MCA_API_KEY", "  "),
            ("MCA_API_SECRET", "secret"),
        ]))
        .is_err());
    }

    #[test]
    fn test_registry_config_rejects_bad_timeout() {
        let result = RegistryConfig::from_lookup(lookup(&[
            ("MCA_API_KEY", "key"),
            ("MCA_API_SECRET", "secret"),
            ("MCA_API_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = RegistryConfig::from_lookup(lookup(&[
            ("MCA_API_KEY", "key-123"),
            ("MCA_API_SECRET", "secret-456"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("secret-456"));
    }

    #[test]
    fn test_verdict_messages() {
        assert!(Verdict::ExactMatch.to_string().contains("exact match"));
        assert!(Verdict::SimilarCompanies { count: 3 }.to_string().contains("3 similar companies"));
        assert!(Verdict::ValidationFailed { errors: 2 }.to_string().contains("2 naming convention errors"));
        assert!(Verdict::MinorIssues { warnings: 1 }.to_string().contains("1 warnings"));
        assert!(Verdict::Compliant.is_available());
        assert!(!Verdict::ExactMatch.is_available());
    }
}
