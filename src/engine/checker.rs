//! Company name checker: the engine entry points

use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::recommend::recommend;
use super::resolver::ConflictResolver;
use crate::error::{CompanyForgeError, Result};
use crate::name::{normalize, AlternativeNameGenerator, ConventionValidator};
use crate::registry::{RegistrySearch, RegistrySearchClient, SyntheticRegistry};
use crate::types::{
    FallbackConfig, GenerationConfig, NameCheckResult, RegistryConfig, ResolverConfig, Verdict,
};

/// Default number of registry records requested per search
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Checks company names against the convention rules and a registry.
///
/// Holds configuration only; every check builds its results from scratch,
/// so one instance can be shared by any number of callers.
pub struct NameChecker {
    registry: Box<dyn RegistrySearch>,
    resolver: ConflictResolver,
    validator: ConventionValidator,
    generator: AlternativeNameGenerator,
    search_limit: usize,
}

impl NameChecker {
    /// Create a checker over any registry source with default rules
    pub fn new(registry: Box<dyn RegistrySearch>) -> Result<Self> {
        Ok(Self {
            registry,
            resolver: ConflictResolver::default(),
            validator: ConventionValidator::new()?,
            generator: AlternativeNameGenerator::new(GenerationConfig::default())?,
            search_limit: DEFAULT_SEARCH_LIMIT,
        })
    }

    /// Create a checker backed by the live registry API
    pub fn online(config: RegistryConfig, fallback: FallbackConfig) -> Result<Self> {
        let limit = config.limit;
        let client = RegistrySearchClient::new(config, fallback);
        Ok(Self::new(Box::new(client))?.with_search_limit(limit))
    }

    /// Create a checker that only consults the synthetic registry
    pub fn offline(fallback: FallbackConfig) -> Result<Self> {
        Self::new(Box::new(SyntheticRegistry::new(fallback)))
    }

    /// Use custom similarity thresholds
    pub fn with_resolver(mut self, config: ResolverConfig) -> Self {
        self.resolver = ConflictResolver::new(config);
        self
    }

    /// Use a custom convention validator
    pub fn with_validator(mut self, validator: ConventionValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Use a custom generation configuration
    pub fn with_generation(mut self, config: GenerationConfig) -> Result<Self> {
        self.generator = AlternativeNameGenerator::new(config)?;
        Ok(self)
    }

    /// Set how many registry records each search asks for
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Name of the registry source in use
    pub fn registry_source(&self) -> &'static str {
        self.registry.source_name()
    }

    /// Check a single name with a freshly seeded random source
    pub async fn check(&self, name: &str) -> NameCheckResult {
        let mut rng = StdRng::from_entropy();
        self.check_with_rng(name, &mut rng).await
    }

    /// Check a single name.
    ///
    /// Never fails: a pipeline error becomes a result with `error` set and
    /// `is_available == false`.
    pub async fn check_with_rng(&self, name: &str, rng: &mut (dyn RngCore + Send)) -> NameCheckResult {
        let start_time = Instant::now();

        match self.try_check(name, rng).await {
            Ok(result) => {
                tracing::debug!(
                    name = %name,
                    verdict = ?result.verdict,
                    score = %result.validation.score,
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Name check completed"
                );
                result
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Name check failed");
                self.failed(name, e)
            }
        }
    }

    async fn try_check(&self, name: &str, rng: &mut (dyn RngCore + Send)) -> Result<NameCheckResult> {
        let cleaned_name = normalize(name);

        let matches = if cleaned_name.is_empty() {
            Vec::new()
        } else {
            self.registry
                .search(&cleaned_name, self.search_limit, rng)
                .await?
        };

        let conflict = self.resolver.resolve(&cleaned_name, matches);
        let validation = self.validator.validate(name);
        let verdict = recommend(&conflict, &validation);

        Ok(NameCheckResult {
            name: name.to_string(),
            cleaned_name,
            is_available: conflict.available,
            existing_companies: conflict.similar_companies,
            exact_matches: conflict.exact_matches,
            total_found: conflict.total_found,
            validation,
            verdict,
            recommendation: verdict.to_string(),
            checked_at: Utc::now(),
            error: None,
        })
    }

    fn failed(&self, name: &str, error: CompanyForgeError) -> NameCheckResult {
        NameCheckResult {
            name: name.to_string(),
            cleaned_name: normalize(name),
            is_available: false,
            existing_companies: Vec::new(),
            exact_matches: Vec::new(),
            total_found: 0,
            validation: self.validator.validate(name),
            verdict: Verdict::CheckFailed,
            recommendation: format!("{}: {}", Verdict::CheckFailed, error),
            checked_at: Utc::now(),
            error: Some(error.to_string()),
        }
    }

    /// Generate `count` distinct alternatives with a freshly seeded random source
    pub fn generate(&self, name: &str, count: usize) -> Result<Vec<String>> {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(name, count, &mut rng)
    }

    /// Generate `count` distinct alternatives for `name`
    pub fn generate_with_rng(
        &self,
        name: &str,
        count: usize,
        rng: &mut (dyn RngCore + Send),
    ) -> Result<Vec<String>> {
        self.generator.generate(name, count, rng)
    }

    /// Default alternative count from the generation configuration
    pub fn default_alternative_count(&self) -> usize {
        self.generator.default_count()
    }

    /// Check names one after another with a freshly seeded random source
    pub async fn batch_check(&self, names: &[String]) -> Vec<NameCheckResult> {
        let mut rng = StdRng::from_entropy();
        self.batch_check_with_rng(names, &mut rng).await
    }

    /// Check names one after another, in input order
    pub async fn batch_check_with_rng(
        &self,
        names: &[String],
        rng: &mut (dyn RngCore + Send),
    ) -> Vec<NameCheckResult> {
        let batch_start = Instant::now();
        let mut results = Vec::with_capacity(names.len());

        for name in names {
            results.push(self.check_with_rng(name, rng).await);
        }

        let available = results.iter().filter(|r| r.is_available).count();
        let failed = results.iter().filter(|r| r.error.is_some()).count();
        let batch_duration = batch_start.elapsed();
        tracing::info!(
            names_requested = %names.len(),
            available = %available,
            errors = %failed,
            source = %self.registry.source_name(),
            batch_duration_ms = %batch_duration.as_millis(),
            avg_duration_ms = %(batch_duration.as_millis() / names.len().max(1) as u128),
            "Batch name check completed"
        );

        results
    }
}
