//! Synthetic conflict generator used when the registry cannot be reached

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::RegistrySearch;
use crate::error::Result;
use crate::name::similarity;
use crate::name::words::{title_case, BUSINESS_TYPES, CITIES, STATE_CODES};
use crate::types::{FallbackConfig, RegistrationStatus, RegistryMatch};

const SYNTHETIC_STATUSES: &[RegistrationStatus] = &[
    RegistrationStatus::Active,
    RegistrationStatus::Inactive,
    RegistrationStatus::StruckOff,
];

/// Fabricates plausible conflicting registrations for a query.
///
/// Output is bounded in size but not deterministic in content unless the
/// caller seeds the random source.
#[derive(Debug, Clone, Default)]
pub struct SyntheticRegistry {
    config: FallbackConfig,
}

impl SyntheticRegistry {
    /// Create a synthetic registry with the given thresholds
    pub fn new(config: FallbackConfig) -> Self {
        Self { config }
    }

    /// Get the fallback configuration
    pub fn config(&self) -> &FallbackConfig {
        &self.config
    }

    /// Produce up to `max_results` fabricated matches, best first.
    ///
    /// Similarity is measured against the query exactly as given.
    pub fn generate<R>(&self, query: &str, rng: &mut R) -> Vec<RegistryMatch>
    where
        R: Rng + ?Sized,
    {
        let query_lower = query.to_lowercase();
        let words: Vec<&str> = query_lower.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let attempts = rng.gen_range(0..=self.config.max_candidates);
        let mut conflicts = Vec::with_capacity(attempts);

        for _ in 0..attempts {
            let base = title_case(words.choose(rng).copied().unwrap_or_default());
            let business = title_case(BUSINESS_TYPES.choose(rng).copied().unwrap_or_default());
            let city = CITIES.choose(rng).copied().unwrap_or_default();

            let registered_name = match rng.gen_range(0..5) {
                0 => format!("{} {} Private Limited", base, business),
                1 => format!("{} {} Pvt Ltd", base, business),
                2 => format!("New {} {} Limited", base, business),
                3 => format!("{} {} {} Pvt Ltd", base, city, business),
                _ => format!("Global {} {} Private Limited", base, business),
            };

            let score = similarity(&query_lower, &registered_name);
            if score <= self.config.min_similarity {
                continue;
            }

            conflicts.push(RegistryMatch {
                registration_id: synthetic_registration_id(rng),
                registration_status: SYNTHETIC_STATUSES
                    .choose(rng)
                    .copied()
                    .unwrap_or_default(),
                registered_name,
                similarity: score,
            });
        }

        conflicts.sort_by(|a, b| b.similarity.cmp(&a.similarity));
        conflicts.truncate(self.config.max_results);
        conflicts
    }
}

/// Corporate identity number shaped like `U12345MH2015PTC123456`
fn synthetic_registration_id<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    format!(
        "U{}{}{}PTC{}",
        rng.gen_range(10_000..=99_999),
        STATE_CODES.choose(rng).copied().unwrap_or_default(),
        rng.gen_range(2010..=2023),
        rng.gen_range(100_000..=999_999)
    )
}

#[async_trait]
impl RegistrySearch for SyntheticRegistry {
    async fn search(
        &self,
        term: &str,
        limit: usize,
        rng: &mut (dyn RngCore + Send),
    ) -> Result<Vec<RegistryMatch>> {
        let mut matches = self.generate(term, rng);
        matches.truncate(limit);
        tracing::debug!(term = %term, found = %matches.len(), "Synthetic registry search");
        Ok(matches)
    }

    fn source_name(&self) -> &'static str {
        "synthetic"
    }
}
