//! Conflict resolution between a normalized key and registry search results

use crate::name::{normalize, similarity};
use crate::types::{ConflictReport, RegistryMatch, ResolverConfig};

/// Buckets registry matches by similarity to a normalized key
#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    config: ResolverConfig,
}

impl ConflictResolver {
    /// Create a resolver with the given thresholds
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Get resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Classify every match against `key` (already normalized).
    ///
    /// Each registered name is normalized the same way before comparison and
    /// its `similarity` is overwritten with the score against `key`. A match
    /// lands in at most one bucket; anything at or below the similar
    /// threshold is dropped.
    pub fn resolve(&self, key: &str, matches: Vec<RegistryMatch>) -> ConflictReport {
        let total_found = matches.len();
        let mut exact_matches = Vec::new();
        let mut similar_companies = Vec::new();

        for mut candidate in matches {
            let score = similarity(key, &normalize(&candidate.registered_name));
            candidate.similarity = score;

            if score > self.config.exact_threshold {
                exact_matches.push(candidate);
            } else if score > self.config.similar_threshold {
                similar_companies.push(candidate);
            }
        }

        similar_companies.sort_by(|a, b| b.similarity.cmp(&a.similarity));
        similar_companies.truncate(self.config.max_similar);

        tracing::debug!(
            key = %key,
            total_found = %total_found,
            exact = %exact_matches.len(),
            similar = %similar_companies.len(),
            "Conflicts resolved"
        );

        ConflictReport {
            available: exact_matches.is_empty() && similar_companies.is_empty(),
            exact_matches,
            similar_companies,
            total_found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegistrationStatus;

    fn registered(name: &str) -> RegistryMatch {
        RegistryMatch {
            registered_name: name.to_string(),
            registration_id: format!("ID-{}", name.len()),
            registration_status: RegistrationStatus::Active,
            similarity: 0,
        }
    }

    #[test]
    fn test_exact_match_ignores_suffix_and_case() {
        let resolver = ConflictResolver::default();
        let report = resolver.resolve(
            "acme solutions",
            vec![registered("ACME SOLUTIONS PRIVATE LIMITED")],
        );
        assert!(!report.available);
        assert_eq!(report.exact_matches.len(), 1);
        assert_eq!(report.exact_matches[0].similarity, 100);
        assert!(report.similar_companies.is_empty());
        assert_eq!(report.total_found, 1);
    }

    #[test]
    fn test_one_letter_typo_is_exact() {
        let resolver = ConflictResolver::default();
        let report = resolver.resolve("acme solutions", vec![registered("Acme Solution Pvt Ltd")]);
        assert!(!report.available);
        assert_eq!(report.exact_matches.len(), 1);
        assert_eq!(report.exact_matches[0].similarity, 96);
        assert!(report.similar_companies.is_empty());
    }

    #[test]
    fn test_similar_bucket() {
        let resolver = ConflictResolver::default();
        let report = resolver.resolve(
            "acme solutions",
            vec![registered("Acme Solutions India Pvt Ltd")],
        );
        assert!(!report.available);
        assert!(report.exact_matches.is_empty());
        assert_eq!(report.similar_companies.len(), 1);
        assert_eq!(report.similar_companies[0].similarity, 82);
    }

    #[test]
    fn test_unrelated_discarded() {
        let resolver = ConflictResolver::default();
        let report = resolver.resolve("acme solutions", vec![registered("Zenith Holdings Limited")]);
        assert!(report.available);
        assert!(report.exact_matches.is_empty());
        assert!(report.similar_companies.is_empty());
        assert_eq!(report.total_found, 1);
    }

    #[test]
    fn test_empty_results_available() {
        let report = ConflictResolver::default().resolve("xy", Vec::new());
        assert!(report.available);
        assert_eq!(report.total_found, 0);
    }

    #[test]
    fn test_similar_sorted_and_capped() {
        let resolver = ConflictResolver::default();
        let candidates = vec![
            registered("Acme Solutionz One Ltd"),
            registered("Acme Solution Ltd"),
            registered("Acme Solutions A Ltd"),
            registered("Acme Solutions AB Ltd"),
            registered("Acme Solutions ABC Ltd"),
            registered("Acme Solutions India Ltd"),
            registered("Acme Solutions Global Ltd"),
        ];
        let report = resolver.resolve("acme solutions", candidates);
        assert_eq!(report.exact_matches.len(), 1);
        assert_eq!(report.similar_companies.len(), 5);
        assert_eq!(report.similar_companies[0].registered_name, "Acme Solutions A Ltd");
        assert!(report
            .similar_companies
            .windows(2)
            .all(|w| w[0].similarity >= w[1].similarity));
        assert_eq!(report.total_found, 7);
    }

    #[test]
    fn test_no_match_in_both_buckets() {
        let resolver = ConflictResolver::default();
        let candidates = vec![
            registered("Acme Solutions Ltd"),
            registered("Acme Solutions India Ltd"),
            registered("Acme Solutions Pvt Ltd"),
        ];
        let report = resolver.resolve("acme solutions", candidates);
        for exact in &report.exact_matches {
            assert!(!report.similar_companies.contains(exact));
        }
        assert_eq!(report.exact_matches.len() + report.similar_companies.len(), 3);
    }

    #[test]
    fn test_custom_thresholds() {
        let resolver = ConflictResolver::new(ResolverConfig {
            exact_threshold: 99,
            similar_threshold: 10,
            max_similar: 1,
        });
        let report = resolver.resolve(
            "acme solutions",
            vec![registered("Acme Solution Ltd"), registered("Acme Labs Ltd")],
        );
        assert!(report.exact_matches.is_empty());
        assert_eq!(report.similar_companies.len(), 1);
        assert_eq!(report.similar_companies[0].registered_name, "Acme Solution Ltd");
    }
}
