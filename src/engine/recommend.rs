//! Fuses conflict and convention findings into a single verdict

use crate::types::{ConflictReport, ConventionReport, Verdict};

/// Pick the verdict for a name; the first rule that applies wins.
///
/// Registry conflicts outrank convention failures, which outrank warnings.
pub fn recommend(conflict: &ConflictReport, convention: &ConventionReport) -> Verdict {
    if !conflict.available {
        if !conflict.exact_matches.is_empty() {
            return Verdict::ExactMatch;
        }
        if !conflict.similar_companies.is_empty() {
            return Verdict::SimilarCompanies {
                count: conflict.similar_companies.len(),
            };
        }
    }

    if !convention.is_valid {
        return Verdict::ValidationFailed {
            errors: convention.errors.len(),
        };
    }

    if !convention.warnings.is_empty() {
        return Verdict::MinorIssues {
            warnings: convention.warnings.len(),
        };
    }

    Verdict::Compliant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RegistrationStatus, RegistryMatch};

    fn registered(name: &str, similarity: u8) -> RegistryMatch {
        RegistryMatch {
            registered_name: name.to_string(),
            registration_id: String::new(),
            registration_status: RegistrationStatus::Active,
            similarity,
        }
    }

    fn conflicts(exact: usize, similar: usize) -> ConflictReport {
        ConflictReport {
            available: exact == 0 && similar == 0,
            exact_matches: (0..exact).map(|_| registered("Acme Ltd", 100)).collect(),
            similar_companies: (0..similar).map(|_| registered("Acme Lab Ltd", 80)).collect(),
            total_found: exact + similar,
        }
    }

    fn convention(errors: usize, warnings: usize) -> ConventionReport {
        ConventionReport {
            is_valid: errors == 0,
            errors: vec!["error".to_string(); errors],
            warnings: vec!["warning".to_string(); warnings],
            score: 100,
        }
    }

    #[test]
    fn test_exact_match_outranks_everything() {
        assert_eq!(recommend(&conflicts(1, 2), &convention(3, 1)), Verdict::ExactMatch);
    }

    #[test]
    fn test_similar_companies() {
        assert_eq!(
            recommend(&conflicts(0, 2), &convention(1, 0)),
            Verdict::SimilarCompanies { count: 2 }
        );
    }

    #[test]
    fn test_validation_failed() {
        assert_eq!(
            recommend(&conflicts(0, 0), &convention(2, 1)),
            Verdict::ValidationFailed { errors: 2 }
        );
    }

    #[test]
    fn test_minor_issues() {
        assert_eq!(
            recommend(&conflicts(0, 0), &convention(0, 2)),
            Verdict::MinorIssues { warnings: 2 }
        );
    }

    #[test]
    fn test_compliant() {
        let verdict = recommend(&conflicts(0, 0), &convention(0, 0));
        assert_eq!(verdict, Verdict::Compliant);
        assert!(verdict.to_string().contains("available and compliant"));
    }
}
