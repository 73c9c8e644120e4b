//! Naming-convention rules for registrable company names

use crate::error::{CompanyForgeError, Result};
use crate::types::ConventionReport;
use regex::Regex;

use super::VALID_SUFFIXES;

/// Words a registrar will not accept without special approval
pub const PROHIBITED_WORDS: &[&str] = &[
    // Banking & finance
    "bank", "banking", "insurance", "reserve",
    // Government
    "government", "ministry", "national", "central", "federal", "authority",
    "commission", "corporation of india", "registrar", "co-operative",
    // Civic
    "municipal", "panchayat",
    // Royalty
    "king", "queen", "emperor", "prince", "princess",
    // Judicial
    "supreme", "tribunal", "court",
    // Academic
    "university", "college",
    // Trusts & associations
    "trust", "society", "foundation", "council",
];

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 120;
const MAX_WORDS: usize = 15;
const ERROR_PENALTY: i32 = 25;
const WARNING_PENALTY: i32 = 5;
const SUFFIX_BONUS: i32 = 5;
const WORD_COUNT_BONUS: i32 = 5;

/// Company name convention validator
pub struct ConventionValidator {
    prohibited_words: Vec<String>,
    invalid_chars: Regex,
    leading_digit: Regex,
    repeated_space: Regex,
}

impl ConventionValidator {
    /// Create a validator with the default prohibited word list
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| CompanyForgeError::internal(e.to_string()))
        };

        Ok(Self {
            prohibited_words: PROHIBITED_WORDS.iter().map(|w| w.to_string()).collect(),
            invalid_chars: compile(r"[^a-zA-Z0-9\s.\-&()]")?,
            leading_digit: compile(r"^[0-9]")?,
            repeated_space: compile(r"\s{2,}")?,
        })
    }

    /// Replace the prohibited word list
    pub fn with_prohibited_words(mut self, words: Vec<String>) -> Self {
        self.prohibited_words = words.into_iter().map(|w| w.to_lowercase()).collect();
        self
    }

    /// Score a raw (unnormalized) name against every rule.
    ///
    /// Rules never short-circuit: every violation is collected in one pass.
    pub fn validate(&self, name: &str) -> ConventionReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let name_lower = name.to_lowercase();
        let length = name.chars().count();
        let word_count = name.split_whitespace().count();

        if length < MIN_LENGTH {
            errors.push(format!("Company name too short (minimum {} characters)", MIN_LENGTH));
        } else if length > MAX_LENGTH {
            errors.push(format!("Company name too long (maximum {} characters)", MAX_LENGTH));
        }

        for word in &self.prohibited_words {
            if name_lower.contains(word.as_str()) {
                errors.push(format!("Prohibited word '{}' found in name", word));
            }
        }

        let has_valid_suffix = VALID_SUFFIXES
            .iter()
            .any(|suffix| name_lower.ends_with(suffix));
        if !has_valid_suffix {
            errors.push(
                "Company name must end with proper suffix (Pvt Ltd or Private Limited)".to_string(),
            );
        }

        if self.invalid_chars.is_match(name) {
            errors.push(
                "Invalid characters found (only letters, numbers, spaces, dots, hyphens, ampersands, and parentheses allowed)"
                    .to_string(),
            );
        }

        if self.leading_digit.is_match(name) {
            errors.push("Company name cannot start with a number".to_string());
        }

        if self.repeated_space.is_match(name) {
            warnings.push("Multiple consecutive spaces found".to_string());
        }

        if name != name.trim() {
            warnings.push("Leading or trailing spaces detected".to_string());
        }

        if word_count > MAX_WORDS {
            warnings.push("Very long names may face scrutiny during approval".to_string());
        }

        let mut score = 100 - errors.len() as i32 * ERROR_PENALTY - warnings.len() as i32 * WARNING_PENALTY;
        if has_valid_suffix {
            score += SUFFIX_BONUS;
        }
        if (3..=5).contains(&word_count) {
            score += WORD_COUNT_BONUS;
        }

        ConventionReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            score: score.clamp(0, 100) as u8,
        }
    }
}
