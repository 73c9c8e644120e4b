//! Alternative company name generator

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use super::words::{title_case, PREFIXES, WORD_CATEGORIES};
use super::GENERATED_SUFFIXES;
use crate::error::{CompanyForgeError, Result};
use crate::types::GenerationConfig;
use crate::{internal_error, validation_error};

/// Builds convention-leaning alternatives from the words of a base name
pub struct AlternativeNameGenerator {
    config: GenerationConfig,
    suffix_pattern: Regex,
}

impl AlternativeNameGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let suffix_pattern = Regex::new(r"(?i)(pvt ltd|private limited|ltd|limited)")
            .map_err(|e| internal_error!("invalid suffix pattern: {}", e))?;
        Ok(Self {
            config,
            suffix_pattern,
        })
    }

    /// Default number of alternatives
    pub fn default_count(&self) -> usize {
        self.config.count
    }

    /// Split a base name into lower-case words with registration suffixes removed.
    pub fn base_words(&self, base_name: &str) -> Vec<String> {
        let lowered = base_name.to_lowercase();
        let stripped = self.suffix_pattern.replace_all(&lowered, "");
        stripped
            .split_whitespace()
            .map(|w| w.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Generate exactly `count` distinct alternatives for `base_name`.
    ///
    /// The first `count` slots follow fixed templates; duplicates are then
    /// replaced with random combinations until the set is full.
    pub fn generate<R>(&self, base_name: &str, count: usize, rng: &mut R) -> Result<Vec<String>>
    where
        R: Rng + ?Sized,
    {
        let words = self.base_words(base_name);
        if words.is_empty() {
            return Err(validation_error!(
                "'{}' has no words left to build alternatives from",
                base_name
            ));
        }

        let mut names = Vec::with_capacity(count);
        let mut seen = HashSet::with_capacity(count);

        for i in 0..count {
            let name = self.templated(&words, i, rng);
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }

        let budget = count.saturating_mul(self.config.max_attempts_per_name);
        let mut attempts = 0;
        while names.len() < count {
            if attempts >= budget {
                return Err(CompanyForgeError::generation(format!(
                    "only {} distinct names could be built from '{}', {} requested",
                    names.len(),
                    base_name,
                    count
                )));
            }
            attempts += 1;

            let word = words.choose(rng).map(String::as_str).unwrap_or_default();
            let category = WORD_CATEGORIES.choose(rng).copied().unwrap_or_default();
            let name = format!(
                "{}{} {} {}",
                pick(PREFIXES, rng),
                title_case(word),
                pick(category, rng),
                pick(GENERATED_SUFFIXES, rng)
            );
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }

        tracing::debug!(
            base_name = %base_name,
            generated = %names.len(),
            retries = %attempts,
            "Alternative names generated"
        );

        Ok(names)
    }

    fn templated<R>(&self, words: &[String], i: usize, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let category = WORD_CATEGORIES[i % WORD_CATEGORIES.len()];
        let middle = pick(category, rng);
        let prefix = pick(PREFIXES, rng);
        let suffix = pick(GENERATED_SUFFIXES, rng);

        if let Some(word) = words.get(i) {
            return format!("{}{} {} {}", prefix, title_case(word), middle, suffix);
        }

        let base = match words {
            [first, second, ..] => format!("{}{}", title_case(first), title_case(second)),
            [only] => title_case(only),
            [] => String::new(),
        };

        match i % 4 {
            0 => format!("{}{} {} {}", prefix, base, middle, suffix),
            1 => format!("{} {} {}", base, middle, suffix),
            2 => format!("{}{} {} {}", prefix, middle, base, suffix),
            _ => format!("{}{} {}", base, middle, suffix),
        }
    }
}

fn pick<R>(pool: &[&'static str], rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    pool.choose(rng).copied().unwrap_or_default()
}
