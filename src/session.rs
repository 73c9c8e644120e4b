//! Caller-side session bookkeeping: search history, batch summaries and export

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{CompanyForgeError, Result};
use crate::types::NameCheckResult;

/// Compliance score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Excellent,
            70..=89 => ScoreBand::Good,
            50..=69 => ScoreBand::Moderate,
            _ => ScoreBand::Poor,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "Excellent compliance"),
            ScoreBand::Good => write!(f, "Good with minor issues"),
            ScoreBand::Moderate => write!(f, "Moderate issues"),
            ScoreBand::Poor => write!(f, "Significant problems"),
        }
    }
}

/// Aggregate view over one batch of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_checked: usize,
    pub available_count: usize,
    pub average_score: f64,
    pub best_score: u8,
    pub best_name: Option<String>,
    pub error_count: usize,
    pub warning_count: usize,
    /// Distinct error messages, sorted
    pub distinct_errors: Vec<String>,
    /// Distinct warning messages, sorted
    pub distinct_warnings: Vec<String>,
}

impl BatchSummary {
    /// Summarize a batch of results
    pub fn from_results(results: &[NameCheckResult]) -> Self {
        let total_checked = results.len();
        let available_count = results.iter().filter(|r| r.verdict.is_available()).count();

        let score_sum: u64 = results.iter().map(|r| u64::from(r.score())).sum();
        let average_score = if total_checked == 0 {
            0.0
        } else {
            score_sum as f64 / total_checked as f64
        };

        // first result wins ties so the original name is preferred
        let best = results.iter().fold(None::<&NameCheckResult>, |best, r| match best {
            Some(b) if b.score() >= r.score() => Some(b),
            _ => Some(r),
        });

        let mut distinct_errors = BTreeSet::new();
        let mut distinct_warnings = BTreeSet::new();
        let mut error_count = 0;
        let mut warning_count = 0;
        for result in results {
            error_count += result.validation.errors.len();
            warning_count += result.validation.warnings.len();
            distinct_errors.extend(result.validation.errors.iter().cloned());
            distinct_warnings.extend(result.validation.warnings.iter().cloned());
        }

        Self {
            total_checked,
            available_count,
            average_score,
            best_score: best.map_or(0, |r| r.score()),
            best_name: best.map(|r| r.name.clone()),
            error_count,
            warning_count,
            distinct_errors: distinct_errors.into_iter().collect(),
            distinct_warnings: distinct_warnings.into_iter().collect(),
        }
    }
}

/// One recorded search of an original name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub original_name: String,
    pub timestamp: DateTime<Utc>,
    pub results_count: usize,
    pub best_score: u8,
}

/// In-memory search history, shareable across threads
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search and the results it produced
    pub fn record(&self, original_name: &str, results: &[NameCheckResult]) -> HistoryEntry {
        let entry = HistoryEntry {
            original_name: original_name.to_string(),
            timestamp: Utc::now(),
            results_count: results.len(),
            best_score: results.iter().map(|r| r.score()).max().unwrap_or(0),
        };
        self.entries.write().push(entry.clone());
        entry
    }

    /// Most recent `n` entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        let entries = self.entries.read();
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// Exportable record of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub original_name: String,
    pub generated_at: DateTime<Utc>,
    pub registry_source: String,
    pub summary: BatchSummary,
    pub results: Vec<NameCheckResult>,
    /// Searches made during the session, oldest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl SessionReport {
    /// Build a report from the results of one session
    pub fn new(original_name: &str, registry_source: &str, results: Vec<NameCheckResult>) -> Self {
        Self {
            original_name: original_name.to_string(),
            generated_at: Utc::now(),
            registry_source: registry_source.to_string(),
            summary: BatchSummary::from_results(&results),
            results,
            history: Vec::new(),
        }
    }

    /// Attach every entry recorded in `history`
    pub fn with_history(mut self, history: &SearchHistory) -> Self {
        self.history = history.recent(history.len());
        self
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CompanyForgeError::internal(format!("Failed to serialize report: {}", e))
        })
    }

    /// Load a report from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CompanyForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| CompanyForgeError::parse(e.to_string(), Some(content)))
    }

    /// Save report to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CompanyForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        std::fs::write(path, self.to_json()?).map_err(|e| {
            CompanyForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConventionReport, Verdict};

    fn result(name: &str, score: u8, verdict: Verdict, errors: &[&str], warnings: &[&str]) -> NameCheckResult {
        NameCheckResult {
            name: name.to_string(),
            cleaned_name: name.to_lowercase(),
            is_available: true,
            existing_companies: Vec::new(),
            exact_matches: Vec::new(),
            total_found: 0,
            validation: ConventionReport {
                is_valid: errors.is_empty(),
                errors: errors.iter().map(|s| s.to_string()).collect(),
                warnings: warnings.iter().map(|s| s.to_string()).collect(),
                score,
            },
            verdict,
            recommendation: verdict.to_string(),
            checked_at: Utc::now(),
            error: None,
        }
    }

    fn sample() -> Vec<NameCheckResult> {
        vec![
            result("Acme Ltd", 100, Verdict::Compliant, &[], &[]),
            result("XY", 50, Verdict::ValidationFailed { errors: 2 }, &["too short", "suffix"], &[]),
            result("Zeta  Ltd", 100, Verdict::MinorIssues { warnings: 1 }, &[], &["spaces"]),
            result("Bank Ltd", 80, Verdict::ValidationFailed { errors: 1 }, &["suffix"], &[]),
        ]
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Poor);
    }

    #[test]
    fn test_batch_summary() {
        let summary = BatchSummary::from_results(&sample());
        assert_eq!(summary.total_checked, 4);
        assert_eq!(summary.available_count, 2);
        assert_eq!(summary.average_score, 82.5);
        assert_eq!(summary.best_score, 100);
        assert_eq!(summary.best_name.as_deref(), Some("Acme Ltd"));
        assert_eq!(summary.error_count, 3);
        assert_eq!(summary.warning_count, 1);
        assert_eq!(summary.distinct_errors, vec!["suffix", "too short"]);
        assert_eq!(summary.distinct_warnings, vec!["spaces"]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchSummary::from_results(&[]);
        assert_eq!(summary.total_checked, 0);
        assert_eq!(summary.average_score, 0.0);
        assert!(summary.best_name.is_none());
    }

    #[test]
    fn test_history_recent() {
        let history = SearchHistory::new();
        assert!(history.is_empty());
        for name in ["one", "two", "three", "four"] {
            history.record(name, &sample());
        }
        let recent = history.recent(3);
        let names: Vec<&str> = recent.iter().map(|e| e.original_name.as_str()).collect();
        assert_eq!(names, vec!["two", "three", "four"]);
        assert_eq!(recent[0].results_count, 4);
        assert_eq!(recent[0].best_score, 100);
        assert_eq!(history.recent(10).len(), 4);

        history.clear();
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_history_shared_between_clones() {
        let history = SearchHistory::new();
        let other = history.clone();
        other.record("shared", &[]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.recent(1)[0].best_score, 0);
    }

    #[test]
    fn test_report_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("session.json");

        let report = SessionReport::new("Acme Ltd", "synthetic", sample());
        report.save(&path).unwrap();

        let loaded = SessionReport::load(&path).unwrap();
        assert_eq!(loaded.original_name, "Acme Ltd");
        assert_eq!(loaded.results.len(), 4);
        assert_eq!(loaded.summary, report.summary);
        assert_eq!(loaded.results[1].verdict, Verdict::ValidationFailed { errors: 2 });
    }

    #[test]
    fn test_report_carries_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let history = SearchHistory::new();
        history.record("Acme Ltd", &sample());
        let report = SessionReport::new("Acme Ltd", "synthetic", sample()).with_history(&history);
        report.save(&path).unwrap();

        let loaded = SessionReport::load(&path).unwrap();
        assert_eq!(loaded.history.len(), 1);
        assert_eq!(loaded.history[0].original_name, "Acme Ltd");
        assert_eq!(loaded.history[0].results_count, 4);
        assert_eq!(loaded.history[0].best_score, 100);
    }

    #[test]
    fn test_report_without_history_field_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");

        let mut value = serde_json::to_value(SessionReport::new("Acme Ltd", "api", sample())).unwrap();
        value.as_object_mut().unwrap().remove("history");
        std::fs::write(&path, value.to_string()).unwrap();

        let loaded = SessionReport::load(&path).unwrap();
        assert!(loaded.history.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SessionReport::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(CompanyForgeError::Io { .. })));
    }
}
