//! Translation counters for one fill run.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters updated while filling English translations.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Candidates answered from the dictionary (including empty particle hits)
    dictionary_hits: AtomicUsize,

    /// Requests sent to the translation API
    api_calls: AtomicUsize,

    /// API requests that failed after retries
    api_failures: AtomicUsize,

    /// Candidates skipped without trying (conservative mode, API disabled)
    skipped: AtomicUsize,

    /// Translations dropped by the validator
    rejected: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dictionary_hit(&self) {
        self.dictionary_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_api_failure(&self) {
        self.api_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dictionary_hits(&self) -> usize {
        self.dictionary_hits.load(Ordering::Relaxed)
    }

    pub fn api_calls(&self) -> usize {
        self.api_calls.load(Ordering::Relaxed)
    }

    pub fn api_failures(&self) -> usize {
        self.api_failures.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    /// API calls that produced an accepted translation.
    pub fn api_translations(&self) -> usize {
        self.api_calls()
            .saturating_sub(self.api_failures())
            .saturating_sub(self.rejected())
    }

    pub fn report(&self) -> MetricsReport {
        let calls = self.api_calls();
        let failures = self.api_failures();
        let api_success_rate = if calls > 0 {
            (calls - failures) as f64 / calls as f64 * 100.0
        } else {
            0.0
        };

        MetricsReport {
            dictionary_hits: self.dictionary_hits(),
            api_calls: calls,
            api_failures: failures,
            api_translations: self.api_translations(),
            skipped: self.skipped(),
            rejected: self.rejected(),
            api_success_rate,
        }
    }
}

/// Snapshot of the counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub dictionary_hits: usize,
    pub api_calls: usize,
    pub api_failures: usize,
    pub api_translations: usize,
    pub skipped: usize,
    pub rejected: usize,

    /// Share of API calls that returned a response, as a percentage (0-100)
    pub api_success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let report = TranslationMetrics::new().report();
        assert_eq!(report.dictionary_hits, 0);
        assert_eq!(report.api_calls, 0);
        assert_eq!(report.api_success_rate, 0.0);
    }

    #[test]
    fn test_counters() {
        let metrics = TranslationMetrics::new();
        metrics.record_dictionary_hit();
        metrics.record_dictionary_hit();
        metrics.record_skipped();
        metrics.record_rejected();

        assert_eq!(metrics.dictionary_hits(), 2);
        assert_eq!(metrics.skipped(), 1);
        assert_eq!(metrics.rejected(), 1);
    }

    #[test]
    fn test_api_success_rate() {
        let metrics = TranslationMetrics::new();
        for _ in 0..4 {
            metrics.record_api_call();
        }
        metrics.record_api_failure();

        let report = metrics.report();
        assert_eq!(report.api_calls, 4);
        assert_eq!(report.api_failures, 1);
        assert!((report.api_success_rate - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_api_translations_exclude_failures_and_rejections() {
        let metrics = TranslationMetrics::new();
        for _ in 0..5 {
            metrics.record_api_call();
        }
        metrics.record_api_failure();
        metrics.record_rejected();

        assert_eq!(metrics.api_translations(), 3);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_api_call();
        let json = serde_json::to_string(&metrics.report()).unwrap();
        assert!(json.contains("\"api_calls\":1"));
    }
}
