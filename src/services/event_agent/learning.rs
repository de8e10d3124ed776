//! Bounded Learning Store
//!
//! Per-pattern rolling statistics owned by a single agent. The store is an
//! explicit bounded cache: at most `capacity` patterns, evicting the
//! least-recently-seen pattern when full, with a capped rolling response
//! log per pattern. The upstream behavior this replaces grew without bound;
//! whether that was intentional is recorded as an open question in
//! DESIGN.md.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::ResponseStatus;

/// One response recorded against a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedResponse {
    pub status: ResponseStatus,
    pub confidence: f64,
    pub at: DateTime<Utc>,
}

/// Rolling statistics for one pattern key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternStats {
    /// Lifetime occurrence count (not capped by the rolling log).
    pub occurrences: u64,
    /// Rolling response log, newest last.
    pub responses: VecDeque<RecordedResponse>,
    /// Mean confidence over the rolling log.
    pub average_confidence: f64,
    /// Fraction of rolling-log responses with `Ok` status.
    pub success_rate: f64,
    pub last_seen: DateTime<Utc>,
}

/// Bounded per-agent pattern cache.
#[derive(Debug)]
pub struct LearningStore {
    capacity: usize,
    log_cap: usize,
    patterns: HashMap<String, PatternStats>,
}

impl LearningStore {
    pub fn new(capacity: usize, log_cap: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            log_cap: log_cap.max(1),
            patterns: HashMap::new(),
        }
    }

    /// Stats for a pattern, if learned.
    pub fn get(&self, key: &str) -> Option<&PatternStats> {
        self.patterns.get(key)
    }

    /// Record one response against a pattern, evicting the
    /// least-recently-seen pattern if a new key would exceed capacity.
    pub fn record(&mut self, key: &str, status: ResponseStatus, confidence: f64) {
        if !self.patterns.contains_key(key) && self.patterns.len() >= self.capacity {
            self.evict_least_recently_seen();
        }

        let now = Utc::now();
        let stats = self.patterns.entry(key.to_string()).or_insert(PatternStats {
            occurrences: 0,
            responses: VecDeque::new(),
            average_confidence: 0.0,
            success_rate: 0.0,
            last_seen: now,
        });

        stats.occurrences += 1;
        stats.last_seen = now;
        stats.responses.push_back(RecordedResponse {
            status,
            confidence,
            at: now,
        });
        while stats.responses.len() > self.log_cap {
            stats.responses.pop_front();
        }

        let len = stats.responses.len() as f64;
        stats.average_confidence =
            stats.responses.iter().map(|r| r.confidence).sum::<f64>() / len;
        stats.success_rate = stats
            .responses
            .iter()
            .filter(|r| r.status == ResponseStatus::Ok)
            .count() as f64
            / len;
    }

    fn evict_least_recently_seen(&mut self) {
        let oldest = self
            .patterns
            .iter()
            .min_by_key(|(_, stats)| stats.last_seen)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.patterns.remove(&key);
        }
    }

    /// Top patterns by lifetime occurrence count, descending.
    pub fn top_patterns(&self, n: usize) -> Vec<(&String, &PatternStats)> {
        let mut entries: Vec<_> = self.patterns.iter().collect();
        entries.sort_by(|a, b| b.1.occurrences.cmp(&a.1.occurrences));
        entries.truncate(n);
        entries
    }

    /// Iterate all learned patterns.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PatternStats)> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
