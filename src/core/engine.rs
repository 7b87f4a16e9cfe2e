use crate::core::english::EnglishGematriaEngine;
use crate::core::hebrew::HebrewGematriaEngine;
use crate::core::types::{Computation, Report, Scheme};
use crate::history::{RecentResultsEntry, RecentResultsLog, DEFAULT_CAPACITY, DEFAULT_DISPLAY_LIMIT};
use crate::share::ShareQuery;
use tracing::info;

/// Tunables for a calculator session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How many recent calculations are kept.
    pub history_capacity: usize,
    /// Characters of input shown per recent entry before the ellipsis.
    pub display_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

// One calculator session: both scheme engines plus this session's own log.
#[derive(Debug, Clone)]
pub struct GematriaEngine {
    pub hebrew: HebrewGematriaEngine,
    pub english: EnglishGematriaEngine,
    recent: RecentResultsLog,
}

impl Default for GematriaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GematriaEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            hebrew: HebrewGematriaEngine::new(),
            english: EnglishGematriaEngine::new(),
            recent: RecentResultsLog::new(config.history_capacity, config.display_limit),
        }
    }

    pub fn compute_hebrew(&self, text: &str) -> Computation {
        self.hebrew.compute(text)
    }

    pub fn compute_english(&self, text: &str) -> Computation {
        self.english.compute(text)
    }

    /// Runs the engine for `scheme` without touching the log.
    pub fn compute(&self, scheme: Scheme, text: &str) -> Computation {
        match scheme {
            Scheme::Hebrew => self.compute_hebrew(text),
            Scheme::English => self.compute_english(text),
        }
    }

    /// Computes, records the primary value in the recent log and returns a
    /// full report for display.
    pub fn calculate(&mut self, scheme: Scheme, text: &str) -> Report {
        let Computation { totals, breakdown } = self.compute(scheme, text);
        let primary = totals.primary_value(scheme);
        if self.record_recent(text, scheme, primary) {
            info!(scheme = scheme.key(), primary, "calculation recorded");
        }
        Report {
            scheme,
            direction: scheme.direction(),
            text: text.to_string(),
            char_count: text.chars().count(),
            totals,
            breakdown,
            share: ShareQuery::new(scheme, text).to_query(),
        }
    }

    pub fn record_recent(&mut self, text: &str, scheme: Scheme, primary_value: u64) -> bool {
        self.recent.record(text, scheme, primary_value)
    }

    /// Recent calculations, most recent first.
    pub fn recent(&self) -> Vec<RecentResultsEntry> {
        self.recent.to_vec()
    }

    pub fn recent_log(&self) -> &RecentResultsLog {
        &self.recent
    }
}
