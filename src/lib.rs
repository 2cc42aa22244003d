pub mod analysis;
pub mod api;
pub mod collector;
pub mod config;
pub mod error;
pub mod jokes;
pub mod random;
pub mod telemetry;

use std::sync::Arc;
use chrono::{DateTime, SecondsFormat, Utc};
use collector::{collect, DebugRecord, DocumentRoot, NavigationTiming, ResourceEntry};
use config::Config;
use random::{Entropy, SeededEntropy, ThreadEntropy};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub entropy: Arc<dyn Entropy>,
}

impl AppState {
    /// Picks the random source from the config: seeded when `RANDOM_SEED`
    /// is set, thread-local otherwise.
    pub fn from_config(config: Config) -> Self {
        let entropy: Arc<dyn Entropy> = match config.random_seed {
            Some(seed) => Arc::new(SeededEntropy::new(seed)),
            None => Arc::new(ThreadEntropy),
        };
        Self::with_entropy(config, entropy)
    }

    pub fn with_entropy(config: Config, entropy: Arc<dyn Entropy>) -> Self {
        Self {
            config: Arc::new(config),
            entropy,
        }
    }

    /// Collects a page-load snapshot tagged with the configured environment.
    pub fn collect_debug_record(
        &self,
        timing: &NavigationTiming,
        resources: &[ResourceEntry],
        root: &DocumentRoot,
    ) -> DebugRecord {
        collect(timing, resources, root, &self.config.environment, Utc::now())
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
