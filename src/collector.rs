//! Page-load debug snapshot.
//!
//! `collect` turns the browser's navigation timing readings into a
//! [`DebugRecord`]. The record is handed to whoever needs it by reference;
//! [`DebugConsole`] exposes the console helpers on top of it.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::iso_timestamp;

pub const DARK_CLASS: &str = "dark";

/// Millisecond epoch readings from the navigation timing API.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationTiming {
    pub navigation_start: u64,
    pub dom_content_loaded_event_end: u64,
    pub load_event_end: u64,
}

/// One resource timing entry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub name: String,
    pub initiator_type: String,
    pub duration: f64,
}

/// Class list of the document's root element.
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if !self.classes.remove(class) {
            self.classes.insert(class.to_string());
        }
        self.has_class(class)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub load_time: i64,
    pub dom_ready: i64,
    pub resources: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub tailwind: bool,
    pub typescript: bool,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DebugRecord {
    pub performance: PerformanceData,
    pub timestamp: String,
    pub environment: String,
    pub features: FeatureFlags,
}

/// Body the landing page posts to the analyze endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub performance: PerformanceData,
    pub timestamp: String,
    pub user_action: String,
}

impl DebugRecord {
    pub fn analysis_payload(&self, user_action: &str, now: DateTime<Utc>) -> AnalysisPayload {
        AnalysisPayload {
            performance: self.performance,
            timestamp: iso_timestamp(now),
            user_action: user_action.to_string(),
        }
    }
}

pub fn collect(
    timing: &NavigationTiming,
    resources: &[ResourceEntry],
    root: &DocumentRoot,
    environment: &str,
    now: DateTime<Utc>,
) -> DebugRecord {
    // Signed on purpose: load_event_end is 0 until the load event fires.
    let since_start = |end: u64| end as i64 - timing.navigation_start as i64;

    let performance = PerformanceData {
        load_time: since_start(timing.load_event_end),
        dom_ready: since_start(timing.dom_content_loaded_event_end),
        resources: resources.len(),
    };

    let record = DebugRecord {
        performance,
        timestamp: iso_timestamp(now),
        environment: environment.to_string(),
        features: FeatureFlags {
            tailwind: true,
            typescript: true,
            dark_mode: root.has_class(DARK_CLASS),
        },
    };

    tracing::debug!(
        load_time = performance.load_time,
        dom_ready = performance.dom_ready,
        resources = performance.resources,
        "debug record collected"
    );

    record
}

/// A fetch or XHR seen in the resource timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub name: String,
    pub duration_ms: u64,
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Call: {} - {}ms", self.name, self.duration_ms)
    }
}

pub fn api_calls(entries: &[ResourceEntry]) -> Vec<ApiCall> {
    entries
        .iter()
        .filter(|entry| matches!(entry.initiator_type.as_str(), "fetch" | "xmlhttprequest"))
        .map(|entry| ApiCall {
            name: entry.name.clone(),
            duration_ms: entry.duration.max(0.0).round() as u64,
        })
        .collect()
}

/// Console helpers over a collected record.
pub struct DebugConsole<'a> {
    record: &'a DebugRecord,
    root: &'a mut DocumentRoot,
}

impl<'a> DebugConsole<'a> {
    pub fn new(record: &'a DebugRecord, root: &'a mut DocumentRoot) -> Self {
        Self { record, root }
    }

    pub fn show_performance(&self) -> String {
        let perf = &self.record.performance;
        render_table(&[
            ("Page Load Time", format!("{}ms", perf.load_time)),
            ("DOM Ready", format!("{}ms", perf.dom_ready)),
            ("Total Resources", perf.resources.to_string()),
        ])
    }

    pub fn show_features(&self) -> String {
        let features = &self.record.features;
        render_table(&[
            ("tailwind", features.tailwind.to_string()),
            ("typescript", features.typescript.to_string()),
            ("darkMode", features.dark_mode.to_string()),
        ])
    }

    /// Flips the root's dark class. The record keeps its page-load value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        let enabled = self.root.toggle_class(DARK_CLASS);
        tracing::info!("Dark mode: {}", enabled);
        enabled
    }
}

fn render_table(rows: &[(&str, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in rows {
        out.push_str(&format!("{:<width$} | {}\n", key, value, width = key_width));
    }
    out
}
