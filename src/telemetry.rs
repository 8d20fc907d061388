//! Best-effort harvesting of the telemetry file the delegate writes back.
//!
//! Nothing here can fail the launch: unreadable or malformed files and
//! unexpected field types are logged at debug level and skipped.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

/// JSON key for the acquired artifacts summary
pub const ACQUIRED_ARTIFACTS_KEY: &str = "acquired_artifacts";

/// JSON key for the activated artifacts summary
pub const ACTIVATED_ARTIFACTS_KEY: &str = "activated_artifacts";

/// String-valued metrics the delegate can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StringMetric {
    AcquiredArtifacts,
    ActivatedArtifacts,
}

impl StringMetric {
    pub fn key(self) -> &'static str {
        match self {
            StringMetric::AcquiredArtifacts => ACQUIRED_ARTIFACTS_KEY,
            StringMetric::ActivatedArtifacts => ACTIVATED_ARTIFACTS_KEY,
        }
    }
}

impl fmt::Display for StringMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Receiver of harvested metrics
pub trait MetricsSink {
    fn track_string(&mut self, metric: StringMetric, value: &str);
}

/// In-memory sink; the last value tracked for a metric wins
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetricsCollector {
    strings: BTreeMap<StringMetric, String>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: StringMetric) -> Option<&str> {
        self.strings.get(&metric).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StringMetric, &str)> {
        self.strings.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl MetricsSink for MetricsCollector {
    fn track_string(&mut self, metric: StringMetric, value: &str) {
        self.strings.insert(metric, value.to_string());
    }
}

/// Whether metrics are collected for this process, and where they go
pub struct MetricsContext<'a> {
    pub enabled: bool,
    pub sink: &'a mut dyn MetricsSink,
}

impl<'a> MetricsContext<'a> {
    pub fn new(enabled: bool, sink: &'a mut dyn MetricsSink) -> Self {
        Self { enabled, sink }
    }
}

/// Read `telemetry_file_path` and forward the known fields to `sink`
pub fn track_telemetry(telemetry_file_path: &Path, sink: &mut dyn MetricsSink) {
    let content = match fs::read_to_string(telemetry_file_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Telemetry file couldn't be read: {}", e);
            return;
        }
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(serde_json::Value::Object(object)) => object,
        Ok(_) => {
            debug!("Telemetry file couldn't be parsed: expected a JSON object");
            return;
        }
        Err(e) => {
            debug!("Telemetry file couldn't be parsed: {}", e);
            return;
        }
    };

    for metric in [StringMetric::AcquiredArtifacts, StringMetric::ActivatedArtifacts] {
        match parsed.get(metric.key()) {
            Some(serde_json::Value::String(value)) => sink.track_string(metric, value),
            Some(_) => debug!("{} was not a string", metric),
            None => debug!("No {} reported", metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn harvest(content: &str) -> MetricsCollector {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("telemetry.txt");
        fs::write(&path, content).unwrap();
        let mut collector = MetricsCollector::new();
        track_telemetry(&path, &mut collector);
        collector
    }

    #[test]
    fn test_both_fields() {
        let collector =
            harvest(r#"{"acquired_artifacts": "cmake:3.27", "activated_artifacts": "ninja:1.11"}"#);
        assert_eq!(collector.len(), 2);
        assert_eq!(
            collector.get(StringMetric::AcquiredArtifacts),
            Some("cmake:3.27")
        );
        assert_eq!(
            collector.get(StringMetric::ActivatedArtifacts),
            Some("ninja:1.11")
        );
    }

    #[test]
    fn test_one_field() {
        let collector = harvest(r#"{"activated_artifacts": "ninja:1.11"}"#);
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.get(StringMetric::AcquiredArtifacts), None);
    }

    #[test]
    fn test_unparsable_file() {
        assert!(harvest("not json at all {").is_empty());
    }

    #[test]
    fn test_non_object_file() {
        assert!(harvest(r#"["acquired_artifacts"]"#).is_empty());
    }

    #[test]
    fn test_non_string_field_skipped_other_kept() {
        let collector =
            harvest(r#"{"acquired_artifacts": 42, "activated_artifacts": "ninja:1.11"}"#);
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.get(StringMetric::AcquiredArtifacts), None);
        assert_eq!(
            collector.get(StringMetric::ActivatedArtifacts),
            Some("ninja:1.11")
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let collector = harvest(r#"{"other": "x", "acquired_artifacts": "a"}"#);
        assert_eq!(collector.iter().collect::<Vec<_>>(), vec![(
            StringMetric::AcquiredArtifacts,
            "a"
        )]);
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut collector = MetricsCollector::new();
        track_telemetry(&temp.path().join("never-written.txt"), &mut collector);
        assert!(collector.is_empty());
    }
}
