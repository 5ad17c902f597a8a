//! Static metrics provider
//!
//! Serves readings from memory, loaded from a JSON file or inserted in code.
//! Lookups match on kind, host, parameter and aggregation window; the
//! lookback is ignored since the values are already "the latest".

use anyhow::{Context, Result};
use sense_panel_core::{MetricQuery, MetricsProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One reading as stored in a readings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticEntry {
    pub kind: String,
    pub host: String,
    pub param: String,
    pub window_min: u64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EntryKey {
    kind: String,
    host: String,
    param: String,
    window_min: u64,
}

/// Static metrics provider
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    values: HashMap<EntryKey, f64>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = StaticEntry>) -> Self {
        let mut provider = Self::new();
        for entry in entries {
            provider.insert(&entry.kind, &entry.host, &entry.param, entry.window_min, entry.value);
        }
        provider
    }

    /// Load a JSON array of readings
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read readings file {}", path.display()))?;
        let entries: Vec<StaticEntry> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse readings file {}", path.display()))?;
        log::info!("loaded {} readings from {}", entries.len(), path.display());
        Ok(Self::from_entries(entries))
    }

    pub fn insert(&mut self, kind: &str, host: &str, param: &str, window_min: u64, value: f64) {
        self.values.insert(
            EntryKey {
                kind: kind.to_string(),
                host: host.to_string(),
                param: param.to_string(),
                window_min,
            },
            value,
        );
    }

    /// Builder-style `insert`
    pub fn with(
        mut self,
        kind: &str,
        host: &str,
        param: &str,
        window_min: u64,
        value: f64,
    ) -> Self {
        self.insert(kind, host, param, window_min, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl MetricsProvider for StaticProvider {
    fn fetch(&self, query: &MetricQuery) -> Option<f64> {
        let key = EntryKey {
            kind: query.kind.clone(),
            host: query.host.clone(),
            param: query.param.clone(),
            window_min: query.window_min(),
        };
        let value = self.values.get(&key).copied();
        if value.is_none() {
            log::debug!(
                "no data: sensor.{} host={} param={} window={}m",
                query.kind,
                query.host,
                query.param,
                query.window_min()
            );
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_matches_window() {
        let provider = StaticProvider::new().with("rasp", "rasp-meter-5", "power", 10, 42.0);
        assert_eq!(
            provider.fetch(&MetricQuery::new("rasp", "rasp-meter-5", "power", 360, 10)),
            Some(42.0)
        );
        assert_eq!(
            provider.fetch(&MetricQuery::new("rasp", "rasp-meter-5", "power", 360, 3)),
            None
        );
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"kind": "rasp", "host": "rasp-meter-1", "param": "temp", "window_min": 3, "value": 22.5}},
                {{"kind": "rasp", "host": "rasp-meter-1", "param": "humi", "window_min": 3, "value": 48.0}}
            ]"#
        )
        .unwrap();

        let provider = StaticProvider::load_from_path(file.path()).unwrap();
        assert_eq!(provider.len(), 2);
        assert_eq!(
            provider.fetch(&MetricQuery::new("rasp", "rasp-meter-1", "humi", 60, 3)),
            Some(48.0)
        );
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = StaticProvider::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse readings file"));
    }
}
