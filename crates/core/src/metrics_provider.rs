//! Metrics provider trait and query type

use std::time::Duration;

/// One time-series lookup: the latest value of `param` reported by `host`,
/// averaged over `window`, looking back at most `lookback`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricQuery {
    /// Sensor kind; the measurement the host writes to
    pub kind: String,
    pub host: String,
    pub param: String,
    pub lookback: Duration,
    pub window: Duration,
}

impl MetricQuery {
    pub fn new(
        kind: impl Into<String>,
        host: impl Into<String>,
        param: impl Into<String>,
        lookback_min: u32,
        window_min: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            host: host.into(),
            param: param.into(),
            lookback: Duration::from_secs(u64::from(lookback_min) * 60),
            window: Duration::from_secs(u64::from(window_min) * 60),
        }
    }

    pub fn window_min(&self) -> u64 {
        self.window.as_secs() / 60
    }
}

/// Trait for all metric sources
///
/// A provider never fails past its own boundary: no data, query errors and
/// timeouts are all reported as `None`. Calls may block.
pub trait MetricsProvider {
    fn fetch(&self, query: &MetricQuery) -> Option<f64>;
}

impl<F> MetricsProvider for F
where
    F: Fn(&MetricQuery) -> Option<f64>,
{
    fn fetch(&self, query: &MetricQuery) -> Option<f64> {
        self(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_windows_in_minutes() {
        let query = MetricQuery::new("rasp", "rasp-meter-5", "power", 360, 180);
        assert_eq!(query.lookback, Duration::from_secs(6 * 60 * 60));
        assert_eq!(query.window_min(), 180);
    }

    #[test]
    fn test_closure_provider() {
        let provider = |query: &MetricQuery| (query.param == "temp").then_some(21.0);
        assert_eq!(provider.fetch(&MetricQuery::new("rasp", "h", "temp", 60, 3)), Some(21.0));
        assert_eq!(provider.fetch(&MetricQuery::new("rasp", "h", "humi", 60, 3)), None);
    }
}
