//! Prometheus exposition of process uptime.
//!
//! Only the elapsed time of this process is exported; the gauges are
//! refreshed from the [`StatusReporter`] right before each scrape.
//!
//! The exporter owns its recorder instead of installing a global one, so
//! the gauges written at scrape time always land in the registry that is
//! rendered.

use std::sync::Arc;

use metrics::{describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};
use time::OffsetDateTime;
use tracing::debug;

use crate::status::uptime::elapsed_seconds;
use crate::status::StatusReporter;

// === Metric Name Constants ===

/// Process uptime gauge metric name.
pub const METRIC_UPTIME_SECONDS: &str = "process_uptime_seconds";
/// Process start time gauge metric name.
pub const METRIC_START_TIME_SECONDS: &str = "process_start_time_seconds";
/// Build info gauge metric name.
pub const METRIC_APP_INFO: &str = "app_info";

/// Register metric descriptions with the current recorder.
pub fn init_metrics() {
    describe_gauge!(
        METRIC_UPTIME_SECONDS,
        "Seconds elapsed since the process started"
    );
    describe_gauge!(
        METRIC_START_TIME_SECONDS,
        "Process start time as a Unix timestamp"
    );
    describe_gauge!(
        METRIC_APP_INFO,
        "Constant 1, labelled with application name and version"
    );

    debug!("Metrics initialized");
}

/// Refresh the gauges on the current recorder from the reporter.
pub fn record_status(reporter: &StatusReporter) {
    let metadata = reporter.metadata();
    let start = reporter.start_time();
    let uptime = elapsed_seconds(start, OffsetDateTime::now_utc());

    gauge!(METRIC_UPTIME_SECONDS).set(uptime as f64);
    gauge!(METRIC_START_TIME_SECONDS).set(start.unix_timestamp() as f64);
    gauge!(
        METRIC_APP_INFO,
        "application" => metadata.service_name.clone(),
        "version" => metadata.version.clone()
    )
    .set(1.0);
}

/// Prometheus registry dedicated to the uptime gauges.
#[derive(Clone)]
pub struct UptimeExporter {
    recorder: Arc<PrometheusRecorder>,
}

impl UptimeExporter {
    /// Build a recorder with the gauge descriptions registered.
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        metrics::with_local_recorder(&recorder, init_metrics);
        Self {
            recorder: Arc::new(recorder),
        }
    }

    /// Refresh the gauges from `reporter` and render the exposition text.
    pub fn render(&self, reporter: &StatusReporter) -> String {
        metrics::with_local_recorder(self.recorder.as_ref(), || record_status(reporter));
        self.recorder.handle().render()
    }
}

impl Default for UptimeExporter {
    fn default() -> Self {
        Self::new()
    }
}
