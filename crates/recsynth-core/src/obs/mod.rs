//! Observability: synthesis counters and the sink they flow through.
//!
//! Generation logic never touches `metrics` directly; it only emits
//! `MetricsEvent`s into a `MetricsSink`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, RecordCounters};
pub use sink::{GlobalMetricsSink, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};
