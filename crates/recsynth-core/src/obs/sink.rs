//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
//! This module is the only bridge between synthesis and the counter state.

use crate::{model::MethodKind, obs::metrics};

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent<'a> {
    RecordStart {
        record: &'a str,
    },
    MethodEmitted {
        record: &'a str,
        kind: MethodKind,
    },
    RecordFinish {
        record: &'a str,
        methods: u64,
    },
    InvariantFailed {
        record: &'a str,
        method: Option<MethodKind>,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent<'_>);
}

///
/// GlobalMetricsSink
/// Default sink; writes into the thread-local counter state.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent<'_>) {
        match event {
            MetricsEvent::RecordStart { record } => {
                metrics::with_state_mut(|m| {
                    m.ops.records_started = m.ops.records_started.saturating_add(1);

                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.runs = entry.runs.saturating_add(1);
                });
            }

            MetricsEvent::MethodEmitted { record, kind } => {
                metrics::with_state_mut(|m| {
                    let slot = m.ops.method_slot(kind);
                    *slot = slot.saturating_add(1);

                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.methods = entry.methods.saturating_add(1);
                });
            }

            MetricsEvent::RecordFinish { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.records_finished = m.ops.records_finished.saturating_add(1);
                });
            }

            MetricsEvent::InvariantFailed { record, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.records_failed = m.ops.records_failed.saturating_add(1);

                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.failures = entry.failures.saturating_add(1);
                });
            }
        }
    }
}

/// Snapshot the counters of the current thread.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Clear the counters of the current thread.
pub fn metrics_reset_all() {
    metrics::reset();
}
