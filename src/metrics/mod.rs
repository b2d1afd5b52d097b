//! Counters accumulated by a frame across its lifetime.
//!
//! A frame is single-threaded with exactly one writer, so the counters live
//! as a plain field on the frame and snapshots are taken on demand.

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

#[derive(Debug, Default, Clone)]
pub struct FrameMetrics {
    recomputes: u64,
    child_writes: u64,
    empty_skips: u64,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_recompute(&mut self, children: usize) {
        self.recomputes = self.recomputes.saturating_add(1);
        self.child_writes = self.child_writes.saturating_add(children as u64);
    }

    pub fn record_empty_skip(&mut self) {
        self.empty_skips = self.empty_skips.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            recomputes: self.recomputes,
            child_writes: self.child_writes,
            empty_skips: self.empty_skips,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub recomputes: u64,
    pub child_writes: u64,
    pub empty_skips: u64,
}

impl MetricsSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        let mut fields = LogFields::new();
        fields.insert("recomputes".to_string(), json!(self.recomputes));
        fields.insert("child_writes".to_string(), json!(self.child_writes));
        fields.insert("empty_skips".to_string(), json!(self.empty_skips));
        LogEvent::with_fields(LogLevel::Info, target.to_string(), "frame_metrics", fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recompute_accumulates_child_writes() {
        let mut metrics = FrameMetrics::new();
        metrics.record_recompute(3);
        metrics.record_recompute(1);
        metrics.record_empty_skip();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.recomputes, 2);
        assert_eq!(snapshot.child_writes, 4);
        assert_eq!(snapshot.empty_skips, 1);
    }

    #[test]
    fn snapshot_renders_log_event() {
        let mut metrics = FrameMetrics::new();
        metrics.record_recompute(2);
        let event = metrics.snapshot().to_log_event("slotgrid::frame.app");
        assert_eq!(event.message, "frame_metrics");
        assert_eq!(event.fields["recomputes"], json!(1));
        assert_eq!(event.fields["child_writes"], json!(2));
    }
}
