//! # Analytics Emitter
//!
//! Pushes event records into the data layer.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    dataLayer.push                                       │
//! │                                                                         │
//! │  command ──► AnalyticsEvent ──► AnalyticsEmitter::emit                  │
//! │                                      │                                  │
//! │                                      ├──► tracing: always logged        │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                         Option<Box<dyn DataLayerSink>>                  │
//! │                         ├── None ─────────► dropped (no tag manager)    │
//! │                         ├── SharedDataLayer ► Vec of records            │
//! │                         └── JsonLinesSink ──► one JSON line per record  │
//! │                                                                         │
//! │  emit() never fails: analytics must not block the storefront.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use storefront_core::AnalyticsEvent;
use tracing::{debug, info, warn};

use crate::error::SinkError;

// =============================================================================
// Sink Trait
// =============================================================================

/// Anything that can receive data-layer records.
///
/// Sinks are append-only; the storefront never reads records back.
pub trait DataLayerSink {
    fn push(&mut self, record: Value) -> Result<(), SinkError>;
}

// =============================================================================
// Shared In-Memory Data Layer
// =============================================================================

/// An in-memory data layer that can be cloned and inspected.
///
/// One clone goes into the emitter, another stays with whoever wants to
/// look at the records (the shell's `datalayer` command, tests).
#[derive(Debug, Clone, Default)]
pub struct SharedDataLayer {
    records: Arc<Mutex<Vec<Value>>>,
}

impl SharedDataLayer {
    pub fn new() -> Self {
        SharedDataLayer::default()
    }

    /// Copies out every record pushed so far.
    pub fn records(&self) -> Vec<Value> {
        self.with_records(|records| records.to_vec())
    }

    /// Records whose `event` field equals `name`.
    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.with_records(|records| {
            records
                .iter()
                .filter(|r| r.get("event").and_then(Value::as_str) == Some(name))
                .cloned()
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.with_records(|records| records.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Executes a function with read access to the records.
    ///
    /// A poisoned lock still holds valid records (pushes are single
    /// appends), so it is read through.
    pub fn with_records<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Value]) -> R,
    {
        let records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&records)
    }
}

impl DataLayerSink for SharedDataLayer {
    fn push(&mut self, record: Value) -> Result<(), SinkError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?;
        records.push(record);
        Ok(())
    }
}

// =============================================================================
// JSON Lines Sink
// =============================================================================

/// Writes each record as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        JsonLinesSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DataLayerSink for JsonLinesSink<W> {
    fn push(&mut self, record: Value) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

// =============================================================================
// Emitter
// =============================================================================

/// Formats events and forwards them to the data layer, if there is one.
pub struct AnalyticsEmitter {
    sink: Option<Box<dyn DataLayerSink>>,
}

impl AnalyticsEmitter {
    /// Creates an emitter. `None` means the data layer is absent.
    pub fn new(sink: Option<Box<dyn DataLayerSink>>) -> Self {
        AnalyticsEmitter { sink }
    }

    /// An emitter with no data layer behind it.
    pub fn detached() -> Self {
        AnalyticsEmitter { sink: None }
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Logs the event and appends `{event, ...payload}` to the sink.
    ///
    /// Missing sink: no-op. Failing sink: warning, then dropped.
    pub fn emit(&mut self, event: AnalyticsEvent) {
        let record = event.to_record();
        info!(event = event.name(), record = %record, "dataLayer.push");

        let Some(sink) = self.sink.as_mut() else {
            debug!(event = event.name(), "No data layer, record dropped");
            return;
        };

        if let Err(err) = sink.push(record) {
            warn!(event = event.name(), error = %err, "Data layer push failed");
        }
    }
}

impl std::fmt::Debug for AnalyticsEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsEmitter")
            .field("has_sink", &self.has_sink())
            .finish()
    }
}
