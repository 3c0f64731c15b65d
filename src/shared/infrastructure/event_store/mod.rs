// Durable event store: one JSONL file per store, plus a bounded in-memory view.
//
// Purpose
// - Record predictions and feedback so that dashboards read from memory and
//   restarts rebuild the same view from disk.
//
// Responsibilities
// - record, recent, snapshot, count, reset behind one thread-safe facade.
// - Keep the file append-only; a failed write degrades to memory-only.

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

pub mod aggregator;
pub mod persister;
pub mod recent_window;
pub mod record;
pub mod recovery;
pub mod store;

pub use record::{EventRecord, RecordPayload};
pub use recovery::{FullAggregate, Recovery, TailCache};
pub use store::EventStore;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("cannot create directory for {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Consistent read of counters and window taken at a single instant.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StoreSnapshot<L> {
    pub total: u64,
    pub distribution: BTreeMap<String, f64>,
    pub recent: Vec<L>,
}
