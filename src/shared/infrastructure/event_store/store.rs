// EventStore facade.
//
// Locking
// - `state` guards the window, the counters and the clock. Reads only take this lock.
// - `persister` guards the file handle. `record` takes it first and holds it across
//   the in-memory update and the write, so file order always matches update order,
//   while readers never wait on disk I/O.

use super::aggregator::Aggregator;
use super::persister::JsonlPersister;
use super::recent_window::RecentWindow;
use super::record::{EventRecord, RecordPayload};
use super::recovery::{Recovered, Recovery};
use super::{EventStoreError, StoreSnapshot};
use crate::shared::core::primitives::MonotonicClock;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug)]
struct StoreState<P> {
    window: RecentWindow<EventRecord<P>>,
    aggregator: Aggregator,
    clock: MonotonicClock,
}

pub struct EventStore<P: RecordPayload, R: Recovery> {
    path: PathBuf,
    state: RwLock<StoreState<P>>,
    persister: Mutex<JsonlPersister>,
    persist_failures: AtomicU64,
    recovery: PhantomData<fn() -> R>,
}

impl<P: RecordPayload, R: Recovery> EventStore<P, R> {
    /// Binds a store to `path` and replays whatever history it holds.
    ///
    /// Only a missing, uncreatable parent directory fails construction. An unreadable
    /// log is logged and the store starts empty.
    pub async fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, EventStoreError> {
        let path = path.into();
        let mut persister = JsonlPersister::create(&path)
            .await
            .map_err(|source| EventStoreError::CreateDir {
                path: path.clone(),
                source,
            })?;

        let lines = match persister.read_lines().await {
            Ok(lines) => lines.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "event log unreadable, starting empty");
                Vec::new()
            }
        };
        let Recovered {
            window,
            aggregator,
            report,
        } = R::default().replay::<P>(&lines, capacity);

        let mut clock = MonotonicClock::new();
        if let Some(latest) = window.front() {
            clock.observe(latest.timestamp());
        }

        tracing::info!(
            path = %path.display(),
            mode = R::NAME,
            lines_read = report.lines_read,
            restored = report.restored,
            skipped = report.skipped,
            total = aggregator.total(),
            "event store recovered"
        );

        Ok(Self {
            path,
            state: RwLock::new(StoreState {
                window,
                aggregator,
                clock,
            }),
            persister: Mutex::new(persister),
            persist_failures: AtomicU64::new(0),
            recovery: PhantomData,
        })
    }

    /// Stamps, stores and persists one record, returning what was stored.
    ///
    /// Never fails: if the write does not reach disk the record still lives in
    /// memory for this process and the failure is logged and counted.
    pub async fn record(&self, text: &str, label: impl Into<String>, payload: P) -> EventRecord<P> {
        let mut persister = self.persister.lock().await;

        let record = {
            let mut state = self.state.write().await;
            let timestamp = state.clock.next_timestamp();
            let record = EventRecord::new(text, label, payload, timestamp);
            state.window.push_front(record.clone());
            state.aggregator.increment(record.label());
            record
        };

        if let Err(error) = persister.append(&record.to_line()).await {
            let failures = self.persist_failures.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::error!(
                path = %self.path.display(),
                %error,
                failures,
                "failed to persist record, keeping it in memory only"
            );
        }

        record
    }

    /// Up to `limit` records (all when `None`), most recent first, as plain views.
    pub async fn recent(&self, limit: Option<usize>) -> Vec<P::Line> {
        let records = self.state.read().await.window.to_ordered(limit);
        records.iter().map(EventRecord::to_line).collect()
    }

    pub async fn snapshot(&self) -> StoreSnapshot<P::Line> {
        self.snapshot_limited(None).await
    }

    pub async fn snapshot_limited(&self, limit: Option<usize>) -> StoreSnapshot<P::Line> {
        let (total, distribution, records) = {
            let state = self.state.read().await;
            (
                state.aggregator.total(),
                state.aggregator.distribution(),
                state.window.to_ordered(limit),
            )
        };
        StoreSnapshot {
            total,
            distribution,
            recent: records.iter().map(EventRecord::to_line).collect(),
        }
    }

    pub async fn count(&self) -> u64 {
        self.state.read().await.aggregator.total()
    }

    /// Zeroes the counters. The window and the file on disk are left as they are.
    pub async fn reset(&self) {
        self.state.write().await.aggregator.reset();
        tracing::info!(path = %self.path.display(), "event store counters reset");
    }

    pub fn persist_failures(&self) -> u64 {
        self.persist_failures.load(Ordering::Relaxed)
    }
}
