// Startup replay strategies.
//
// A store rebuilds its window and counters from the persisted lines exactly once,
// before it is reachable. Two strategies exist because the two stores need
// different things from their history:
// - FullAggregate parses every line; only parsable lines count, per label.
// - TailCache counts every non-blank line and only parses the window-sized tail.

use super::aggregator::Aggregator;
use super::record::{EventRecord, RecordPayload};
use super::recent_window::RecentWindow;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryReport {
    pub lines_read: usize,
    pub restored: usize,
    pub skipped: usize,
}

#[derive(Debug)]
pub struct Recovered<P> {
    pub window: RecentWindow<EventRecord<P>>,
    pub aggregator: Aggregator,
    pub report: RecoveryReport,
}

pub trait Recovery: Default + Send + Sync + 'static {
    const NAME: &'static str;

    /// Fresh counters for a store using this strategy.
    fn aggregator(&self) -> Aggregator;

    /// Rebuilds in-memory state from `lines`, given in file order.
    fn replay<P: RecordPayload>(&self, lines: &[String], capacity: usize) -> Recovered<P>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FullAggregate;

#[derive(Debug, Default, Clone, Copy)]
pub struct TailCache;

impl Recovery for FullAggregate {
    const NAME: &'static str = "full-aggregate";

    fn aggregator(&self) -> Aggregator {
        Aggregator::keyed()
    }

    fn replay<P: RecordPayload>(&self, lines: &[String], capacity: usize) -> Recovered<P> {
        let mut window = RecentWindow::new(capacity);
        let mut aggregator = self.aggregator();
        let mut report = RecoveryReport::default();

        for (index, line) in non_blank(lines) {
            report.lines_read += 1;
            match EventRecord::<P>::from_wire(line.as_bytes()) {
                Ok(record) => {
                    aggregator.increment(record.label());
                    window.push_front(record);
                    report.restored += 1;
                }
                Err(error) => {
                    report.skipped += 1;
                    tracing::warn!(line = index + 1, %error, "skipping unreadable history line");
                }
            }
        }

        Recovered {
            window,
            aggregator,
            report,
        }
    }
}

impl Recovery for TailCache {
    const NAME: &'static str = "tail-cache";

    fn aggregator(&self) -> Aggregator {
        Aggregator::unkeyed()
    }

    fn replay<P: RecordPayload>(&self, lines: &[String], capacity: usize) -> Recovered<P> {
        let mut window = RecentWindow::new(capacity);
        let mut aggregator = self.aggregator();
        let mut report = RecoveryReport::default();

        let present: Vec<(usize, &String)> = non_blank(lines).collect();
        report.lines_read = present.len();
        aggregator.restore_total(present.len() as u64);

        let tail = &present[present.len().saturating_sub(capacity)..];
        for (index, line) in tail {
            match EventRecord::<P>::from_wire(line.as_bytes()) {
                Ok(record) => {
                    window.push_front(record);
                    report.restored += 1;
                }
                Err(error) => {
                    report.skipped += 1;
                    tracing::warn!(line = index + 1, %error, "skipping unreadable cached line");
                }
            }
        }

        Recovered {
            window,
            aggregator,
            report,
        }
    }
}

fn non_blank(lines: &[String]) -> impl Iterator<Item = (usize, &String)> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
}
