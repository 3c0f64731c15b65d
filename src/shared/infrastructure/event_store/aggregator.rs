use std::collections::BTreeMap;

/// Label set reported before any label has been observed.
pub const DEFAULT_LABELS: [&str; 3] = ["negative", "neutral", "positive"];

/// Running totals. When `keyed`, counts are also kept per label.
#[derive(Debug, Clone)]
pub struct Aggregator {
    keyed: bool,
    total: u64,
    per_label: BTreeMap<String, u64>,
}

impl Aggregator {
    pub fn keyed() -> Self {
        Self {
            keyed: true,
            total: 0,
            per_label: BTreeMap::new(),
        }
    }

    pub fn unkeyed() -> Self {
        Self {
            keyed: false,
            ..Self::keyed()
        }
    }

    pub fn increment(&mut self, label: &str) {
        self.total += 1;
        if self.keyed {
            *self.per_label.entry(label.to_string()).or_insert(0) += 1;
        }
    }

    /// Seeds the total from a raw line count; per-label counts are not derived.
    pub fn restore_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count_of(&self, label: &str) -> u64 {
        self.per_label.get(label).copied().unwrap_or(0)
    }

    /// Fraction of records per observed label, or the default labels at 0.0
    /// when nothing has been observed. Empty when unkeyed: without per-label
    /// counts there is no distribution to report.
    pub fn distribution(&self) -> BTreeMap<String, f64> {
        if !self.keyed {
            return BTreeMap::new();
        }
        if self.per_label.is_empty() {
            return DEFAULT_LABELS
                .iter()
                .map(|label| (label.to_string(), 0.0))
                .collect();
        }
        self.per_label
            .iter()
            .map(|(label, count)| {
                let fraction = if self.total > 0 {
                    *count as f64 / self.total as f64
                } else {
                    0.0
                };
                (label.clone(), fraction)
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.per_label.clear();
    }
}
