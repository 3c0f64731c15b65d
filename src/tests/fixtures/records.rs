// Minimal payload used to exercise the generic event store in isolation.

use crate::shared::infrastructure::event_store::{EventRecord, RecordPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Note(pub Option<String>);

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteLine {
    pub text: String,
    pub label: String,
    pub note: Option<String>,
    pub timestamp: String,
}

impl RecordPayload for Note {
    type Line = NoteLine;

    const TEXT_LIMIT: Option<usize> = Some(10);

    fn to_line(record: &EventRecord<Self>) -> NoteLine {
        NoteLine {
            text: record.text().to_string(),
            label: record.label().to_string(),
            note: record.payload().0.clone(),
            timestamp: record.timestamp().to_string(),
        }
    }

    fn from_line(line: NoteLine) -> EventRecord<Self> {
        EventRecord::restore(line.text, line.label, Note(line.note), line.timestamp)
    }
}

pub fn note_line(text: &str, label: &str) -> String {
    serde_json::json!({
        "text": text,
        "label": label,
        "note": null,
        "timestamp": "2025-01-01T00:00:00.000000+00:00",
    })
    .to_string()
}
