use crate::modules::predictions::core::prediction::Scores;
use crate::shared::infrastructure::event_store::{EventRecord, EventStore, RecordPayload, TailCache};
use serde::{Deserialize, Serialize};

/// User feedback: counted by raw lines on restart, only the cached tail is parsed.
pub type FeedbackStore = EventStore<FeedbackDetails, TailCache>;

/// Feedback-specific fields. The record label is the label the model predicted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeedbackDetails {
    pub user_label: Option<String>,
    pub scores: Option<Scores>,
    pub notes: Option<String>,
}

/// One line of `feedback.jsonl`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackLine {
    pub text: String,
    pub predicted_label: String,
    pub user_label: Option<String>,
    pub scores: Option<Scores>,
    pub notes: Option<String>,
    pub timestamp: String,
}

impl RecordPayload for FeedbackDetails {
    type Line = FeedbackLine;

    // Feedback text feeds retraining, so it is kept whole.
    const TEXT_LIMIT: Option<usize> = None;

    fn to_line(record: &EventRecord<Self>) -> FeedbackLine {
        let details = record.payload();
        FeedbackLine {
            text: record.text().to_string(),
            predicted_label: record.label().to_string(),
            user_label: details.user_label.clone(),
            scores: details.scores.clone(),
            notes: details.notes.clone(),
            timestamp: record.timestamp().to_string(),
        }
    }

    fn from_line(line: FeedbackLine) -> EventRecord<Self> {
        EventRecord::restore(
            line.text,
            line.predicted_label,
            FeedbackDetails {
                user_label: line.user_label,
                scores: line.scores,
                notes: line.notes,
            },
            line.timestamp,
        )
    }
}
