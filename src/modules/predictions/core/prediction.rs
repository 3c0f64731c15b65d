use crate::shared::infrastructure::event_store::record::DISPLAY_TEXT_LIMIT;
use crate::shared::infrastructure::event_store::{
    EventRecord, EventStore, FullAggregate, RecordPayload,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Scores = BTreeMap<String, f64>;

/// Prediction history: keyed by predicted label, every parsable line counts on restart.
pub type StatsStore = EventStore<PredictionScores, FullAggregate>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub scores: Scores,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PredictionScores(pub Scores);

/// One line of `prediction_history.jsonl`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionLine {
    pub text: String,
    pub label: String,
    pub scores: Scores,
    pub timestamp: String,
}

impl RecordPayload for PredictionScores {
    type Line = PredictionLine;

    const TEXT_LIMIT: Option<usize> = Some(DISPLAY_TEXT_LIMIT);

    fn to_line(record: &EventRecord<Self>) -> PredictionLine {
        PredictionLine {
            text: record.text().to_string(),
            label: record.label().to_string(),
            scores: record.payload().0.clone(),
            timestamp: record.timestamp().to_string(),
        }
    }

    fn from_line(line: PredictionLine) -> EventRecord<Self> {
        EventRecord::restore(
            line.text,
            line.label,
            PredictionScores(line.scores),
            line.timestamp,
        )
    }
}

#[cfg(test)]
mod prediction_record_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_write_the_history_line_shape() {
        let scores = Scores::from([("negative".into(), 0.9), ("positive".into(), 0.1)]);
        let record = EventRecord::new(
            " Это плохо ",
            "negative",
            PredictionScores(scores),
            "2025-03-01T10:00:00.000000+00:00".into(),
        );
        let wire: serde_json::Value = serde_json::from_str(&record.to_wire().unwrap()).unwrap();
        assert_eq!(
            wire,
            json!({
                "text": "Это плохо",
                "label": "negative",
                "scores": {"negative": 0.9, "positive": 0.1},
                "timestamp": "2025-03-01T10:00:00.000000+00:00",
            })
        );
    }

    #[rstest]
    fn it_should_truncate_long_prediction_text() {
        let record = EventRecord::new(&"ы".repeat(300), "neutral", PredictionScores::default(), "t".into());
        assert_eq!(record.text().chars().count(), DISPLAY_TEXT_LIMIT);
        assert!(record.text().ends_with('…'));
    }

    #[rstest]
    fn it_should_load_lines_missing_scores() {
        let record = EventRecord::<PredictionScores>::from_wire(
            br#"{"text":"ok","label":"neutral","timestamp":"t"}"#,
        )
        .unwrap();
        assert_eq!(record.payload(), &PredictionScores::default());
    }

    #[rstest]
    fn it_should_reject_non_numeric_scores() {
        assert!(
            EventRecord::<PredictionScores>::from_wire(br#"{"label":"neutral","scores":{"a":"x"}}"#)
                .is_err()
        );
    }
}
