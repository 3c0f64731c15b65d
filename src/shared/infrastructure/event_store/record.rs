use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DISPLAY_TEXT_LIMIT: usize = 240;
pub const ELLIPSIS: char = '…';

/// Kind-specific part of a record, and how the whole record maps to one JSONL line.
///
/// `Line` is the persisted object and also the plain view handed to readers. Its
/// fields should default when missing so partially written history still loads.
pub trait RecordPayload: Clone + Send + Sync + 'static {
    type Line: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Maximum display length of `text`, or `None` to keep it whole.
    const TEXT_LIMIT: Option<usize>;

    fn to_line(record: &EventRecord<Self>) -> Self::Line;

    fn from_line(line: Self::Line) -> EventRecord<Self>;
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line is not a JSON object")]
    NotAnObject,

    #[error("invalid record: {0}")]
    Json(#[from] serde_json::Error),
}

/// One immutable observation. Fields are only readable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord<P> {
    text: String,
    label: String,
    payload: P,
    timestamp: String,
}

impl<P: RecordPayload> EventRecord<P> {
    /// Builds a fresh record, applying the payload's display policy to `text`.
    pub fn new(text: &str, label: impl Into<String>, payload: P, timestamp: String) -> Self {
        let text = match P::TEXT_LIMIT {
            Some(limit) => truncate_for_display(text, limit),
            None => text.trim().to_string(),
        };
        Self {
            text,
            label: label.into(),
            payload,
            timestamp,
        }
    }

    pub fn to_line(&self) -> P::Line {
        P::to_line(self)
    }

    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_line())
    }

    /// Parses one persisted line. Missing fields default; anything that is not
    /// an object, or holds a field of the wrong type, is rejected.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, ParseError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        let line: P::Line = serde_json::from_value(value)?;
        Ok(P::from_line(line))
    }
}

impl<P> EventRecord<P> {
    /// Reassembles a record exactly as stored, without any text policy.
    pub fn restore(text: String, label: String, payload: P, timestamp: String) -> Self {
        Self {
            text,
            label,
            payload,
            timestamp,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Trims `text` and, when it is longer than `limit` characters, keeps the first
/// `limit - 1` (right-trimmed) followed by an ellipsis. Lossy by construction.
pub fn truncate_for_display(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit.saturating_sub(1)).collect();
    let mut truncated = head.trim_end().to_string();
    truncated.push(ELLIPSIS);
    truncated
}
