//! Session state — where the user is in a flow and what they have said.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Assistant,
    User,
}

/// One message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Accepted answers keyed by step id, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseRecord(IndexMap<String, String>);

impl ResponseRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer. A repeated key replaces the old answer and moves to the end.
    pub fn insert(&mut self, step_id: impl Into<String>, answer: impl Into<String>) {
        let step_id = step_id.into();
        self.0.shift_remove(&step_id);
        self.0.insert(step_id, answer.into());
    }

    pub fn get(&self, step_id: &str) -> Option<&str> {
        self.0.get(step_id).map(String::as_str)
    }

    /// Answer text, or an empty string when the step was never answered.
    pub fn text(&self, step_id: &str) -> String {
        self.get(step_id).unwrap_or_default().to_string()
    }

    /// Leading integer of the answer, or 0 when absent or unreadable.
    pub fn number(&self, step_id: &str) -> i64 {
        self.get(step_id).and_then(leading_integer).unwrap_or(0)
    }

    /// Comma-separated answer split into trimmed items. Empty items are
    /// kept; only an unanswered step gives an empty list.
    pub fn list(&self, step_id: &str) -> Vec<String> {
        match self.get(step_id) {
            Some(answer) => answer.split(',').map(|s| s.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResponseRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Read the integer at the start of `input`.
///
/// Leading whitespace and one sign are allowed; reading stops at the first
/// non-digit, so `"70%"` is 70 and `"40,000"` is 40. Returns `None` when no
/// digit follows or the value overflows.
pub fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Mutable state of one run through a flow.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub id: Uuid,
    pub current_step: String,
    pub record: ResponseRecord,
    pub transcript: Vec<TranscriptEntry>,
    pub completed: bool,
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// Fresh session positioned at `entry_step`.
    pub fn new(entry_step: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            current_step: entry_step.into(),
            record: ResponseRecord::new(),
            transcript: Vec::new(),
            completed: false,
            started_at: Utc::now(),
        }
    }

    pub fn push(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            message: message.into(),
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_answer_order() {
        let mut record = ResponseRecord::new();
        record.insert("name", "Alice");
        record.insert("email", "a@b.co");
        record.insert("phone", "");
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, ["name", "email", "phone"]);
    }

    #[test]
    fn overwrite_moves_key_to_end() {
        let mut record = ResponseRecord::new();
        record.insert("a", "1");
        record.insert("b", "2");
        record.insert("a", "3");
        let pairs: Vec<(&str, &str)> = record.iter().collect();
        assert_eq!(pairs, [("b", "2"), ("a", "3")]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn typed_reads_default_when_absent() {
        let record = ResponseRecord::new();
        assert_eq!(record.text("missing"), "");
        assert_eq!(record.number("missing"), 0);
        assert!(record.list("missing").is_empty());
    }

    #[test]
    fn list_splits_and_trims() {
        let record: ResponseRecord = [("skills", " typing ,  Excel,, sign language ")]
            .into_iter()
            .collect();
        assert_eq!(record.list("skills"), ["typing", "Excel", "", "sign language"]);
    }

    #[test]
    fn list_of_blank_answer_has_one_empty_item() {
        let record: ResponseRecord = [("skills", "")].into_iter().collect();
        assert_eq!(record.list("skills"), [""]);
    }

    #[test]
    fn number_reads_leading_digits() {
        let record: ResponseRecord = [("a", "25 km"), ("b", "no limit"), ("c", "  -3")]
            .into_iter()
            .collect();
        assert_eq!(record.number("a"), 25);
        assert_eq!(record.number("b"), 0);
        assert_eq!(record.number("c"), -3);
    }

    #[test]
    fn leading_integer_edge_cases() {
        assert_eq!(leading_integer("70"), Some(70));
        assert_eq!(leading_integer("70%"), Some(70));
        assert_eq!(leading_integer("40,000"), Some(40));
        assert_eq!(leading_integer("+5"), Some(5));
        assert_eq!(leading_integer("  12abc"), Some(12));
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("3.9"), Some(3));
        assert_eq!(leading_integer("99999999999999999999999"), None);
    }

    #[test]
    fn record_serializes_as_flat_object() {
        let record: ResponseRecord = [("name", "Alice"), ("email", "a@b.co")].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","email":"a@b.co"}"#);
    }

    #[test]
    fn new_session_is_empty() {
        let state = SessionState::new("start");
        assert_eq!(state.current_step, "start");
        assert!(state.record.is_empty());
        assert!(state.transcript.is_empty());
        assert!(!state.completed);
    }

    #[test]
    fn push_appends_transcript() {
        let mut state = SessionState::new("start");
        state.push(Speaker::Assistant, "Hi");
        state.push(Speaker::User, "Hello");
        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[1].speaker, Speaker::User);
        assert_eq!(state.transcript[1].message, "Hello");
    }
}
