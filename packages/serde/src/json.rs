//! JSON rendering of ordered payloads.

use serde_json::Value as JsonValue;

use formbind_core::PayloadSink;

/// A payload sink that accumulates a JSON array of `[name, value]` pairs.
///
/// Pairs rather than an object, so duplicate names and insertion order
/// survive the trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPayload {
    pairs: Vec<JsonValue>,
}

impl JsonPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The accumulated array.
    pub fn into_json(self) -> JsonValue {
        JsonValue::Array(self.pairs)
    }
}

impl PayloadSink for JsonPayload {
    fn append_pair(&mut self, name: &str, value: &str) {
        self.pairs.push(JsonValue::Array(vec![
            JsonValue::String(name.to_string()),
            JsonValue::String(value.to_string()),
        ]));
    }
}

/// Render owned payload pairs as a JSON array of `[name, value]` pairs.
///
/// ```rust
/// use formbind_serde::payload_to_json;
///
/// let pairs = vec![("a".to_string(), "1".to_string())];
/// assert_eq!(payload_to_json(&pairs).to_string(), r#"[["a","1"]]"#);
/// ```
pub fn payload_to_json(pairs: &[(String, String)]) -> JsonValue {
    let mut payload = JsonPayload::new();
    for (name, value) in pairs {
        payload.append_pair(name, value);
    }
    payload.into_json()
}
