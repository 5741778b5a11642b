//! Flat JSON representation of finished spans.
//!
//! One [`SpanRecord`] is written per line. Attributes are flattened into a
//! JSON object and log events recorded inside the span (every
//! `tracing::debug!` and friends) are kept with their offset from the span
//! start, so a single line tells the whole story of one event-handler call.

use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize)]
pub struct SpanRecord {
    pub service: String,
    pub name: String,
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub start_unix_ms: u128,
    pub duration_us: u128,
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub offset_us: u128,
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    pub fn from_span(service: &str, span: &SpanData) -> Self {
        let events = span
            .events
            .iter()
            .map(|event| EventRecord {
                name: event.name.to_string(),
                offset_us: event
                    .timestamp
                    .duration_since(span.start_time)
                    .map_or(0, |d| d.as_micros()),
                attributes: flatten(&event.attributes),
            })
            .collect();

        Self {
            service: service.to_string(),
            name: span.name.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id: (span.parent_span_id != SpanId::INVALID)
                .then(|| format!("{:016x}", span.parent_span_id)),
            start_unix_ms: unix_millis(span.start_time),
            duration_us: span
                .end_time
                .duration_since(span.start_time)
                .map_or(0, |d| d.as_micros()),
            attributes: flatten(&span.attributes),
            events,
            error: match &span.status {
                Status::Error { description } => Some(description.to_string()),
                Status::Ok | Status::Unset => None,
            },
        }
    }
}

fn unix_millis(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_millis())
}

fn flatten(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), json_value(&kv.value)))
        .collect()
}

fn json_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        other => JsonValue::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_keep_their_json_type() {
        let attrs = flatten(&[
            KeyValue::new("token", 7_i64),
            KeyValue::new("pool", "posts"),
            KeyValue::new("stale", true),
        ]);
        assert_eq!(attrs["token"], JsonValue::from(7));
        assert_eq!(attrs["pool"], JsonValue::from("posts"));
        assert_eq!(attrs["stale"], JsonValue::Bool(true));
    }
}
