//! Core types for gesture-processor

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

use crate::{Error, Result};

/// Acknowledgement message returned for every invocation
pub const ACK_MESSAGE: &str = "Handshake Successful: Ready for Bedrock Inference";

/// Acknowledgement status returned for every invocation
pub const ACK_STATUS: &str = "Awaiting AWS Credits";

/// A single tracked hand point. The shape is opaque and never inspected.
pub type Landmark = Value;

/// Incoming invocation event.
///
/// Decoding never fails: a missing, `null` or non-array `landmarks` field
/// yields an empty sequence, and a non-object event yields an empty event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct GestureEvent {
    pub landmarks: Vec<Landmark>,
}

impl GestureEvent {
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }
}

impl From<Value> for GestureEvent {
    fn from(event: Value) -> Self {
        let landmarks = match event {
            Value::Object(mut fields) => match fields.remove("landmarks") {
                Some(Value::Array(points)) => points,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        Self { landmarks }
    }
}

/// Response envelope handed back to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// The fixed success response.
    pub fn acknowledged() -> Result<Self> {
        Ok(Self {
            status_code: 200,
            body: Acknowledgement::default().encode()?,
        })
    }
}

/// Payload carried inside [`HandlerResponse::body`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
    pub status: String,
}

impl Default for Acknowledgement {
    fn default() -> Self {
        Self {
            message: ACK_MESSAGE.to_string(),
            status: ACK_STATUS.to_string(),
        }
    }
}

impl Acknowledgement {
    /// Encode with the gateway's spaced separators, e.g. `{"a": 1, "b": 2}`.
    pub fn encode(&self) -> Result<String> {
        to_gateway_string(self)
    }
}

/// Serialize `value` as JSON using `", "` and `": "` separators.
pub fn to_gateway_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, GatewayFormatter);
    value.serialize(&mut ser)?;

    String::from_utf8(buf)
        .map_err(|e| Error::internal(format!("encoded body is not UTF-8: {}", e)))
}

/// Compact formatter with a space after every `,` and `:`
#[derive(Debug, Clone, Copy, Default)]
pub struct GatewayFormatter;

impl Formatter for GatewayFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_with_landmarks() {
        let event: GestureEvent =
            serde_json::from_value(json!({"landmarks": [[0.1, 0.2], [0.3, 0.4]]})).unwrap();
        assert_eq!(event.landmark_count(), 2);
        assert_eq!(event.landmarks[1], json!([0.3, 0.4]));
    }

    #[test]
    fn test_event_defaults_to_empty_landmarks() {
        for raw in [
            json!({}),
            json!({"landmarks": null}),
            json!({"landmarks": "not-a-list"}),
            json!({"landmarks": 21}),
            json!({"landmarks": {"x": 0.5}}),
            json!([1, 2, 3]),
            json!("hello"),
            Value::Null,
        ] {
            let event: GestureEvent = serde_json::from_value(raw.clone()).unwrap();
            assert!(event.landmarks.is_empty(), "expected no landmarks for {}", raw);
        }
    }

    #[test]
    fn test_event_ignores_other_fields() {
        let event = GestureEvent::from(json!({
            "landmarks": [{"x": 0.1, "y": 0.2, "z": 0.0}],
            "user": "someone",
        }));
        assert_eq!(event.landmark_count(), 1);
    }

    #[test]
    fn test_acknowledgement_encoding() {
        let body = Acknowledgement::default().encode().unwrap();
        assert_eq!(
            body,
            r#"{"message": "Handshake Successful: Ready for Bedrock Inference", "status": "Awaiting AWS Credits"}"#
        );
    }

    #[test]
    fn test_gateway_formatter_nested() {
        let encoded = to_gateway_string(&json!({"a": [1, 2], "b": {"c": null}})).unwrap();
        assert_eq!(encoded, r#"{"a": [1, 2], "b": {"c": null}}"#);
    }

    #[test]
    fn test_response_envelope_is_camel_case() {
        let response = HandlerResponse::acknowledged().unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert!(value.get("status_code").is_none());
    }
}
