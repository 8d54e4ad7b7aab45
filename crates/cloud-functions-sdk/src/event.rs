//! Event invocation types
//!
//! Event-triggered functions receive a decoded payload plus an [`EventContext`]
//! describing the event. Delivery arrives as a background-event envelope:
//!
//! ```json
//! {
//!   "context": {"eventId": "1", "timestamp": "...", "eventType": "...", "resource": "..."},
//!   "data": {"name": "Qm9i"}
//! }
//! ```
//!
//! The older flat layout (context fields next to `data`) and a bare payload
//! with no `data` key are accepted as well.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::FunctionError;

/// Metadata describing one event delivery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    /// Unique delivery id
    #[serde(default)]
    pub event_id: String,

    /// When the event was published (RFC 3339 text as delivered)
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Event type, e.g. `google.pubsub.topic.publish`
    #[serde(default)]
    pub event_type: Option<String>,

    /// Resource that emitted the event; a name string or a resource object
    #[serde(default)]
    pub resource: Option<JsonValue>,
}

/// A decoded event: context plus the still-untyped payload
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub context: EventContext,
    pub data: JsonValue,
}

impl Event {
    /// Split a delivery body into context and payload.
    pub fn from_json(body: JsonValue) -> Result<Self, FunctionError> {
        let JsonValue::Object(mut fields) = body else {
            return Err(FunctionError::InvalidPayload(
                "event body must be a JSON object".into(),
            ));
        };

        let Some(data) = fields.remove("data") else {
            // Bare payload
            return Ok(Self {
                context: EventContext::default(),
                data: JsonValue::Object(fields),
            });
        };

        let context = match fields.remove("context") {
            Some(context) => serde_json::from_value(context)?,
            None => serde_json::from_value(JsonValue::Object(fields))?,
        };

        Ok(Self { context, data })
    }
}

/// Serde codec for byte fields carried as standard base64 strings.
///
/// A missing or `null` field decodes to an empty vector.
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Message {
///     #[serde(default, with = "cloud_functions_sdk::event::base64_bytes")]
///     name: Vec<u8>,
/// }
/// ```
pub mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => base64::engine::general_purpose::STANDARD
                .decode(encoded.as_bytes())
                .map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
