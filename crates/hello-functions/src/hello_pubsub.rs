//! HelloPubSub: logs a greeting for each published message

use cloud_functions_sdk::event::base64_bytes;
use cloud_functions_sdk::prelude::*;

/// Payload of a Pub/Sub message; `name` travels base64-encoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PubSubMessage {
    #[serde(default, with = "base64_bytes")]
    pub name: Vec<u8>,
}

/// Log `Hello, {name}!`, falling back to `World` when the name is empty.
pub async fn hello_pubsub(ctx: &EventContext, message: PubSubMessage) -> Result<(), FunctionError> {
    let name = String::from_utf8_lossy(&message.name);
    let name = if name.is_empty() { "World" } else { &*name };

    tracing::info!(event_id = %ctx.event_id, "Hello, {}!", name);
    Ok(())
}
