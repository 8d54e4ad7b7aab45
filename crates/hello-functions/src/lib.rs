//! Greeting cloud functions
//!
//! - `HelloHttp` answers an HTTP request with a greeting.
//! - `HelloPubSub` logs a greeting for a Pub/Sub message.

pub mod hello_http;
pub mod hello_pubsub;

use cloud_functions_sdk::prelude::*;

pub use hello_http::{escape_html, hello_http, GreetingRequest};
pub use hello_pubsub::{hello_pubsub, PubSubMessage};

/// Target name of the HTTP greeting function
pub const HELLO_HTTP: &str = "HelloHttp";

/// Target name of the Pub/Sub greeting function
pub const HELLO_PUBSUB: &str = "HelloPubSub";

/// Registry holding every function in this crate under its target name
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with_function(
            HELLO_HTTP,
            Function::http(|req: Request| async move { hello_http(req) }),
        )
        .with_function(
            HELLO_PUBSUB,
            Function::event(|ctx: EventContext, message: PubSubMessage| async move {
                hello_pubsub(&ctx, message).await
            }),
        )
}
