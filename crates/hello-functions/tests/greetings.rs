use std::io;
use std::sync::{Arc, Mutex};

use cloud_functions_sdk::prelude::*;
use hello_functions::{hello_http, hello_pubsub, PubSubMessage};
use tracing::instrument::WithSubscriber;

/// Collects everything the fmt subscriber writes
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

async fn run_logged(message: PubSubMessage) -> (Result<(), FunctionError>, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let ctx = EventContext::default();
    let result = hello_pubsub(&ctx, message).with_subscriber(subscriber).await;
    (result, logs.contents())
}

fn greet(body: &'static str) -> Response {
    hello_http(Request::new("POST", "/", body))
}

#[test]
fn greets_by_name() {
    let response = greet(r#"{"name": "Alice"}"#);
    assert_eq!(response.status, 200);
    assert_eq!(response.body.as_deref(), Some("Hello, Alice!"));
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("text/plain; charset=utf-8")
    );
}

#[test]
fn warns_on_empty_or_missing_name() {
    assert_eq!(greet(r#"{"name": ""}"#).body.as_deref(), Some("Warning, no name"));
    assert_eq!(greet("{}").body.as_deref(), Some("Warning, no name"));
}

#[test]
fn malformed_body_returns_decode_error_text() {
    let req = Request::new("POST", "/", "this is not json");
    let expected = req.json::<Option<hello_functions::GreetingRequest>>().unwrap_err().to_string();

    let response = hello_http(req);
    assert_eq!(response.status, 200);
    let body = response.body.unwrap_or_default();
    assert!(!body.is_empty());
    assert_eq!(body, expected);
    assert_ne!(body, "Warning, no name");
}

#[test]
fn array_body_is_not_a_greeting() {
    for body in [r#"["Alice"]"#, "[]"] {
        let req = Request::new("POST", "/", body);
        let expected = req.json::<Option<hello_functions::GreetingRequest>>().unwrap_err().to_string();

        let text = hello_http(req).body.unwrap_or_default();
        assert_eq!(text, expected);
        assert_ne!(text, "Hello, Alice!");
        assert_ne!(text, "Warning, no name");
    }
}

#[test]
fn name_key_is_case_insensitive_and_last_wins() {
    assert_eq!(greet(r#"{"Name":"Alice"}"#).body.as_deref(), Some("Hello, Alice!"));
    assert_eq!(greet(r#"{"name":"a","name":"b"}"#).body.as_deref(), Some("Hello, b!"));
}

#[test]
fn escapes_html_in_name() {
    let response = greet(r#"{"name": "<script>alert(1)</script>"}"#);
    let body = response.body.unwrap_or_default();
    assert_eq!(body, "Hello, &lt;script&gt;alert(1)&lt;/script&gt;!");
    assert!(!body.contains('<'));
}

#[tokio::test]
async fn logs_greeting_for_name() {
    let message: PubSubMessage = serde_json::from_value(json!({"name": "Qm9i"})).unwrap();
    assert_eq!(message.name, b"Bob");

    let (result, logs) = run_logged(message).await;
    assert!(result.is_ok());
    assert!(logs.contains("Hello, Bob!"), "logs were: {logs}");
}

#[tokio::test]
async fn logs_world_when_name_empty() {
    let (result, logs) = run_logged(PubSubMessage::default()).await;
    assert!(result.is_ok());
    assert!(logs.contains("Hello, World!"), "logs were: {logs}");
}

#[tokio::test]
async fn registry_dispatches_pubsub_payload() {
    let registry = hello_functions::registry();
    assert_eq!(registry.names(), vec!["HelloHttp", "HelloPubSub"]);

    let Some(Function::Event(func)) = registry.get(hello_functions::HELLO_PUBSUB) else {
        panic!("HelloPubSub should be an event function");
    };
    let event = Event::from_json(json!({"data": {"name": "QWRh"}})).unwrap();
    assert!(func.call(event).await.is_ok());

    let bad = Event::from_json(json!({"data": {"name": "not base64!"}})).unwrap();
    assert!(matches!(func.call(bad).await, Err(FunctionError::InvalidPayload(_))));
}
