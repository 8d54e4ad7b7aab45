//! Host router - hands every request to the configured function
//!
//! HTTP functions see the request as-is. Event functions take a `POST` whose
//! body is a background-event envelope or a bare payload.

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use cloud_functions_sdk::{self as sdk, Function, FunctionError};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;

/// Largest request body handed to a function
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the router that serves the target function on every path
pub fn create_host_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", any(handle_invocation))
        .route("/{*path}", any(handle_invocation))
}

/// Handle one invocation of the target function
async fn handle_invocation(State(state): State<Arc<AppState>>, request: Request<Body>) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        target = %state.config.function_target,
        "Incoming invocation"
    );

    let query: HashMap<String, String> = request
        .uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let headers: HashMap<String, String> = request
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(request_id = %request_id, "Failed to read body: {}", e);
            return (StatusCode::BAD_REQUEST, "Failed to read body").into_response();
        }
    };

    let sdk_response = match &state.function {
        Function::Http(function) => {
            let sdk_request = sdk::Request {
                method: method.to_string(),
                path,
                query,
                headers,
                body,
                request_id: request_id.clone(),
            };
            function.call(sdk_request).await
        }
        Function::Event(function) => {
            if method != Method::POST {
                return into_http_response(sdk::Response::method_not_allowed());
            }

            let result = match decode_event(&body, &request_id) {
                Ok(event) => function.call(event).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => sdk::Response::new(200),
                Err(e) => {
                    tracing::error!(request_id = %request_id, "Function error: {}", e);
                    e.to_response()
                }
            }
        }
    };

    into_http_response(sdk_response)
}

/// Parse an event delivery, giving it an id when the sender did not
fn decode_event(body: &[u8], request_id: &str) -> Result<sdk::Event, FunctionError> {
    let mut event = sdk::Event::from_json(serde_json::from_slice(body)?)?;
    if event.context.event_id.is_empty() {
        event.context.event_id = request_id.to_string();
    }
    Ok(event)
}

fn into_http_response(sdk_response: sdk::Response) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(sdk_response.status).unwrap_or(StatusCode::OK));

    for (key, value) in sdk_response.headers {
        builder = builder.header(&key, &value);
    }

    match builder.body(Body::from(sdk_response.body.unwrap_or_default())) {
        Ok(response) => response,
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response(),
    }
}
