//! HelloHttp: greets the `name` sent in a JSON body

use std::fmt;

use cloud_functions_sdk::prelude::*;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};

/// Body accepted by [`hello_http`]
///
/// Only a JSON object decodes. The `name` key matches in any ASCII case, the
/// last occurrence wins, and a `null` value leaves the name unset.
#[derive(Debug, Default)]
pub struct GreetingRequest {
    pub name: Option<String>,
}

impl<'de> Deserialize<'de> for GreetingRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GreetingRequestVisitor)
    }
}

struct GreetingRequestVisitor;

impl<'de> Visitor<'de> for GreetingRequestVisitor {
    type Value = GreetingRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut greeting = GreetingRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    greeting.name = Some(name);
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(greeting)
    }
}

/// Write `Hello, {name}!` for a body like `{"name": "Alice"}`.
///
/// Always answers 200 with a plain-text body:
///
/// - undecodable body: the decoder's error text
/// - no name, or an empty one: `Warning, no name`
/// - otherwise the greeting, with `name` HTML-escaped
pub fn hello_http(req: Request) -> Response {
    let greeting = match req.json::<Option<GreetingRequest>>() {
        Ok(greeting) => greeting.unwrap_or_default(),
        Err(e) => {
            // FIXME: returns decoder internals to the caller. Review before
            // this is exposed publicly.
            tracing::debug!(request_id = %req.request_id, error = %e, "Undecodable greeting body");
            return Response::text(200, e.to_string());
        }
    };

    match greeting.name.as_deref() {
        None | Some("") => {
            tracing::debug!(request_id = %req.request_id, "Greeting without a name");
            Response::text(200, "Warning, no name")
        }
        Some(name) => {
            tracing::debug!(request_id = %req.request_id, name_len = name.len(), "Greeting by name");
            Response::text(200, format!("Hello, {}!", escape_html(name)))
        }
    }
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
