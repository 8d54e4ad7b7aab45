//! HTTP Request representation for functions

use crate::error::FunctionError;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Represents an incoming HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: String,

    /// Request path (e.g., "/items/123")
    pub path: String,

    /// Query parameters
    pub query: HashMap<String, String>,

    /// HTTP headers
    pub headers: HashMap<String, String>,

    /// Raw request body
    pub body: Bytes,

    /// Request ID for tracing
    pub request_id: String,
}

impl Request {
    /// Create a request with the given method, path and body.
    ///
    /// # Example
    /// ```ignore
    /// let req = Request::new("POST", "/", r#"{"name":"Alice"}"#);
    /// ```
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Decode the first JSON value in the body into a typed struct.
    ///
    /// Reads the body the way a streaming decoder does: anything after the
    /// first complete value is left unread. A body with no value at all is
    /// `FunctionError::EmptyBody`.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Greeting { name: String }
    ///
    /// let greeting: Greeting = req.json()?;
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FunctionError> {
        let mut values = serde_json::Deserializer::from_slice(&self.body).into_iter::<T>();
        match values.next() {
            Some(value) => Ok(value?),
            None => Err(FunctionError::EmptyBody),
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            body: Bytes::new(),
            request_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_json_reads_first_value_only() {
        let req = Request::new("POST", "/", r#"{"name":"a"} trailing garbage"#);
        let named: Named = req.json().unwrap();
        assert_eq!(named.name, "a");
    }

    #[test]
    fn test_json_empty_body() {
        let req = Request::new("POST", "/", "   \n");
        let err = req.json::<Named>().unwrap_err();
        assert!(matches!(err, FunctionError::EmptyBody));
    }

    #[test]
    fn test_json_malformed() {
        let req = Request::new("POST", "/", "not json");
        let err = req.json::<Named>().unwrap_err();
        assert!(matches!(err, FunctionError::Json(_)));
        assert!(!err.to_string().is_empty());
    }
}
