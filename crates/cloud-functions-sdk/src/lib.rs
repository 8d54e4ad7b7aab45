//! Cloud Functions SDK - Types and utilities for writing cloud functions
//!
//! This crate provides the request/response types, event types and function
//! signatures that functions are written against, and the registry a host
//! uses to look them up by name.

pub mod error;
pub mod event;
pub mod handler;
pub mod registry;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for cloud functions
    pub use crate::error::FunctionError;
    pub use crate::event::{Event, EventContext};
    pub use crate::handler::{EventFunction, Function, HttpFunction};
    pub use crate::registry::FunctionRegistry;
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::FunctionError;
pub use event::{Event, EventContext};
pub use handler::Function;
pub use registry::FunctionRegistry;
pub use request::Request;
pub use response::Response;
