//! Function signatures and the adapters that erase them
//!
//! Two kinds of function exist:
//!
//! - HTTP functions take a [`Request`] and produce a [`Response`].
//! - Event functions take an [`EventContext`] and a typed payload, and return
//!   `Ok(())` or a [`FunctionError`] that the platform may retry on.
//!
//! # Example
//!
//! ```ignore
//! use cloud_functions_sdk::prelude::*;
//!
//! let greet = Function::http(|req: Request| async move {
//!     Response::text(200, format!("you sent {} bytes", req.body.len()))
//! });
//!
//! let log = Function::event(|_ctx: EventContext, msg: MyMessage| async move {
//!     tracing::info!("got {:?}", msg);
//!     Ok(())
//! });
//! ```

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::event::{Event, EventContext};
use crate::{FunctionError, Request, Response};

/// Type alias for boxed future returned by functions
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An HTTP-triggered function
pub trait HttpFunction: Send + Sync + 'static {
    fn call(&self, req: Request) -> BoxFuture<'static, Response>;
}

impl<F, Fut> HttpFunction for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture<'static, Response> {
        Box::pin(self(req))
    }
}

/// An event-triggered function, payload still undecoded
pub trait EventFunction: Send + Sync + 'static {
    fn call(&self, event: Event) -> BoxFuture<'static, Result<(), FunctionError>>;
}

/// Decodes the event payload into `T` before calling `F`
struct TypedEventFunction<T, F> {
    func: F,
    _payload: PhantomData<fn() -> T>,
}

impl<T, F, Fut> EventFunction for TypedEventFunction<T, F>
where
    T: DeserializeOwned + Send + 'static,
    F: Fn(EventContext, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), FunctionError>> + Send + 'static,
{
    fn call(&self, event: Event) -> BoxFuture<'static, Result<(), FunctionError>> {
        match serde_json::from_value::<T>(event.data) {
            Ok(payload) => Box::pin((self.func)(event.context, payload)),
            Err(e) => Box::pin(std::future::ready(Err(FunctionError::InvalidPayload(
                e.to_string(),
            )))),
        }
    }
}

/// A registered function of either kind
#[derive(Clone)]
pub enum Function {
    Http(Arc<dyn HttpFunction>),
    Event(Arc<dyn EventFunction>),
}

impl Function {
    /// Wrap an async HTTP function
    pub fn http<F>(func: F) -> Self
    where
        F: HttpFunction,
    {
        Function::Http(Arc::new(func))
    }

    /// Wrap an async event function taking a typed payload
    pub fn event<T, F, Fut>(func: F) -> Self
    where
        T: DeserializeOwned + Send + 'static,
        F: Fn(EventContext, T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), FunctionError>> + Send + 'static,
    {
        Function::Event(Arc::new(TypedEventFunction {
            func,
            _payload: PhantomData,
        }))
    }

    /// Short name of the signature type, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Function::Http(_) => "http",
            Function::Event(_) => "event",
        }
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Function").field(&self.kind()).finish()
    }
}
