//! HTTP request wrapper

use super::body::{collect_body, parse_form};
use crate::error::AppError;
use serde::de::DeserializeOwned;

/// HTTP Request wrapper providing convenient access to request data
pub struct Request {
    inner: hyper::Request<hyper::body::Incoming>,
}

impl Request {
    pub fn new(inner: hyper::Request<hyper::body::Incoming>) -> Self {
        Self { inner }
    }

    /// Get the request method
    pub fn method(&self) -> &hyper::Method {
        self.inner.method()
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.inner.uri().path()
    }

    /// Get a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the request body as form-urlencoded
    ///
    /// Consumes the request since the body can only be read once.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[derive(Deserialize)]
    /// struct TodoForm { todo: String }
    ///
    /// pub async fn store(req: Request) -> Response {
    ///     let form: TodoForm = req.form().await?;
    ///     // ...
    /// }
    /// ```
    pub async fn form<T: DeserializeOwned>(self) -> Result<T, AppError> {
        let bytes = collect_body(self.inner.into_body()).await?;
        parse_form(&bytes)
    }
}
