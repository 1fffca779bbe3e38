//! Body parsing utilities for HTTP requests

use crate::error::AppError;
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use serde::de::DeserializeOwned;

/// Collect the full body from an Incoming stream
pub async fn collect_body(body: Incoming) -> Result<Bytes, AppError> {
    body.collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|e| AppError::internal(format!("Failed to read request body: {}", e)))
}

/// Parse bytes as form-urlencoded into the target type
pub fn parse_form<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, AppError> {
    serde_urlencoded::from_bytes(bytes)
        .map_err(|e| AppError::bad_request(format!("Failed to parse form body: {}", e)))
}
