use crate::error;

use serde::Serialize;
use std::collections;

/// Header naming the body's media type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Every response body is JSON.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Message returned for requests that match no route.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Normalized response envelope returned to the front door.
///
/// Bodies are always JSON-serialized, including plain messages, which are
/// encoded as JSON strings.
///
/// ```rust
/// use product_inventory_api::http::response;
///
/// let response = response::Response::not_found();
/// assert_eq!(response.status_code, 404);
/// assert_eq!(response.body.as_deref(), Some("\"Not Found\""));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    /// The HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: collections::HashMap<String, String>,
    /// The JSON-serialized body, if any.
    pub body: Option<String>,
}

impl Response {
    fn new(status_code: u16, body: Option<String>) -> Self {
        let headers = collections::HashMap::from([(
            CONTENT_TYPE_HEADER.to_owned(),
            CONTENT_TYPE_JSON.to_owned(),
        )]);
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Build a response carrying a JSON-serialized payload.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> error::Result<Self> {
        let body = serde_json::to_string(payload).map_err(error::Error::Serialization)?;
        Ok(Self::new(status_code, Some(body)))
    }

    /// Build a response whose body is a plain message, encoded as a JSON
    /// string.
    pub fn message(status_code: u16, message: &str) -> Self {
        let body = serde_json::Value::String(message.to_owned()).to_string();
        Self::new(status_code, Some(body))
    }

    /// The response for requests matching no known (method, path) pair.
    pub fn not_found() -> Self {
        Self::message(404, NOT_FOUND_MESSAGE)
    }

    /// Map a request failure to its status code and message body.
    pub fn from_error(error: &error::Error) -> Self {
        Self::message(error.status_code(), &error.to_string())
    }
}

impl TryFrom<Response> for lambda_http::Response<lambda_http::Body> {
    type Error = lambda_http::http::Error;

    fn try_from(response: Response) -> Result<Self, lambda_http::http::Error> {
        let mut builder = lambda_http::http::Response::builder().status(response.status_code);
        for (name, value) in &response.headers {
            builder = builder.header(name, value);
        }
        let body = match response.body {
            Some(text) => lambda_http::Body::Text(text),
            None => lambda_http::Body::Empty,
        };
        builder.body(body)
    }
}
