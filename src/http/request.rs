use crate::error;

use lambda_http::RequestExt;
use serde::de;
use std::collections;

/// The `GET` method literal.
pub const GET_METHOD: &str = "GET";

/// The `POST` method literal.
pub const POST_METHOD: &str = "POST";

/// The `PATCH` method literal.
///
/// Part of the API's method vocabulary, but no route is wired to it; PATCH
/// requests fall through to the routing miss.
pub const PATCH_METHOD: &str = "PATCH";

/// The `DELETE` method literal.
pub const DELETE_METHOD: &str = "DELETE";

/// Normalized request record handed to the dispatcher.
///
/// Method and path are matched exactly and case-sensitively; the body is kept
/// raw until a route decides how to parse it.
///
/// ```rust
/// use product_inventory_api::http::request;
///
/// let request = request::Request {
///     method: "GET".to_string(),
///     path: "/product".to_string(),
///     query: [("productID".to_string(), "ABC123".to_string())].into(),
///     ..Default::default()
/// };
/// assert_eq!(request.query_parameter("productID"), Some("ABC123"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    /// The HTTP method.
    pub method: String,
    /// The request path.
    pub path: String,
    /// Query string parameters.
    pub query: collections::HashMap<String, String>,
    /// The raw request body, if one was supplied.
    pub body: Option<String>,
}

impl Request {
    /// Look up a query parameter by name.
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Parse the request body as JSON.
    pub fn json_body<T: de::DeserializeOwned>(&self) -> error::Result<T> {
        let body = self.body.as_deref().ok_or(error::Error::MissingBody)?;
        let parsed = serde_json::from_str(body)?;
        Ok(parsed)
    }
}

impl From<&lambda_http::Request> for Request {
    fn from(event: &lambda_http::Request) -> Self {
        let query = event
            .query_string_parameters()
            .iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        let body = match event.body() {
            lambda_http::Body::Empty => None,
            lambda_http::Body::Text(text) => Some(text.clone()),
            lambda_http::Body::Binary(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        };
        Self {
            method: event.method().as_str().to_owned(),
            path: event.uri().path().to_owned(),
            query,
            body,
        }
    }
}
