use std::result;

/// Result alias used across the crate.
pub type Result<T, E = Error> = result::Result<T, E>;

/// A failure between routing a request and answering it.
///
/// Every variant maps to an HTTP status code through [`Error::status_code`];
/// nothing escapes the handler unclassified.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required query parameter was absent from the request.
    #[error("missing required query parameter `{0}`")]
    MissingParameter(&'static str),

    /// The route requires a request body and none was supplied.
    #[error("missing request body")]
    MissingBody,

    /// The request body could not be parsed as JSON.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The submitted item lacks a string `ProductID` attribute.
    #[error("item is missing a string `ProductID` attribute")]
    MissingProductId,

    /// A stored attribute value has no JSON representation.
    #[error("unsupported attribute value of type `{0}`")]
    UnsupportedAttribute(&'static str),

    /// The item key could not be serialized.
    #[error("key serialization failed: {0}")]
    KeySerialization(#[from] serde_dynamo::Error),

    /// A response payload could not be serialized.
    #[error("response serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The DynamoDB call failed.
    #[error("dynamodb request failed: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// The HTTP status code this failure maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter(_)
            | Self::MissingBody
            | Self::InvalidBody(_)
            | Self::MissingProductId => 400,
            Self::UnsupportedAttribute(_)
            | Self::KeySerialization(_)
            | Self::Serialization(_)
            | Self::Store(_) => 500,
        }
    }
}
