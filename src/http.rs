//! Normalized wire records exchanged with the HTTP front door.
//!
//! The front door forwards each request as a (method, path, query, body)
//! record and expects a (status, headers, body) envelope back. These records
//! are the sole process boundary; adapters to and from the `lambda_http`
//! types live next to each record.

/// The normalized incoming request record.
pub mod request;

/// The normalized response envelope.
pub mod response;
