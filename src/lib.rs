#![deny(missing_docs)]
#![deny(warnings)]

//! # Product Inventory API
//!
//! A serverless CRUD API over a DynamoDB product-inventory table.
//!
//! ## Overview
//!
//! This crate implements the compute side of the API: a request dispatcher
//! that receives a normalized HTTP request record, routes it by exact
//! (method, path) match, performs a single-item operation against the table,
//! and returns a normalized response envelope. It:
//! - Routes `GET`, `POST`, and `DELETE` on `/product` to get, put, and delete
//!   operations keyed by `ProductID`
//! - Carries item attributes as open-ended JSON, with numeric values kept at
//!   arbitrary precision and rendered as strings in response bodies
//! - Maps every failure to a typed error and a proper status code instead of
//!   letting it escape the handler
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use aws_sdk_dynamodb::Client;
//! use product_inventory_api::{handler, http, store};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! let store = store::ProductStore::new(client, "ProductInventory");
//! let request = http::request::Request {
//!     method: "GET".to_string(),
//!     path: "/product".to_string(),
//!     query: [("productID".to_string(), "ABC123".to_string())].into(),
//!     ..Default::default()
//! };
//! let response = handler::handle(&store, request).await;
//! assert_eq!(response.headers["Content-Type"], "application/json");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@config`] - Process configuration resolved once at startup
//! - [`mod@error`] - Typed request failures and their status mapping
//! - [`mod@http`] - Normalized wire records exchanged with the front door
//! - [`mod@product`] - The item type and its attribute conversions
//! - [`mod@store`] - Single-item operations against the table
//! - [`mod@handler`] - The request dispatcher

/// Process configuration resolved once at startup.
pub mod config;

/// Typed request failures and their HTTP status mapping.
pub mod error;

/// The request dispatcher and per-route behavior.
pub mod handler;

/// Normalized wire records exchanged with the HTTP front door.
pub mod http;

/// The product item type and its DynamoDB attribute conversions.
pub mod product;

/// Single-item operations against the product-inventory table.
pub mod store;
