use crate::{error, http, product, store};

use serde::{Deserialize, Serialize};

/// The only recognized path literal.
pub const PRODUCT_PATH: &str = "/product";

/// Name of the query and body parameter carrying the lookup key.
pub const PRODUCT_ID_PARAMETER: &str = "productID";

/// Message reported by successful write receipts.
pub const SUCCESS_MESSAGE: &str = "SUCCESS";

/// A recognized (method, path) pair.
///
/// Routing is an exact match; there is no pattern matching or path-parameter
/// extraction, and `PATCH` has no route (see
/// [`PATCH_METHOD`](crate::http::request::PATCH_METHOD)).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    /// `GET /product`
    GetProduct,
    /// `POST /product`
    PostProduct,
    /// `DELETE /product`
    DeleteProduct,
}

impl Route {
    /// Resolve a request to a route by exact (method, path) match.
    pub fn resolve(request: &http::request::Request) -> Option<Self> {
        match (request.method.as_str(), request.path.as_str()) {
            (http::request::GET_METHOD, PRODUCT_PATH) => Some(Self::GetProduct),
            (http::request::POST_METHOD, PRODUCT_PATH) => Some(Self::PostProduct),
            (http::request::DELETE_METHOD, PRODUCT_PATH) => Some(Self::DeleteProduct),
            _ => None,
        }
    }
}

/// Body of a `DELETE /product` request.
///
/// The key is spelled `productID` on the wire, unlike the stored `ProductID`
/// attribute; existing callers depend on this casing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeleteRequest {
    /// The key of the item to delete.
    #[serde(rename = "productID")]
    pub product_id: String,
}

/// Receipt returned by `POST /product`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostReceipt {
    /// The method that produced this receipt.
    #[serde(rename = "Method")]
    pub method: &'static str,
    /// Outcome message.
    #[serde(rename = "Message")]
    pub message: &'static str,
    /// The item as submitted, numeric values rendered as strings.
    #[serde(rename = "Item")]
    pub item: product::Product,
}

/// Receipt returned by `DELETE /product`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteReceipt {
    /// The method that produced this receipt.
    #[serde(rename = "Method")]
    pub method: &'static str,
    /// Outcome message.
    #[serde(rename = "Message")]
    pub message: &'static str,
    /// The key of the deleted item.
    #[serde(rename = "ProductID")]
    pub product_id: String,
}

/// Dispatch a request to its route and map the outcome to a response
/// envelope.
///
/// Requests matching no known (method, path) pair get a 404. A failure
/// inside a route is logged and mapped to its status code; nothing escapes
/// the handler.
pub async fn handle(
    store: &store::ProductStore,
    request: http::request::Request,
) -> http::response::Response {
    tracing::info!(?request, "incoming request");
    let result = match Route::resolve(&request) {
        Some(Route::GetProduct) => get_product(store, &request).await,
        Some(Route::PostProduct) => post_product(store, &request).await,
        Some(Route::DeleteProduct) => delete_product(store, &request).await,
        None => return http::response::Response::not_found(),
    };
    result.unwrap_or_else(|error| {
        tracing::error!(%error, "request failed");
        http::response::Response::from_error(&error)
    })
}

async fn get_product(
    store: &store::ProductStore,
    request: &http::request::Request,
) -> error::Result<http::response::Response> {
    let product_id = request
        .query_parameter(PRODUCT_ID_PARAMETER)
        .ok_or(error::Error::MissingParameter(PRODUCT_ID_PARAMETER))?;
    let response = match store.get(product_id).await? {
        Some(item) => http::response::Response::json(200, &item)?,
        None => http::response::Response::message(
            404,
            &format!("Message: Product ID: {product_id} not found"),
        ),
    };
    Ok(response)
}

async fn post_product(
    store: &store::ProductStore,
    request: &http::request::Request,
) -> error::Result<http::response::Response> {
    let item: product::Product = request.json_body()?;
    if item.product_id().is_none() {
        return Err(error::Error::MissingProductId);
    }
    store.put(&item).await?;
    let receipt = PostReceipt {
        method: http::request::POST_METHOD,
        message: SUCCESS_MESSAGE,
        item: item.stringified(),
    };
    http::response::Response::json(200, &receipt)
}

async fn delete_product(
    store: &store::ProductStore,
    request: &http::request::Request,
) -> error::Result<http::response::Response> {
    let body: DeleteRequest = request.json_body()?;
    store.delete(&body.product_id).await?;
    let receipt = DeleteReceipt {
        method: http::request::DELETE_METHOD,
        message: SUCCESS_MESSAGE,
        product_id: body.product_id,
    };
    http::response::Response::json(200, &receipt)
}
