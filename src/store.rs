use crate::{error, product};

use aws_sdk_dynamodb::Client;

/// Handle to the product-inventory table.
///
/// Built once per process from the shared SDK client and the configured table
/// name, then reused across invocations. Each operation maps to exactly one
/// DynamoDB call.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use product_inventory_api::store;
///
/// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
/// let store = store::ProductStore::new(client, "ProductInventory");
/// store.get("ABC123").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ProductStore {
    client: Client,
    table_name: String,
}

impl ProductStore {
    /// Create a store over `table_name`.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Fetch a single item by `ProductID`.
    #[tracing::instrument(name = "product_inventory_api.get_product", skip(self), err)]
    pub async fn get(&self, product_id: &str) -> error::Result<Option<product::Product>> {
        let key = product::ProductKey {
            product_id: product_id.to_owned(),
        };
        let output = self
            .client
            .get_item()
            .set_key(Some(key.try_into()?))
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| error::Error::Store(err.into()))?;
        output.item.map(product::Product::from_attributes).transpose()
    }

    /// Put an item, overwriting any existing item with the same `ProductID`.
    #[tracing::instrument(name = "product_inventory_api.put_product", skip_all, err)]
    pub async fn put(&self, item: &product::Product) -> error::Result<()> {
        self.client
            .put_item()
            .set_item(Some(item.to_attributes()))
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| error::Error::Store(err.into()))?;
        Ok(())
    }

    /// Delete an item by `ProductID`. Deleting an absent key succeeds.
    #[tracing::instrument(name = "product_inventory_api.delete_product", skip(self), err)]
    pub async fn delete(&self, product_id: &str) -> error::Result<()> {
        let key = product::ProductKey {
            product_id: product_id.to_owned(),
        };
        self.client
            .delete_item()
            .set_key(Some(key.try_into()?))
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| error::Error::Store(err.into()))?;
        Ok(())
    }
}
