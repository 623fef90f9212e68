use std::env;

/// Environment variable that overrides the table name.
pub const TABLE_NAME_VARIABLE: &str = "TABLE_NAME";

/// Name of the table provisioned by the infrastructure stack.
pub const DEFAULT_TABLE_NAME: &str = "ProductInventory";

/// Process configuration, resolved once at startup and injected into the
/// store from `main`.
///
/// ```rust
/// use product_inventory_api::config;
///
/// let config = config::Config::default();
/// assert_eq!(config.table_name, "ProductInventory");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Name of the DynamoDB table holding the inventory.
    pub table_name: String,
}

impl Config {
    /// Resolve configuration from the environment, falling back to the
    /// provisioned table name.
    pub fn from_env() -> Self {
        let table_name =
            env::var(TABLE_NAME_VARIABLE).unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_owned());
        Self { table_name }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_name() {
        assert_eq!(Config::default().table_name, DEFAULT_TABLE_NAME);
    }

    #[test]
    fn test_from_env_is_never_empty() {
        assert!(!Config::from_env().table_name.is_empty());
    }
}
