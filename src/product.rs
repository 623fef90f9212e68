use crate::error;

use aws_sdk_dynamodb::types;
use serde::{Deserialize, Serialize};
use serde_dynamo::to_attribute_value;
use serde_json::{Map, Value};
use std::collections;

/// Attribute name of the partition key.
pub const PRODUCT_ID_ATTRIBUTE: &str = "ProductID";

/// A single inventory item: an open-ended JSON object keyed by `ProductID`.
///
/// `ProductID` is the only attribute the dispatcher inspects; everything else
/// is carried verbatim. Numeric values keep their full decimal precision and
/// are rendered as strings in response bodies (see [`Product::stringified`]).
///
/// ```rust
/// use product_inventory_api::product;
///
/// let item: product::Product =
///     serde_json::from_str(r#"{"ProductID": "ABC123", "price": 19.99}"#).unwrap();
/// assert_eq!(item.product_id(), Some("ABC123"));
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Product {
    /// The item's attributes, keyed by attribute name.
    pub attributes: Map<String, Value>,
}

impl Product {
    /// The `ProductID` attribute, if present and a string.
    pub fn product_id(&self) -> Option<&str> {
        self.attributes
            .get(PRODUCT_ID_ATTRIBUTE)
            .and_then(Value::as_str)
    }

    /// Serialize the item into a DynamoDB attribute map.
    pub fn to_attributes(&self) -> collections::HashMap<String, types::AttributeValue> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.clone(), to_attribute(value)))
            .collect()
    }

    /// Rebuild an item from a DynamoDB attribute map.
    ///
    /// Numeric (`N`) values surface as JSON strings, keeping their stored
    /// precision intact in response bodies.
    pub fn from_attributes(
        attributes: collections::HashMap<String, types::AttributeValue>,
    ) -> error::Result<Self> {
        let mut item = Map::with_capacity(attributes.len());
        for (name, value) in attributes {
            item.insert(name, from_attribute(value)?);
        }
        Ok(Self { attributes: item })
    }

    /// Copy of the item with every numeric value rendered as a string, ready
    /// to be embedded in a response body.
    pub fn stringified(&self) -> Self {
        let attributes = self
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), stringify_numbers(value)))
            .collect();
        Self { attributes }
    }
}

/// Primary key of an item. The table has no sort key.
///
/// ```rust
/// use product_inventory_api::product;
///
/// let key = product::ProductKey {
///     product_id: "ABC123".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProductKey {
    /// The `ProductID` value.
    pub product_id: String,
}

impl TryFrom<ProductKey> for collections::HashMap<String, types::AttributeValue> {
    type Error = serde_dynamo::Error;

    fn try_from(key: ProductKey) -> serde_dynamo::Result<Self> {
        let value = to_attribute_value(key.product_id)?;
        Ok(Self::from([(PRODUCT_ID_ATTRIBUTE.to_owned(), value)]))
    }
}

fn to_attribute(value: &Value) -> types::AttributeValue {
    match value {
        Value::Null => types::AttributeValue::Null(true),
        Value::Bool(flag) => types::AttributeValue::Bool(*flag),
        Value::Number(number) => types::AttributeValue::N(number.to_string()),
        Value::String(text) => types::AttributeValue::S(text.clone()),
        Value::Array(values) => {
            types::AttributeValue::L(values.iter().map(to_attribute).collect())
        }
        Value::Object(object) => types::AttributeValue::M(
            object
                .iter()
                .map(|(name, value)| (name.clone(), to_attribute(value)))
                .collect(),
        ),
    }
}

fn from_attribute(value: types::AttributeValue) -> error::Result<Value> {
    let value = match value {
        types::AttributeValue::Null(_) => Value::Null,
        types::AttributeValue::Bool(flag) => Value::Bool(flag),
        types::AttributeValue::N(number) => Value::String(number),
        types::AttributeValue::S(text) => Value::String(text),
        types::AttributeValue::Ss(values) | types::AttributeValue::Ns(values) => {
            Value::Array(values.into_iter().map(Value::String).collect())
        }
        types::AttributeValue::L(values) => {
            let values = values
                .into_iter()
                .map(from_attribute)
                .collect::<error::Result<_>>()?;
            Value::Array(values)
        }
        types::AttributeValue::M(object) => {
            let mut map = Map::with_capacity(object.len());
            for (name, value) in object {
                map.insert(name, from_attribute(value)?);
            }
            Value::Object(map)
        }
        other => {
            let label = match other {
                types::AttributeValue::B(_) => "B",
                types::AttributeValue::Bs(_) => "BS",
                _ => "unknown",
            };
            return Err(error::Error::UnsupportedAttribute(label));
        }
    };
    Ok(value)
}

fn stringify_numbers(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::String(number.to_string()),
        Value::Array(values) => Value::Array(values.iter().map(stringify_numbers).collect()),
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(name, value)| (name.clone(), stringify_numbers(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    fn product(payload: &str) -> Product {
        serde_json::from_str(payload).unwrap()
    }

    #[rstest]
    #[case::string(
        r#"{"ProductID": "ABC123"}"#,
        collections::HashMap::from(
            [
                (
                    "ProductID".to_string(),
                    types::AttributeValue::S(
                        "ABC123".to_string()
                    )
                ),
            ]
        )
    )]
    #[case::decimal(
        r#"{"ProductID": "ABC123", "price": 19.99}"#,
        collections::HashMap::from(
            [
                (
                    "ProductID".to_string(),
                    types::AttributeValue::S(
                        "ABC123".to_string()
                    )
                ),
                (
                    "price".to_string(),
                    types::AttributeValue::N(
                        "19.99".to_string()
                    )
                ),
            ]
        )
    )]
    #[case::nested(
        r#"{"ProductID": "ABC123", "stock": {"warehouse": 3}, "tags": ["new", true, null]}"#,
        collections::HashMap::from(
            [
                (
                    "ProductID".to_string(),
                    types::AttributeValue::S(
                        "ABC123".to_string()
                    )
                ),
                (
                    "stock".to_string(),
                    types::AttributeValue::M(
                        collections::HashMap::from(
                            [
                                (
                                    "warehouse".to_string(),
                                    types::AttributeValue::N(
                                        "3".to_string()
                                    )
                                ),
                            ]
                        )
                    )
                ),
                (
                    "tags".to_string(),
                    types::AttributeValue::L(
                        vec![
                            types::AttributeValue::S(
                                "new".to_string()
                            ),
                            types::AttributeValue::Bool(true),
                            types::AttributeValue::Null(true),
                        ]
                    )
                ),
            ]
        )
    )]
    fn test_to_attributes(
        #[case] payload: &str,
        #[case] expected: collections::HashMap<String, types::AttributeValue>,
    ) {
        assert_eq!(product(payload).to_attributes(), expected);
    }

    #[rstest]
    #[case::number_becomes_string(
        collections::HashMap::from(
            [
                (
                    "price".to_string(),
                    types::AttributeValue::N(
                        "19.99".to_string()
                    )
                ),
            ]
        ),
        json!({"price": "19.99"})
    )]
    #[case::scalars(
        collections::HashMap::from(
            [
                (
                    "ProductID".to_string(),
                    types::AttributeValue::S(
                        "ABC123".to_string()
                    )
                ),
                (
                    "discontinued".to_string(),
                    types::AttributeValue::Bool(false)
                ),
                (
                    "notes".to_string(),
                    types::AttributeValue::Null(true)
                ),
            ]
        ),
        json!({"ProductID": "ABC123", "discontinued": false, "notes": null})
    )]
    #[case::nested(
        collections::HashMap::from(
            [
                (
                    "stock".to_string(),
                    types::AttributeValue::M(
                        collections::HashMap::from(
                            [
                                (
                                    "warehouse".to_string(),
                                    types::AttributeValue::N(
                                        "3".to_string()
                                    )
                                ),
                            ]
                        )
                    )
                ),
                (
                    "sizes".to_string(),
                    types::AttributeValue::Ns(
                        vec![
                            "40".to_string(),
                            "42".to_string(),
                        ]
                    )
                ),
            ]
        ),
        json!({"stock": {"warehouse": "3"}, "sizes": ["40", "42"]})
    )]
    fn test_from_attributes(
        #[case] attributes: collections::HashMap<String, types::AttributeValue>,
        #[case] expected: Value,
    ) {
        let actual = Product::from_attributes(attributes).unwrap();
        assert_eq!(Value::Object(actual.attributes), expected);
    }

    #[test]
    fn test_from_attributes_rejects_binary() {
        let attributes = collections::HashMap::from([(
            "blob".to_string(),
            types::AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2])),
        )]);
        assert!(Product::from_attributes(attributes).is_err());
    }

    #[test]
    fn test_round_trip_preserves_items() {
        let item = product(r#"{"ProductID": "ABC123", "price": 19.99, "stock": {"warehouse": 3}}"#);
        let restored = Product::from_attributes(item.to_attributes()).unwrap();
        assert_eq!(restored, item.stringified());
    }

    #[rstest]
    #[case::scalar(
        r#"{"price": 9.99}"#,
        json!({"price": "9.99"})
    )]
    #[case::precision_kept(
        r#"{"price": 19.990000000000000000001}"#,
        json!({"price": "19.990000000000000000001"})
    )]
    #[case::nested(
        r#"{"stock": {"warehouse": 3}, "sizes": [40, 42]}"#,
        json!({"stock": {"warehouse": "3"}, "sizes": ["40", "42"]})
    )]
    #[case::strings_untouched(
        r#"{"ProductID": "ABC123"}"#,
        json!({"ProductID": "ABC123"})
    )]
    fn test_stringified(#[case] payload: &str, #[case] expected: Value) {
        let actual = product(payload).stringified();
        assert_eq!(Value::Object(actual.attributes), expected);
    }

    #[rstest]
    #[case::present(r#"{"ProductID": "ABC123"}"#, Some("ABC123"))]
    #[case::absent(r#"{"price": 19.99}"#, None)]
    #[case::not_a_string(r#"{"ProductID": 123}"#, None)]
    fn test_product_id(#[case] payload: &str, #[case] expected: Option<&str>) {
        assert_eq!(product(payload).product_id(), expected);
    }

    #[test]
    fn test_product_key_to_hash_map() {
        let key = ProductKey {
            product_id: "ABC123".to_string(),
        };
        let actual: collections::HashMap<String, types::AttributeValue> = key.try_into().unwrap();
        let expected = collections::HashMap::from([(
            "ProductID".to_string(),
            types::AttributeValue::S("ABC123".to_string()),
        )]);
        assert_eq!(actual, expected);
    }
}
