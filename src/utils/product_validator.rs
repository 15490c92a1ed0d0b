// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Shape validation for product payloads - nothing untrusted reaches page state

use serde_json::{Map, Value};
use tracing::warn;

use crate::core::errors::AdminError;
use crate::core::models::{Product, ProductId};
use crate::core::types::Validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Integer,
    Number,
    Text,
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Number => value.is_number(),
            FieldKind::Text => value.is_string(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FieldKind::Integer => "an integer",
            FieldKind::Number => "a number",
            FieldKind::Text => "a string",
        }
    }
}

/// Every field a product must carry, in wire order.
const PRODUCT_FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Integer),
    ("name", FieldKind::Text),
    ("description", FieldKind::Text),
    ("price", FieldKind::Number),
    ("stock", FieldKind::Integer),
    ("created_at", FieldKind::Text),
    ("updated_at", FieldKind::Text),
];

/// Validates product records received from the API
pub struct ProductValidator;

impl ProductValidator {
    /// Check a single untrusted value against the product shape.
    pub fn validate_product(item: &Value) -> Validation<Product> {
        let Some(obj) = item.as_object() else {
            return Validation::Invalid("product must be a JSON object".to_string());
        };

        if let Err(reason) = Self::check_fields(obj) {
            return Validation::Invalid(reason);
        }

        match Self::extract(obj) {
            Some(product) => Validation::Valid(product),
            None => Validation::Invalid("product fields changed type during extraction".to_string()),
        }
    }

    /// Keep the valid elements of `items`, in their original order.
    ///
    /// Invalid elements are dropped and logged; they never abort the batch.
    pub fn validate_products(items: &[Value]) -> Vec<Product> {
        items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| match Self::validate_product(item) {
                Validation::Valid(product) => Some(product),
                Validation::Invalid(reason) => {
                    warn!(index = idx, reason = %reason, item = %item, "Dropping invalid product data");
                    None
                }
            })
            .collect()
    }

    /// Decoder for the product collection endpoint.
    ///
    /// A payload that is not an array is an `InvalidShape`; a non-empty array
    /// in which nothing survives validation is `NoValidRecords`.
    pub fn decode_list(payload: Value) -> Result<Vec<Product>, AdminError> {
        let Value::Array(items) = payload else {
            warn!(payload = %payload, "Unrecognised product list format");
            return Err(AdminError::InvalidShape(format!(
                "expected a JSON array, got {}",
                Self::kind_of(&payload)
            )));
        };

        let products = Self::validate_products(&items);
        if products.is_empty() && !items.is_empty() {
            return Err(AdminError::NoValidRecords { total: items.len() });
        }
        Ok(products)
    }

    /// Decoder for the single product endpoint.
    pub fn decode_one(payload: Value) -> Result<Product, AdminError> {
        match Self::validate_product(&payload) {
            Validation::Valid(product) => Ok(product),
            Validation::Invalid(reason) => {
                warn!(reason = %reason, payload = %payload, "Invalid product data");
                Err(AdminError::InvalidShape(reason))
            }
        }
    }

    fn check_fields(obj: &Map<String, Value>) -> Result<(), String> {
        for (name, kind) in PRODUCT_FIELDS {
            match obj.get(*name) {
                None => return Err(format!("missing field '{}'", name)),
                Some(value) if !kind.matches(value) => {
                    return Err(format!(
                        "field '{}' must be {}, got {}",
                        name,
                        kind.describe(),
                        Self::kind_of(value)
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn extract(obj: &Map<String, Value>) -> Option<Product> {
        let text = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_string);

        Some(Product {
            id: ProductId::new(obj.get("id")?.as_i64()?),
            name: text("name")?,
            description: text("description")?,
            price: obj.get("price")?.as_f64()?,
            stock: obj.get("stock")?.as_i64()?,
            created_at: text("created_at")?,
            updated_at: text("updated_at")?,
        })
    }

    fn kind_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_item(id: i64) -> Value {
        json!({
            "id": id,
            "name": "A",
            "description": "d",
            "price": 100,
            "stock": 2,
            "created_at": "2024-01-01",
            "updated_at": "2024-01-02"
        })
    }

    #[test]
    fn test_valid_product() {
        let result = ProductValidator::validate_product(&valid_item(1));
        let product = result.ok().unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, 100.0);
        assert_eq!(product.updated_at, "2024-01-02");
    }

    #[test]
    fn test_fractional_price_allowed() {
        let mut item = valid_item(1);
        item["price"] = json!(1999.5);
        assert!(ProductValidator::validate_product(&item).is_valid());
    }

    #[test]
    fn test_each_field_is_checked() {
        for (name, _) in PRODUCT_FIELDS {
            let mut item = valid_item(1);
            item[*name] = json!(null);
            let result = ProductValidator::validate_product(&item);
            match result {
                Validation::Invalid(reason) => assert!(reason.contains(name), "{}", reason),
                Validation::Valid(_) => panic!("null '{}' must be rejected", name),
            }

            let mut missing = valid_item(1);
            missing.as_object_mut().unwrap().remove(*name);
            assert!(!ProductValidator::validate_product(&missing).is_valid());
        }
    }

    #[test]
    fn test_integer_fields_reject_fractions_and_strings() {
        let mut item = valid_item(1);
        item["id"] = json!("1");
        assert!(!ProductValidator::validate_product(&item).is_valid());

        let mut item = valid_item(1);
        item["stock"] = json!(2.5);
        assert!(!ProductValidator::validate_product(&item).is_valid());
    }

    #[test]
    fn test_mixed_list_keeps_valid_subset() {
        let items = vec![valid_item(1), json!({"id": "bad"}), json!(null), valid_item(3)];
        let products = ProductValidator::validate_products(&items);
        let ids: Vec<i64> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_decode_list_rejects_non_array() {
        let err = ProductValidator::decode_list(json!({"data": []})).unwrap_err();
        assert!(matches!(err, AdminError::InvalidShape(_)));
    }

    #[test]
    fn test_decode_list_all_invalid() {
        let err = ProductValidator::decode_list(json!([{"id": "bad"}])).unwrap_err();
        assert!(matches!(err, AdminError::NoValidRecords { total: 1 }));
    }

    #[test]
    fn test_decode_list_empty_array_is_ok() {
        assert!(ProductValidator::decode_list(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_decode_one_empty_object() {
        let err = ProductValidator::decode_one(json!({})).unwrap_err();
        assert!(err.to_string().contains("missing field 'id'"));
    }
}
