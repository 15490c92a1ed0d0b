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

//! Domain models for the catalog admin client.
//!
//! Pure data structures for the records the API hands back. Nothing in here
//! performs I/O; shape checks for untrusted payloads live in
//! `utils::product_validator`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Newtype wrapper around the numeric product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(ProductId)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product as admitted into page state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// The authenticated user, as returned by `/api/user`.
///
/// Decoding never fails on field shape: a missing, null or mistyped field
/// falls back to its empty value and renders blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub email: String,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parse() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap().get(), 7);
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_user_decodes_ignoring_extra_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Hanako",
            "email": "hanako@example.com",
            "email_verified_at": null
        }))
        .unwrap();
        assert_eq!(user.id, Some(3));
        assert_eq!(user.email, "hanako@example.com");
    }

    #[test]
    fn test_user_tolerates_null_and_mistyped_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "3",
            "email": null
        }))
        .unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }
}
