//! Strongly-typed identifiers used across the catalog.
//!
//! All identifiers are assigned by the Catalog Service; the client never
//! mints them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product type (category).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(i32);

/// Identifier of a brand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(raw: i32) -> Self {
                Self(raw)
            }

            pub fn get(&self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(TypeId, "TypeId");
impl_int_newtype!(BrandId, "BrandId");

/// Product code (e.g. `A00001`), the backend's primary key for a product.
///
/// Deserialization goes through [`FromStr`], so a blank code in a saved
/// draft is rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(DomainError::invalid_id("ProductCode: empty"));
        }
        Ok(Self(code.to_string()))
    }
}

impl TryFrom<String> for ProductCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductCode> for String {
    fn from(value: ProductCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_ids_parse_with_surrounding_whitespace() {
        assert_eq!(" 7 ".parse::<TypeId>().unwrap(), TypeId::new(7));
        assert_eq!("12".parse::<BrandId>().unwrap().get(), 12);
    }

    #[test]
    fn int_ids_reject_garbage() {
        let err = "abc".parse::<BrandId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("BrandId")),
            _ => panic!("Expected InvalidId"),
        }
    }

    #[test]
    fn product_code_is_trimmed_and_required() {
        let code: ProductCode = "  A00001 ".parse().unwrap();
        assert_eq!(code.as_str(), "A00001");
        assert!("   ".parse::<ProductCode>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&TypeId::new(3)).unwrap();
        assert_eq!(json, "3");
        let code: ProductCode = serde_json::from_str("\"B0002\"").unwrap();
        assert_eq!(code.to_string(), "B0002");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"B0002\"");
    }

    #[test]
    fn product_code_deserialization_validates() {
        let code: ProductCode = serde_json::from_str("\" A1 \"").unwrap();
        assert_eq!(code.as_str(), "A1");

        let err = serde_json::from_str::<ProductCode>("\"\"").unwrap_err();
        assert!(err.to_string().contains("ProductCode: empty"));
        assert!(serde_json::from_str::<ProductCode>("\"   \"").is_err());
    }
}
