//! Product types and brands: the two flat lookup lists products point at.

use serde::{Deserialize, Serialize};

use catalog_core::{BrandId, DomainError, DomainResult, TypeId};

/// Longest name the backend accepts for a type or brand.
pub const MAX_NAME_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    #[serde(rename = "maLoaiSanPham")]
    pub id: TypeId,
    #[serde(rename = "tenLoaiSanPham")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "maThuongHieu")]
    pub id: BrandId,
    #[serde(rename = "tenThuongHieu")]
    pub name: String,
}

/// Body for creating a product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductType {
    #[serde(rename = "tenLoaiSanPham")]
    pub name: String,
}

/// Body for creating a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    #[serde(rename = "tenThuongHieu")]
    pub name: String,
}

/// Anything listed and searched by display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for ProductType {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Brand {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Check a type/brand name before sending it. Returns the name unchanged.
pub fn validate_name(name: &str) -> DomainResult<&str> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(format!(
            "name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name)
}

/// Case-insensitive substring search over names. An empty term keeps all.
pub fn filter_by_name<'a, T: Named>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}
