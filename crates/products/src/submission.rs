//! Validated, normalized product edit ready to send to the Catalog Service.

use serde::{Deserialize, Serialize};

use catalog_core::{BrandId, ProductCode, TypeId};

use crate::variant::Size;

/// One normalized size line (size, price, quantity all checked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    #[serde(rename = "KichThuoc")]
    pub size: Size,
    #[serde(rename = "SoLuong")]
    pub quantity: u64,
    #[serde(rename = "Gia")]
    pub price: u64,
}

/// One normalized color with its size lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantItem {
    /// Six lowercase hex digits, no `#`.
    pub color: String,
    pub details: Vec<DetailItem>,
}

/// Output of a successful validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEditRequest {
    pub product_id: ProductCode,
    pub name: String,
    pub brand_id: Option<BrandId>,
    pub type_id: Option<TypeId>,
    pub description: Option<String>,
    pub variants: Vec<VariantItem>,
}

/// Wire item: one color of the product, carrying the product's scalar
/// attributes alongside its size lines. The edit endpoint takes a JSON array
/// of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEditItem {
    #[serde(rename = "ID")]
    pub product_id: ProductCode,
    #[serde(rename = "TenSanPham")]
    pub name: String,
    #[serde(rename = "MaThuongHieu")]
    pub brand_id: Option<BrandId>,
    #[serde(rename = "LoaiSanPham")]
    pub type_id: Option<TypeId>,
    #[serde(rename = "MauSac")]
    pub color: String,
    #[serde(rename = "MoTa")]
    pub description: Option<String>,
    /// Images are managed elsewhere; the edit endpoint expects `null`.
    #[serde(rename = "HinhAnhs")]
    pub images: Option<Vec<String>>,
    #[serde(rename = "Details")]
    pub details: Vec<DetailItem>,
}

impl ProductEditRequest {
    /// Flatten into the batch the edit endpoint accepts, one item per color.
    pub fn to_items(&self) -> Vec<ProductEditItem> {
        self.variants
            .iter()
            .map(|variant| ProductEditItem {
                product_id: self.product_id.clone(),
                name: self.name.clone(),
                brand_id: self.brand_id,
                type_id: self.type_id,
                color: variant.color.clone(),
                description: self.description.clone(),
                images: None,
                details: variant.details.clone(),
            })
            .collect()
    }
}
