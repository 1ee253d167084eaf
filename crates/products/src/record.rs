//! Variant records as the Catalog Service returns them for an existing product.
//!
//! One record per stored color; the product's scalar attributes are repeated
//! on every record.

use serde::{Deserialize, Serialize};

use catalog_core::{BrandId, TypeId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "kichThuoc")]
    pub size: String,
    #[serde(rename = "gia")]
    pub price: i64,
    #[serde(rename = "soLuong")]
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    #[serde(rename = "tenSanPham", default)]
    pub name: Option<String>,
    #[serde(rename = "maThuongHieu", default)]
    pub brand_id: Option<BrandId>,
    #[serde(rename = "loaiSanPham", default)]
    pub type_id: Option<TypeId>,
    #[serde(rename = "moTa", default)]
    pub description: Option<String>,
    /// Stored color code, six hex digits without `#`.
    #[serde(rename = "mauSac")]
    pub color: String,
    #[serde(default)]
    pub details: Vec<DetailRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "tenSanPham": "Polo",
            "maThuongHieu": 1,
            "loaiSanPham": 2,
            "moTa": null,
            "mauSac": "ff0000",
            "details": [{ "kichThuoc": "S         ", "gia": 100, "soLuong": 5 }]
        }"#;
        let record: VariantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name.as_deref(), Some("Polo"));
        assert_eq!(record.brand_id, Some(BrandId::new(1)));
        assert_eq!(record.type_id, Some(TypeId::new(2)));
        assert_eq!(record.description, None);
        assert_eq!(record.details[0].size, "S         ");
        assert_eq!(record.details[0].price, 100);
    }

    #[test]
    fn missing_header_fields_default_to_none() {
        let record: VariantRecord =
            serde_json::from_str(r#"{ "mauSac": "00ff00" }"#).unwrap();
        assert!(record.name.is_none());
        assert!(record.details.is_empty());
    }
}
