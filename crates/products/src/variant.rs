//! Editable variant rows and the value types they normalize into.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use catalog_core::DomainError;

/// Color given to freshly added groups (editable form, with `#`).
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Sizes the catalog sells.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    #[default]
    S,
    M,
    XL,
    XXL,
    XXXL,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::S, Size::M, Size::XL, Size::XXL, Size::XXXL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::XL => "XL",
            Size::XXL => "XXL",
            Size::XXXL => "XXXL",
        }
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown size: {s:?}")))
    }
}

/// One size/price/quantity line as the user is editing it.
///
/// Everything is kept as raw text; coercion happens at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRow {
    pub size: String,
    pub price: String,
    pub quantity: String,
}

impl Default for SizeRow {
    fn default() -> Self {
        Self {
            size: Size::default().as_str().to_string(),
            price: String::new(),
            quantity: String::new(),
        }
    }
}

/// All size rows sharing one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    pub color: String,
    pub sizes: Vec<SizeRow>,
}

impl Default for VariantGroup {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            sizes: vec![SizeRow::default()],
        }
    }
}

/// Strip surrounding whitespace and the display `#`. Case is kept, so a
/// stored code goes back to the service exactly as it came.
pub fn normalize_color(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed).to_string()
}

/// `true` for exactly six hex digits (already normalized, no `#`).
pub fn is_hex_color(normalized: &str) -> bool {
    normalized.len() == 6 && normalized.bytes().all(|b| b.is_ascii_hexdigit())
}
