//! Variant form: the editable state behind the product edit dialog.
//!
//! The form holds raw, user-typed text and never validates on write. All
//! checks run in a single pass in [`VariantForm::build_submission`], which
//! either yields a normalized [`ProductEditRequest`] or the full [`ErrorSet`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use catalog_core::{BrandId, DomainError, DomainResult, ProductCode, TypeId};

use crate::record::VariantRecord;
use crate::submission::{DetailItem, ProductEditRequest, VariantItem};
use crate::validation::{ErrorKey, ErrorSet, MAX_AMOUNT, coerce_to_positive_int_or_zero};
use crate::variant::{Size, SizeRow, VariantGroup, is_hex_color, normalize_color};

/// Field addressed by [`VariantForm::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Color,
    Size,
    Price,
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantForm {
    product_id: ProductCode,
    name: String,
    brand_id: String,
    type_id: String,
    description: String,
    colors: Vec<VariantGroup>,
}

impl VariantForm {
    /// Build the form from the records fetched for `product_id`.
    ///
    /// With no records the form starts with one default color holding one
    /// blank `S` row, so it is never rendered empty.
    pub fn initialize(product_id: ProductCode, records: &[VariantRecord]) -> Self {
        let Some(first) = records.first() else {
            return Self {
                product_id,
                name: String::new(),
                brand_id: String::new(),
                type_id: String::new(),
                description: String::new(),
                colors: vec![VariantGroup::default()],
            };
        };

        let colors = records
            .iter()
            .map(|record| VariantGroup {
                color: format!("#{}", record.color),
                sizes: record
                    .details
                    .iter()
                    .map(|detail| SizeRow {
                        size: detail.size.trim().to_string(),
                        price: detail.price.to_string(),
                        quantity: detail.quantity.to_string(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            product_id,
            name: first.name.clone().unwrap_or_default(),
            brand_id: first.brand_id.map(|id| id.to_string()).unwrap_or_default(),
            type_id: first.type_id.map(|id| id.to_string()).unwrap_or_default(),
            description: first.description.clone().unwrap_or_default(),
            colors,
        }
    }

    pub fn product_id(&self) -> &ProductCode {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand_id(&self) -> &str {
        &self.brand_id
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn colors(&self) -> &[VariantGroup] {
        &self.colors
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_brand_id(&mut self, value: impl Into<String>) {
        self.brand_id = value.into();
    }

    pub fn set_type_id(&mut self, value: impl Into<String>) {
        self.type_id = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Append a `#ffffff` group with one blank row. Duplicates are allowed
    /// until submission.
    pub fn add_color(&mut self) {
        self.colors.push(VariantGroup::default());
    }

    pub fn add_size_row(&mut self, color_index: usize) -> DomainResult<()> {
        self.group_mut(color_index)?.sizes.push(SizeRow::default());
        Ok(())
    }

    /// Removing the last row of a group is allowed here; submission rejects
    /// the empty group.
    pub fn remove_size_row(&mut self, color_index: usize, size_index: usize) -> DomainResult<()> {
        let group = self.group_mut(color_index)?;
        if size_index >= group.sizes.len() {
            return Err(DomainError::out_of_range(format!(
                "size row {size_index} of color {color_index} (len {})",
                group.sizes.len()
            )));
        }
        group.sizes.remove(size_index);
        Ok(())
    }

    pub fn remove_color(&mut self, color_index: usize) -> DomainResult<()> {
        self.group_mut(color_index)?;
        self.colors.remove(color_index);
        Ok(())
    }

    /// Plain assignment of one field. `size_index` is ignored for
    /// [`FormField::Color`] and required for every other field.
    pub fn set_field(
        &mut self,
        color_index: usize,
        size_index: Option<usize>,
        field: FormField,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        let group = self.group_mut(color_index)?;
        if field == FormField::Color {
            group.color = value.into();
            return Ok(());
        }

        let size_index = size_index.ok_or_else(|| {
            DomainError::validation(format!("{field:?} requires a size row index"))
        })?;
        let len = group.sizes.len();
        let row = group.sizes.get_mut(size_index).ok_or_else(|| {
            DomainError::out_of_range(format!(
                "size row {size_index} of color {color_index} (len {len})"
            ))
        })?;
        let value = value.into();
        match field {
            FormField::Size => row.size = value,
            FormField::Price => row.price = value,
            FormField::Quantity => row.quantity = value,
            FormField::Color => unreachable!("handled above"),
        }
        Ok(())
    }

    /// Normalize and validate the whole form in one pass.
    ///
    /// Every violation across every group and row is collected; nothing
    /// short-circuits. Malformed numbers never error, they coerce to `0` and
    /// fail the positivity check.
    pub fn build_submission(&self) -> Result<ProductEditRequest, ErrorSet> {
        let mut errors = ErrorSet::new();
        let mut seen_colors: HashSet<String> = HashSet::new();
        let mut variants = Vec::with_capacity(self.colors.len());

        if self.colors.is_empty() {
            errors.push(ErrorKey::Variants, "at least one color is required");
        }

        for (group_idx, group) in self.colors.iter().enumerate() {
            let color = normalize_color(&group.color);

            if !is_hex_color(&color) {
                errors.push(
                    ErrorKey::Color { group: group_idx },
                    format!("color {} is not a 6-digit hex code", group.color),
                );
            } else if !seen_colors.insert(color.clone()) {
                errors.push(
                    ErrorKey::Color { group: group_idx },
                    format!("color {color} already exists"),
                );
            }

            if group.sizes.is_empty() {
                errors.push(
                    ErrorKey::Details { group: group_idx },
                    format!("color {color} has no sizes"),
                );
            }

            let mut seen_sizes: HashSet<Size> = HashSet::new();
            let mut details = Vec::with_capacity(group.sizes.len());

            for (row_idx, row) in group.sizes.iter().enumerate() {
                let label = row.size.trim();
                let price = coerce_to_positive_int_or_zero(&row.price);
                let quantity = coerce_to_positive_int_or_zero(&row.quantity);

                match label.parse::<Size>() {
                    Ok(size) => {
                        if !seen_sizes.insert(size) {
                            errors.push(
                                ErrorKey::Size {
                                    group: group_idx,
                                    row: row_idx,
                                },
                                format!("size {size} of color {color} already exists"),
                            );
                        }
                        details.push(DetailItem {
                            size,
                            quantity,
                            price,
                        });
                    }
                    Err(_) => errors.push(
                        ErrorKey::Size {
                            group: group_idx,
                            row: row_idx,
                        },
                        format!(
                            "size {label} of color {color} is not one of S, M, XL, XXL, XXXL"
                        ),
                    ),
                }

                let price_key = ErrorKey::Price {
                    group: group_idx,
                    row: row_idx,
                };
                if price == 0 {
                    errors.push(
                        price_key,
                        format!("price of size {label} in color {color} must be greater than 0"),
                    );
                } else if price > MAX_AMOUNT {
                    errors.push(
                        price_key,
                        format!(
                            "price of size {label} in color {color} is too large (max {MAX_AMOUNT})"
                        ),
                    );
                }

                let quantity_key = ErrorKey::Quantity {
                    group: group_idx,
                    row: row_idx,
                };
                if quantity == 0 {
                    errors.push(
                        quantity_key,
                        format!(
                            "quantity of size {label} in color {color} must be greater than 0"
                        ),
                    );
                } else if quantity > MAX_AMOUNT {
                    errors.push(
                        quantity_key,
                        format!(
                            "quantity of size {label} in color {color} is too large (max {MAX_AMOUNT})"
                        ),
                    );
                }
            }

            variants.push(VariantItem { color, details });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let description = Some(self.description.clone()).filter(|d| !d.is_empty());
        Ok(ProductEditRequest {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            brand_id: self.brand_id.parse::<BrandId>().ok(),
            type_id: self.type_id.parse::<TypeId>().ok(),
            description,
            variants,
        })
    }

    fn group_mut(&mut self, color_index: usize) -> DomainResult<&mut VariantGroup> {
        let len = self.colors.len();
        self.colors
            .get_mut(color_index)
            .ok_or_else(|| DomainError::out_of_range(format!("color {color_index} (len {len})")))
    }
}
