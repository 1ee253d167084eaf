//! Products domain module.
//!
//! This crate contains the catalog's client-side business rules: the product
//! variant edit form and its validation, plus the type/brand lookup lists.
//! It is pure, deterministic logic (no IO, no HTTP).

pub mod form;
pub mod record;
pub mod submission;
pub mod taxonomy;
pub mod validation;
pub mod variant;

pub use form::{FormField, VariantForm};
pub use record::{DetailRecord, VariantRecord};
pub use submission::{DetailItem, ProductEditItem, ProductEditRequest, VariantItem};
pub use taxonomy::{Brand, Named, NewBrand, NewProductType, ProductType, filter_by_name, validate_name};
pub use validation::{ErrorKey, ErrorSet, FieldError, MAX_AMOUNT, coerce_to_positive_int_or_zero};
pub use variant::{DEFAULT_COLOR, Size, SizeRow, VariantGroup};
