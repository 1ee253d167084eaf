//! Keyed validation errors and numeric coercion for the variant form.
//!
//! Error keys are string paths (`"1-color"`, `"0-details-2-price"`) that the
//! rendering layer uses to place each message next to its field. Their format
//! is part of the public contract and must not change.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Location of a validation failure inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// The form has no color groups at all.
    Variants,
    /// A group's color field.
    Color { group: usize },
    /// A group's size list as a whole.
    Details { group: usize },
    Size { group: usize, row: usize },
    Price { group: usize, row: usize },
    Quantity { group: usize, row: usize },
}

impl core::fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKey::Variants => f.write_str("variants"),
            ErrorKey::Color { group } => write!(f, "{group}-color"),
            ErrorKey::Details { group } => write!(f, "{group}-details"),
            ErrorKey::Size { group, row } => write!(f, "{group}-details-{row}-size"),
            ErrorKey::Price { group, row } => write!(f, "{group}-details-{row}-price"),
            ErrorKey::Quantity { group, row } => write!(f, "{group}-details-{row}-quantity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: ErrorKey,
    pub message: String,
}

/// Every violation found in one validation pass, in discovery order.
///
/// Serializes as a JSON object `{ "<key>": "<message>", ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("form has {} validation error(s)", .errors.len())]
pub struct ErrorSet {
    errors: Vec<FieldError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. A key is reported at most once; the first message
    /// recorded for it is kept.
    pub fn push(&mut self, key: ErrorKey, message: impl Into<String>) {
        if self.contains(key) {
            return;
        }
        self.errors.push(FieldError {
            key,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.errors.iter().any(|e| e.key == key)
    }

    /// Look up a message by its rendered path, e.g. `"0-details-1-size"`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.key.to_string() == path)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn paths(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.key.to_string()).collect()
    }
}

impl Serialize for ErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for e in &self.errors {
            map.serialize_entry(&e.key.to_string(), &e.message)?;
        }
        map.end()
    }
}

/// Largest price or quantity the Catalog Service stores (a signed 32-bit int).
pub const MAX_AMOUNT: u64 = i32::MAX as u64;

/// Lenient integer coercion for price/quantity inputs.
///
/// Reads an optional sign and the leading run of decimal digits after any
/// leading whitespace, ignoring whatever follows (`"12kg"` is 12, `"1.5"` is
/// 1). Anything without leading digits and any value `<= 0` yields `0`,
/// which the positivity check then rejects. Digit runs too long for `u64`
/// saturate at `u64::MAX` so they fail the [`MAX_AMOUNT`] check instead.
pub fn coerce_to_positive_int_or_zero(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 || negative {
        return 0;
    }
    rest[..end].parse::<u64>().unwrap_or(u64::MAX)
}
