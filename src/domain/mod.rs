use serde::{Deserialize, Serialize};

/// One row of the source table, before any normalization.
///
/// A price that could not be parsed upstream is carried as NaN and removed
/// later by the positivity filter.
#[derive(Debug, Clone)]
pub struct RawObservation {
    pub date: String,
    pub location: String,
    pub product_description: String,
    pub price: f64,
}

/// Canonical unit of measure a normalized price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalUnit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "L")]
    Litre,
    #[serde(rename = "unit")]
    Each,
}

/// Measurable quantity extracted from a product description.
///
/// `Each` with value 1.0 means no weight or volume was found; the value is
/// then never used as a divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightUnit {
    pub value: f64,
    pub unit: CanonicalUnit,
}

/// A fully normalized price observation. Derived deterministically from
/// exactly one `RawObservation`; `price_per_unit` is always positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub date: String,
    pub product_name: String,
    pub category: String,
    pub price_per_unit: f64,
    pub unit: CanonicalUnit,
    pub location: String,
    pub city: String,
    pub province: String,
}
