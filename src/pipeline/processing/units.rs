use crate::domain::{CanonicalUnit, WeightUnit};
use crate::pipeline::processing::patterns;

/// Extracts the measurable quantity a price refers to.
///
/// Two cases, in priority order:
/// 1. "per kilogram" style phrasing: the price is already per unit, so the
///    value is 1.0 and only the unit needs mapping.
/// 2. A package size such as "500 grams": the value is converted to the
///    canonical unit (kg or L) and later used as the price divisor.
///
/// When neither is present the observation is priced per item.
pub fn extract_weight(description: &str) -> WeightUnit {
    if let Some(caps) = patterns::PER_UNIT.captures(description) {
        let unit = match caps["unit"].to_lowercase().as_str() {
            "kilogram" | "kg" => CanonicalUnit::Kilogram,
            // Per-gram pricing, rare but possible
            "gram" | "g" => CanonicalUnit::Kilogram,
            "litre" | "l" => CanonicalUnit::Litre,
            // Per-ml pricing, rare but possible
            "ml" | "millilitre" => CanonicalUnit::Litre,
            _ => CanonicalUnit::Kilogram,
        };
        return WeightUnit { value: 1.0, unit };
    }

    if let Some(caps) = patterns::PACKAGE_SIZE.captures(description) {
        let value: f64 = caps["value"].parse().unwrap_or(0.0);
        return match caps["unit"].to_lowercase().as_str() {
            "g" | "gram" | "grams" => WeightUnit {
                value: value / 1000.0,
                unit: CanonicalUnit::Kilogram,
            },
            "ml" | "millilitre" | "millilitres" => WeightUnit {
                value: value / 1000.0,
                unit: CanonicalUnit::Litre,
            },
            "l" | "litre" | "litres" => WeightUnit {
                value,
                unit: CanonicalUnit::Litre,
            },
            // kg or kilogram(s)
            _ => WeightUnit {
                value,
                unit: CanonicalUnit::Kilogram,
            },
        };
    }

    // No weight or volume found, priced per item
    WeightUnit {
        value: 1.0,
        unit: CanonicalUnit::Each,
    }
}
