use rayon::prelude::*;
use tracing::debug;

use crate::domain::{NormalizedRecord, RawObservation};
use crate::pipeline::processing::{category, location, name, patterns, units};

/// Why a row was excluded from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Price was NaN, zero, or negative after normalization.
    NonPositivePrice,
}

/// The outcome of normalizing a single observation. Dropping a row is part
/// of normal operation, not an error.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    Record(NormalizedRecord),
    Dropped(DropReason),
}

/// Trait for turning raw observations into normalized price records.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, observation: &RawObservation) -> RowOutcome;
}

/// Tallies for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeStats {
    pub total_rows: usize,
    pub normalized: usize,
    pub dropped: usize,
}

/// Default row normalizer covering the Statistics Canada price tables.
pub struct PriceNormalizer;

impl PriceNormalizer {
    pub fn new() -> Self {
        PriceNormalizer
    }
}

impl Default for PriceNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for PriceNormalizer {
    fn normalize(&self, observation: &RawObservation) -> RowOutcome {
        let date = normalize_date(&observation.date);

        // "per kilogram" style descriptions are already priced per unit
        let per_unit = patterns::PER_UNIT.is_match(&observation.product_description);
        let weight = units::extract_weight(&observation.product_description);

        let product_name = name::clean_product_name(&observation.product_description);
        let category = category::classify(&product_name);

        let raw_price = observation.price;
        let price = if per_unit {
            raw_price
        } else if weight.value > 0.0 {
            raw_price / weight.value
        } else {
            raw_price
        };
        let price_per_unit = round_to_cents(price);

        // NaN prices from unparseable source values end up here as well
        if price_per_unit.is_nan() || price_per_unit <= 0.0 {
            debug!(
                description = %observation.product_description,
                price = observation.price,
                "dropping row with non-positive price"
            );
            return RowOutcome::Dropped(DropReason::NonPositivePrice);
        }

        let location_name = name::title_case(observation.location.trim());
        let (city, province) = location::split_location(&location_name);

        RowOutcome::Record(NormalizedRecord {
            date,
            product_name,
            category: category.to_string(),
            price_per_unit,
            unit: weight.unit,
            location: location_name,
            city,
            province,
        })
    }
}

/// Converts bare "YYYY-MM" dates to "YYYY-MM-01"; anything else passes
/// through unchanged.
pub fn normalize_date(date: &str) -> String {
    let date = date.trim();
    if patterns::YEAR_MONTH.is_match(date) {
        return format!("{}-01", date);
    }
    date.to_string()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normalizes a batch of observations in parallel, preserving input order
/// for the surviving records.
pub fn normalize_batch(
    observations: &[RawObservation],
    normalizer: &dyn Normalizer,
) -> (Vec<NormalizedRecord>, NormalizeStats) {
    let outcomes: Vec<RowOutcome> = observations
        .par_iter()
        .map(|observation| normalizer.normalize(observation))
        .collect();

    let mut records = Vec::with_capacity(outcomes.len());
    let mut stats = NormalizeStats {
        total_rows: observations.len(),
        ..Default::default()
    };

    for outcome in outcomes {
        match outcome {
            RowOutcome::Record(record) => records.push(record),
            RowOutcome::Dropped(_) => stats.dropped += 1,
        }
    }
    stats.normalized = records.len();

    (records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CanonicalUnit;

    fn observation(date: &str, location: &str, description: &str, price: f64) -> RawObservation {
        RawObservation {
            date: date.to_string(),
            location: location.to_string(),
            product_description: description.to_string(),
            price,
        }
    }

    fn expect_record(outcome: RowOutcome) -> NormalizedRecord {
        match outcome {
            RowOutcome::Record(record) => record,
            RowOutcome::Dropped(reason) => panic!("row was dropped: {:?}", reason),
        }
    }

    #[test]
    fn test_normalize_date_pads_year_month() {
        assert_eq!(normalize_date("2023-05"), "2023-05-01");
        assert_eq!(normalize_date(" 2023-05 "), "2023-05-01");
        assert_eq!(normalize_date("2023-05-15"), "2023-05-15");
        assert_eq!(normalize_date("not a date"), "not a date");
    }

    #[test]
    fn test_package_priced_row_divides_by_weight() {
        let normalizer = PriceNormalizer::new();
        let record = expect_record(normalizer.normalize(&observation(
            "2023-01",
            "toronto, ontario",
            "Potatoes, 1 kilogram",
            2.00,
        )));

        assert_eq!(record.date, "2023-01-01");
        assert_eq!(record.product_name, "Potatoes");
        assert_eq!(record.category, "vegetable");
        assert_eq!(record.price_per_unit, 2.00);
        assert_eq!(record.unit, CanonicalUnit::Kilogram);
        assert_eq!(record.location, "Toronto, Ontario");
        assert_eq!(record.city, "Toronto");
        assert_eq!(record.province, "Ontario");
    }

    #[test]
    fn test_half_kilogram_package_doubles_price() {
        let normalizer = PriceNormalizer::new();
        let record = expect_record(normalizer.normalize(&observation(
            "2023-02",
            "Canada",
            "Chicken breasts, 500 grams",
            6.25,
        )));

        assert_eq!(record.price_per_unit, 12.50);
        assert_eq!(record.unit, CanonicalUnit::Kilogram);
        assert_eq!(record.city, "");
        assert_eq!(record.province, "Canada");
    }

    #[test]
    fn test_per_unit_row_keeps_price() {
        let normalizer = PriceNormalizer::new();
        let record = expect_record(normalizer.normalize(&observation(
            "2023-01",
            "Canada",
            "Beef, ground, per kilogram",
            10.50,
        )));

        assert_eq!(record.product_name, "Beef Ground");
        assert_eq!(record.category, "beef");
        assert_eq!(record.price_per_unit, 10.50);
        assert_eq!(record.unit, CanonicalUnit::Kilogram);
    }

    #[test]
    fn test_each_priced_row_keeps_price() {
        let normalizer = PriceNormalizer::new();
        let record = expect_record(normalizer.normalize(&observation(
            "2023-03",
            "Canada",
            "Toothpaste",
            3.49,
        )));

        assert_eq!(record.price_per_unit, 3.49);
        assert_eq!(record.unit, CanonicalUnit::Each);
    }

    #[test]
    fn test_price_is_rounded_to_cents() {
        let normalizer = PriceNormalizer::new();
        // 10.00 / 3 = 3.333... rounds to 3.33
        let record = expect_record(normalizer.normalize(&observation(
            "2023-01",
            "Canada",
            "Rice, 3 kg",
            10.00,
        )));
        assert_eq!(record.price_per_unit, 3.33);
    }

    #[test]
    fn test_non_positive_prices_are_dropped() {
        let normalizer = PriceNormalizer::new();

        let zero = normalizer.normalize(&observation("2023-01", "Canada", "Potatoes", 0.0));
        assert!(matches!(
            zero,
            RowOutcome::Dropped(DropReason::NonPositivePrice)
        ));

        let negative = normalizer.normalize(&observation("2023-01", "Canada", "Potatoes", -2.0));
        assert!(matches!(
            negative,
            RowOutcome::Dropped(DropReason::NonPositivePrice)
        ));

        let nan = normalizer.normalize(&observation("2023-01", "Canada", "Potatoes", f64::NAN));
        assert!(matches!(
            nan,
            RowOutcome::Dropped(DropReason::NonPositivePrice)
        ));
    }

    #[test]
    fn test_price_rounding_to_zero_is_dropped() {
        let normalizer = PriceNormalizer::new();
        // 0.004 rounds to 0.00, which fails the positivity filter
        let outcome = normalizer.normalize(&observation("2023-01", "Canada", "Potatoes", 0.004));
        assert!(matches!(
            outcome,
            RowOutcome::Dropped(DropReason::NonPositivePrice)
        ));
    }

    #[test]
    fn test_batch_preserves_order_and_counts_drops() {
        let normalizer = PriceNormalizer::new();
        let observations = vec![
            observation("2023-01", "Canada", "Potatoes, 1 kilogram", 2.00),
            observation("2023-01", "Canada", "Broken row", 0.0),
            observation("2023-02", "Canada", "Milk, per litre", 1.75),
        ];

        let (records, stats) = normalize_batch(&observations, &normalizer);

        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.normalized, 2);
        assert_eq!(stats.dropped, 1);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product_name, "Potatoes");
        assert_eq!(records[1].product_name, "Milk");
        assert_eq!(records[1].unit, CanonicalUnit::Litre);
    }
}
