use std::collections::HashSet;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::domain::{CanonicalUnit, NormalizedRecord};

/// The queryable output document: metadata plus category, location,
/// product, and price views over one normalization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryDocument {
    pub metadata: DocumentMetadata,
    pub categories: Vec<CategoryCount>,
    pub locations: Vec<LocationEntry>,
    pub products: Vec<ProductEntry>,
    pub prices: Vec<PriceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub processed_date: String,
    pub total_records: usize,
    pub date_range: DateRange,
    pub total_products: usize,
    pub total_locations: usize,
    pub total_categories: usize,
}

/// Lexicographic min and max of the record dates; null on an empty run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub location: String,
    pub city: String,
    pub province: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub product_name: String,
    pub product_category: String,
    pub product_unit: CanonicalUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: String,
    pub product_name: String,
    pub product_category: String,
    pub price_per_unit: f64,
    pub product_unit: CanonicalUnit,
    pub location: String,
    pub city: String,
    pub province: String,
}

/// Builds the output document from normalized records.
///
/// Products and locations are deduplicated in first-seen order; the
/// category histogram is sorted by descending count with ties keeping
/// first-seen order.
pub fn build_document(records: &[NormalizedRecord], source_label: &str) -> GroceryDocument {
    let mut products = Vec::new();
    let mut seen_products = HashSet::new();
    let mut locations = Vec::new();
    let mut seen_locations = HashSet::new();
    let mut category_order: Vec<String> = Vec::new();
    let mut category_counts: Vec<usize> = Vec::new();

    for record in records {
        let product_key = (
            record.product_name.clone(),
            record.category.clone(),
            record.unit,
        );
        if seen_products.insert(product_key) {
            products.push(ProductEntry {
                product_name: record.product_name.clone(),
                product_category: record.category.clone(),
                product_unit: record.unit,
            });
        }

        let location_key = (
            record.location.clone(),
            record.city.clone(),
            record.province.clone(),
        );
        if seen_locations.insert(location_key) {
            locations.push(LocationEntry {
                location: record.location.clone(),
                city: record.city.clone(),
                province: record.province.clone(),
            });
        }

        match category_order.iter().position(|c| c == &record.category) {
            Some(index) => category_counts[index] += 1,
            None => {
                category_order.push(record.category.clone());
                category_counts.push(1);
            }
        }
    }

    let mut categories: Vec<CategoryCount> = category_order
        .into_iter()
        .zip(category_counts)
        .map(|(name, count)| CategoryCount { name, count })
        .collect();
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    let date_range = DateRange {
        min: records.iter().map(|r| r.date.as_str()).min().map(String::from),
        max: records.iter().map(|r| r.date.as_str()).max().map(String::from),
    };

    let prices: Vec<PriceRecord> = records
        .iter()
        .map(|record| PriceRecord {
            date: record.date.clone(),
            product_name: record.product_name.clone(),
            product_category: record.category.clone(),
            price_per_unit: record.price_per_unit,
            product_unit: record.unit,
            location: record.location.clone(),
            city: record.city.clone(),
            province: record.province.clone(),
        })
        .collect();

    GroceryDocument {
        metadata: DocumentMetadata {
            source: source_label.to_string(),
            processed_date: Local::now().format("%Y-%m-%d").to_string(),
            total_records: prices.len(),
            date_range,
            total_products: products.len(),
            total_locations: locations.len(),
            total_categories: categories.len(),
        },
        categories,
        locations,
        products,
        prices,
    }
}
