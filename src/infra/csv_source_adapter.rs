use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::app::ports::ObservationSourcePort;
use crate::common::error::NormalizerError;
use crate::config::SourceConfig;
use crate::domain::RawObservation;

/// CSV-backed implementation of ObservationSourcePort.
///
/// Header lookup is strict: a mapped column missing from the file is fatal.
/// Row parsing is permissive: missing fields become empty strings and an
/// unparseable price becomes NaN, which the normalizer later drops.
pub struct CsvSourceAdapter {
    path: PathBuf,
    columns: SourceConfig,
}

impl CsvSourceAdapter {
    pub fn new(path: &Path, columns: SourceConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            columns,
        }
    }

    fn read_table(&self) -> crate::common::error::Result<Vec<RawObservation>> {
        // Ragged rows surface as missing fields, not read errors
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let date_idx = column_index(&headers, &self.columns.date_column)?;
        let location_idx = column_index(&headers, &self.columns.location_column)?;
        let product_idx = column_index(&headers, &self.columns.product_column)?;
        let price_idx = column_index(&headers, &self.columns.price_column)?;

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result?;
            let price = record
                .get(price_idx)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .unwrap_or(f64::NAN);

            observations.push(RawObservation {
                date: record.get(date_idx).unwrap_or("").to_string(),
                location: record.get(location_idx).unwrap_or("").to_string(),
                product_description: record.get(product_idx).unwrap_or("").to_string(),
                price,
            });
        }

        Ok(observations)
    }
}

fn column_index(headers: &[String], name: &str) -> crate::common::error::Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| NormalizerError::MissingColumn(name.to_string()))
}

#[async_trait]
impl ObservationSourcePort for CsvSourceAdapter {
    async fn read_observations(&self) -> Result<Vec<RawObservation>> {
        let observations = self.read_table()?;
        info!(
            "Read {} rows from {}",
            observations.len(),
            self.path.display()
        );
        Ok(observations)
    }
}
