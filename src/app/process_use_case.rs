use anyhow::Result;
use tracing::info;

use crate::app::ports::{DocumentSinkPort, ObservationSourcePort};
use crate::pipeline::processing::catalog::{self, GroceryDocument};
use crate::pipeline::processing::normalize::{normalize_batch, NormalizeStats, Normalizer, PriceNormalizer};

/// Use case for running the full normalization pipeline: read observations,
/// normalize them, aggregate the document, and hand it to the sink.
pub struct ProcessUseCase {
    source: Box<dyn ObservationSourcePort>,
    sink: Box<dyn DocumentSinkPort>,
    normalizer: Box<dyn Normalizer>,
    source_label: String,
}

/// What one pipeline run produced.
pub struct RunOutcome {
    pub document: GroceryDocument,
    pub stats: NormalizeStats,
}

impl ProcessUseCase {
    pub fn new(
        source: Box<dyn ObservationSourcePort>,
        sink: Box<dyn DocumentSinkPort>,
        normalizer: Box<dyn Normalizer>,
        source_label: String,
    ) -> Self {
        Self {
            source,
            sink,
            normalizer,
            source_label,
        }
    }

    /// Wires in the default row normalizer.
    pub fn with_default_normalizer(
        source: Box<dyn ObservationSourcePort>,
        sink: Box<dyn DocumentSinkPort>,
        source_label: String,
    ) -> Self {
        Self::new(source, sink, Box::new(PriceNormalizer::new()), source_label)
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        let observations = self.source.read_observations().await?;
        info!("Loaded {} rows", observations.len());

        let (records, stats) = normalize_batch(&observations, self.normalizer.as_ref());
        info!(
            "Normalized {} rows ({} dropped)",
            stats.normalized, stats.dropped
        );

        let document = catalog::build_document(&records, &self.source_label);
        info!(
            "Built document: {} products, {} locations, {} categories",
            document.metadata.total_products,
            document.metadata.total_locations,
            document.metadata.total_categories
        );

        self.sink.write_document(&document).await?;

        Ok(RunOutcome { document, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::DocumentSinkPort;
    use crate::domain::RawObservation;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticObservationSource {
        observations: Vec<RawObservation>,
    }

    #[async_trait]
    impl ObservationSourcePort for StaticObservationSource {
        async fn read_observations(&self) -> Result<Vec<RawObservation>> {
            Ok(self.observations.clone())
        }
    }

    struct CapturingSink {
        pub documents: Arc<tokio::sync::Mutex<Vec<GroceryDocument>>>,
    }

    impl CapturingSink {
        fn new() -> Self {
            Self {
                documents: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl DocumentSinkPort for CapturingSink {
        async fn write_document(&self, document: &GroceryDocument) -> Result<()> {
            self.documents.lock().await.push(document.clone());
            Ok(())
        }
    }

    fn observation(description: &str, price: f64) -> RawObservation {
        RawObservation {
            date: "2023-01".to_string(),
            location: "Toronto, Ontario".to_string(),
            product_description: description.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_run_normalizes_and_writes_document() {
        let source = Box::new(StaticObservationSource {
            observations: vec![
                observation("Potatoes, 1 kilogram", 2.00),
                observation("Beef, ground, per kilogram", 10.50),
                observation("Broken row", 0.0),
            ],
        });
        let sink = Box::new(CapturingSink::new());
        let documents_ref = sink.documents.clone();

        let use_case =
            ProcessUseCase::with_default_normalizer(source, sink, "Test Source".to_string());
        let outcome = use_case.run().await.unwrap();

        assert_eq!(outcome.stats.total_rows, 3);
        assert_eq!(outcome.stats.normalized, 2);
        assert_eq!(outcome.stats.dropped, 1);
        assert_eq!(outcome.document.metadata.total_records, 2);
        assert_eq!(outcome.document.metadata.source, "Test Source");

        let written = documents_ref.lock().await;
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].prices.len(), 2);
    }
}
