use anyhow::Result;
use async_trait::async_trait;

use crate::domain::RawObservation;
use crate::pipeline::processing::catalog::GroceryDocument;

/// Supplies the raw observations to normalize.
#[async_trait]
pub trait ObservationSourcePort: Send + Sync {
    async fn read_observations(&self) -> Result<Vec<RawObservation>>;
}

/// Receives the finished output document.
#[async_trait]
pub trait DocumentSinkPort: Send + Sync {
    async fn write_document(&self, document: &GroceryDocument) -> Result<()>;
}
