use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::app::ports::DocumentSinkPort;
use crate::pipeline::processing::catalog::GroceryDocument;

/// Sink that discards the document. Used for dry runs where only the
/// summary and the normalization outcome matter.
pub struct NoopDocumentAdapter;

#[async_trait]
impl DocumentSinkPort for NoopDocumentAdapter {
    async fn write_document(&self, document: &GroceryDocument) -> Result<()> {
        info!(
            "Dry run, discarding document with {} price records",
            document.prices.len()
        );
        Ok(())
    }
}
