use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::app::ports::DocumentSinkPort;
use crate::pipeline::processing::catalog::GroceryDocument;

/// File-based implementation of DocumentSinkPort that writes the document
/// as a single JSON file, creating parent directories as needed.
pub struct JsonDocumentAdapter {
    path: PathBuf,
    pretty: bool,
}

impl JsonDocumentAdapter {
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
        }
    }

    fn write_file(&self, document: &GroceryDocument) -> crate::common::error::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentSinkPort for JsonDocumentAdapter {
    async fn write_document(&self, document: &GroceryDocument) -> Result<()> {
        self.write_file(document)?;
        info!(
            "Wrote {} price records to {}",
            document.prices.len(),
            self.path.display()
        );
        Ok(())
    }
}
