pub mod csv_source_adapter;
pub mod json_document_adapter;
pub mod noop_document_adapter;
