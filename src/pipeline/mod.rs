// Data processing pipeline: row normalization and document assembly

pub mod processing;
