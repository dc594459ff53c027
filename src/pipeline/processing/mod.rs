// Pipeline processing: text extraction, row normalization, and aggregation

pub mod catalog;
pub mod category;
pub mod location;
pub mod name;
pub mod normalize;
pub mod patterns;
pub mod units;
