// Observability: logging and monitoring

pub mod logging;

// Re-export main functions for ease of use
pub use logging::init_logging;
