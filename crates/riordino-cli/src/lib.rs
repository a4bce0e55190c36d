//! CLI library components for the riordino analyzer.

pub mod logging;
pub mod pipeline;
pub mod types;
