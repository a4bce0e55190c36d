//! Configuration options for metrics computation.

use serde::{Deserialize, Serialize};

/// How safety stock is computed for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SafetyStockPolicy {
    /// Use the advanced (service-level) formula when `deviazione_standard`
    /// is present, the simple criticality formula otherwise.
    #[default]
    Auto,
    /// Always use the simple criticality formula.
    SimpleOnly,
}

/// Options controlling the metrics engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngineOptions {
    pub safety_stock: SafetyStockPolicy,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that force the simple criticality formula for every row,
    /// regardless of available inputs.
    pub fn simple_only() -> Self {
        Self {
            safety_stock: SafetyStockPolicy::SimpleOnly,
        }
    }
}
