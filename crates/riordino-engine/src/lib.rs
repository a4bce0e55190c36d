//! Reorder metrics core.
//!
//! Two components, evaluated in order: the normalizer (schema validation,
//! type coercion, row filtering) and the metrics engine (per-item reorder
//! formulas, risk classification, priority ranking). Both are pure and
//! stateless per invocation.

pub mod calendar;
pub mod metrics;
pub mod normalize;

pub use calendar::workdays_in_month;
pub use metrics::{compute, compute_kpis};
pub use normalize::{missing_required_columns, normalize, validate_schema};
