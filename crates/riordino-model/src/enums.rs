//! Type-safe enumerations for the categorical item fields.
//!
//! Input files carry these concepts as free-form strings (mixed case,
//! synonyms, the occasional typo). Each enum owns a single canonicalization
//! function with an explicit default branch, so no string comparison leaks
//! into call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item criticality: how painful a stockout of this article is.
///
/// Canonical labels are the feminine forms (`bassa`/`media`/`alta`);
/// masculine synonyms are normalized. Unrecognized non-empty values fall
/// back to `Media` — the canonical policy, rather than passing unknown
/// labels through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Bassa,
    Media,
    Alta,
}

impl Criticality {
    /// Canonicalize a raw cell value.
    ///
    /// Returns `None` for empty input (a missing mandatory value: the row
    /// must be dropped, not defaulted).
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        Some(match normalized.as_str() {
            "bassa" | "basso" => Criticality::Bassa,
            "media" | "medio" => Criticality::Media,
            "alta" | "alto" => Criticality::Alta,
            _ => Criticality::Media,
        })
    }

    /// Returns the canonical label as it appears in input templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Bassa => "bassa",
            Criticality::Media => "media",
            Criticality::Alta => "alta",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether consumption of the article is seasonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seasonality {
    Si,
    #[default]
    No,
}

impl Seasonality {
    /// Canonicalize a raw cell value. Any value outside the yes-tokens
    /// (including empty) means not seasonal.
    pub fn canonicalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "si" | "sì" | "yes" | "y" | "true" | "1" => Seasonality::Si,
            _ => Seasonality::No,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Seasonality::Si => "si",
            Seasonality::No => "no",
        }
    }

    pub fn is_seasonal(&self) -> bool {
        matches!(self, Seasonality::Si)
    }
}

impl fmt::Display for Seasonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target service level used by the advanced safety-stock formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Basso,
    #[default]
    Medio,
    Alto,
}

impl ServiceLevel {
    /// Canonicalize a raw cell value. English synonyms are accepted;
    /// anything unrecognized (including empty) defaults to `Medio`.
    pub fn canonicalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "basso" | "low" => ServiceLevel::Basso,
            "medio" | "medium" => ServiceLevel::Medio,
            "alto" | "high" => ServiceLevel::Alto,
            _ => ServiceLevel::Medio,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevel::Basso => "basso",
            ServiceLevel::Medio => "medio",
            ServiceLevel::Alto => "alto",
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stockout risk classification, computed by the metrics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockoutRisk {
    Alto,
    Medio,
    Basso,
}

impl StockoutRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockoutRisk::Alto => "alto",
            StockoutRisk::Medio => "medio",
            StockoutRisk::Basso => "basso",
        }
    }

    /// Returns the sort order for the priority list: riskiest first.
    pub fn sort_order(&self) -> u8 {
        match self {
            StockoutRisk::Alto => 0,
            StockoutRisk::Medio => 1,
            StockoutRisk::Basso => 2,
        }
    }
}

impl fmt::Display for StockoutRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criticality_canonicalize() {
        assert_eq!(Criticality::canonicalize("alta"), Some(Criticality::Alta));
        assert_eq!(Criticality::canonicalize(" ALTO "), Some(Criticality::Alta));
        assert_eq!(Criticality::canonicalize("Medio"), Some(Criticality::Media));
        assert_eq!(Criticality::canonicalize("basso"), Some(Criticality::Bassa));
        // Unrecognized non-empty values fall back to media
        assert_eq!(
            Criticality::canonicalize("urgente"),
            Some(Criticality::Media)
        );
        // Empty means missing, not defaulted
        assert_eq!(Criticality::canonicalize("  "), None);
    }

    #[test]
    fn test_seasonality_canonicalize() {
        assert_eq!(Seasonality::canonicalize("sì"), Seasonality::Si);
        assert_eq!(Seasonality::canonicalize("YES"), Seasonality::Si);
        assert_eq!(Seasonality::canonicalize("1"), Seasonality::Si);
        assert_eq!(Seasonality::canonicalize("no"), Seasonality::No);
        assert_eq!(Seasonality::canonicalize(""), Seasonality::No);
        assert_eq!(Seasonality::canonicalize("boh"), Seasonality::No);
    }

    #[test]
    fn test_service_level_canonicalize() {
        assert_eq!(ServiceLevel::canonicalize("high"), ServiceLevel::Alto);
        assert_eq!(ServiceLevel::canonicalize("Basso"), ServiceLevel::Basso);
        assert_eq!(ServiceLevel::canonicalize(""), ServiceLevel::Medio);
        assert_eq!(ServiceLevel::canonicalize("???"), ServiceLevel::Medio);
    }

    #[test]
    fn test_risk_sort_order() {
        assert!(StockoutRisk::Alto.sort_order() < StockoutRisk::Medio.sort_order());
        assert!(StockoutRisk::Medio.sort_order() < StockoutRisk::Basso.sort_order());
    }
}
