//! Item records and derived reorder metrics.

use serde::{Deserialize, Serialize};

use crate::enums::{Criticality, Seasonality, ServiceLevel, StockoutRisk};

pub const COL_ARTICOLO: &str = "articolo";
pub const COL_UNITA_MISURA: &str = "unita_misura";
pub const COL_CONSUMO_MENSILE: &str = "consumo_mensile";
pub const COL_LEAD_TIME_GIORNI: &str = "lead_time_giorni";
pub const COL_STOCK_ATTUALE: &str = "stock_attuale";
pub const COL_CRITICITA: &str = "criticita";
pub const COL_VALORE_UNITARIO: &str = "valore_unitario";
pub const COL_STAGIONALE: &str = "stagionale";
pub const COL_INDICE_ROTAZIONE: &str = "indice_rotazione";
pub const COL_DEVIAZIONE_STANDARD: &str = "deviazione_standard";
pub const COL_LIVELLO_SERVIZIO: &str = "livello_servizio";

/// Columns that must be present in the input schema, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_ARTICOLO,
    COL_CONSUMO_MENSILE,
    COL_LEAD_TIME_GIORNI,
    COL_STOCK_ATTUALE,
    COL_CRITICITA,
    COL_VALORE_UNITARIO,
];

/// Default unit of measure when the `unita_misura` column is absent.
pub const DEFAULT_UNIT: &str = "pz";

/// One stock-keeping unit, after normalization.
///
/// Numeric fields are non-negative by construction: the normalizer treats
/// negative or unparseable values as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub articolo: String,
    pub unita_misura: String,
    /// Monthly consumption, in `unita_misura` units.
    pub consumo_mensile: f64,
    pub lead_time_giorni: f64,
    pub stock_attuale: f64,
    pub criticita: Criticality,
    /// Unit value in euro.
    pub valore_unitario: f64,
    pub stagionale: Seasonality,
    pub indice_rotazione: Option<f64>,
    /// Standard deviation of monthly consumption. Its presence selects the
    /// advanced safety-stock formula.
    pub deviazione_standard: Option<f64>,
    pub livello_servizio: ServiceLevel,
}

/// An item augmented with its computed reorder metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderSignal {
    #[serde(flatten)]
    pub item: Item,
    pub consumo_giornaliero: f64,
    /// Expected demand over the lead time, in units.
    pub domanda_lt: f64,
    pub scorta_sicurezza: f64,
    pub punto_riordino: u64,
    pub qty_suggerita: u64,
    pub rischio_stockout: StockoutRisk,
    /// Money value of the suggested order, 2 decimals.
    pub valore_ordine_suggerito: f64,
    /// Money tied up in current stock, 2 decimals.
    pub capitale_immobilizzato: f64,
}

/// Aggregate indicators over a full result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub items: usize,
    pub high_risk_items: usize,
    pub capitale_immobilizzato_totale: f64,
    pub valore_ordine_totale: f64,
}
