pub mod enums;
pub mod error;
pub mod item;
pub mod options;
pub mod table;

pub use enums::{Criticality, Seasonality, ServiceLevel, StockoutRisk};
pub use error::{ReorderError, Result};
pub use item::{
    COL_ARTICOLO, COL_CONSUMO_MENSILE, COL_CRITICITA, COL_DEVIAZIONE_STANDARD,
    COL_INDICE_ROTAZIONE, COL_LEAD_TIME_GIORNI, COL_LIVELLO_SERVIZIO, COL_STAGIONALE,
    COL_STOCK_ATTUALE, COL_UNITA_MISURA, COL_VALORE_UNITARIO, DEFAULT_UNIT, Item, Kpis,
    REQUIRED_COLUMNS, ReorderSignal,
};
pub use options::{EngineOptions, SafetyStockPolicy};
pub use table::{RawRecord, RawTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_names() {
        let error = ReorderError::MissingColumns(vec![
            "criticita".to_string(),
            "valore_unitario".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "missing required columns: criticita, valore_unitario"
        );
    }

    #[test]
    fn kpis_serialize() {
        let kpis = Kpis {
            items: 3,
            high_risk_items: 1,
            capitale_immobilizzato_totale: 560.0,
            valore_ordine_totale: 724.5,
        };
        let json = serde_json::to_string(&kpis).expect("serialize kpis");
        let round: Kpis = serde_json::from_str(&json).expect("deserialize kpis");
        assert_eq!(round, kpis);
    }
}
