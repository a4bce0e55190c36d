//! Per-item reorder metrics and priority ranking.
//!
//! Every metric is a pure function of one item plus the `workdays` scalar;
//! the only cross-row operations are the final stable sort and the KPI
//! aggregation.

use tracing::debug;

use riordino_model::{
    Criticality, EngineOptions, Item, Kpis, ReorderError, ReorderSignal, Result, SafetyStockPolicy,
    Seasonality, ServiceLevel, StockoutRisk,
};

/// Safety-stock multiplier applied to seasonal items.
const SEASONALITY_FACTOR: f64 = 1.15;

/// Rotation index thresholds for the rotation factor.
const ROTATION_FAST: f64 = 12.0;
const ROTATION_NORMAL: f64 = 6.0;

fn simple_base_pct(criticality: Criticality) -> f64 {
    match criticality {
        Criticality::Alta => 0.50,
        Criticality::Media => 0.30,
        Criticality::Bassa => 0.15,
    }
}

fn z_score(level: ServiceLevel) -> f64 {
    match level {
        ServiceLevel::Basso => 1.04,
        ServiceLevel::Medio => 1.65,
        ServiceLevel::Alto => 2.05,
    }
}

fn seasonality_factor(seasonality: Seasonality) -> f64 {
    if seasonality.is_seasonal() {
        SEASONALITY_FACTOR
    } else {
        1.0
    }
}

/// Fast movers get a cushion, slow movers a haircut. An absent rotation
/// index is neutral.
fn rotation_factor(indice_rotazione: Option<f64>) -> f64 {
    match indice_rotazione {
        Some(index) if index >= ROTATION_FAST => 1.10,
        Some(index) if index >= ROTATION_NORMAL => 1.00,
        Some(_) => 0.90,
        None => 1.00,
    }
}

fn criticality_factor(criticality: Criticality) -> f64 {
    match criticality {
        Criticality::Bassa => 0.9,
        Criticality::Media => 1.0,
        Criticality::Alta => 1.1,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute reorder signals for every item and sort them by priority.
///
/// `workdays` is the count of business days in the target period and must
/// be positive; it is rejected before any division happens.
pub fn compute(items: &[Item], workdays: u32, options: &EngineOptions) -> Result<Vec<ReorderSignal>> {
    if workdays == 0 {
        return Err(ReorderError::InvalidPeriod { workdays: 0 });
    }
    let mut signals: Vec<ReorderSignal> = items
        .iter()
        .map(|item| compute_row(item, workdays, options))
        .collect();
    sort_by_priority(&mut signals);
    debug!(items = signals.len(), workdays, "metrics computed");
    Ok(signals)
}

fn compute_row(item: &Item, workdays: u32, options: &EngineOptions) -> ReorderSignal {
    let days = f64::from(workdays);
    let consumo_giornaliero = item.consumo_mensile / days;
    let domanda_lt = consumo_giornaliero * item.lead_time_giorni;
    let scorta_sicurezza = safety_stock(item, domanda_lt, days, options);

    let punto_riordino = (domanda_lt + scorta_sicurezza).ceil() as u64;
    let qty_suggerita = (punto_riordino as f64 - item.stock_attuale).max(0.0).ceil() as u64;
    let rischio_stockout = classify_risk(item.stock_attuale, domanda_lt, punto_riordino);

    let valore_unitario = round2(item.valore_unitario);
    let valore_ordine_suggerito = round2(qty_suggerita as f64 * valore_unitario);
    let capitale_immobilizzato = round2(item.stock_attuale * valore_unitario);

    ReorderSignal {
        item: Item {
            valore_unitario,
            ..item.clone()
        },
        consumo_giornaliero,
        domanda_lt,
        scorta_sicurezza,
        punto_riordino,
        qty_suggerita,
        rischio_stockout,
        valore_ordine_suggerito,
        capitale_immobilizzato,
    }
}

/// Safety stock for one item.
///
/// The advanced formula needs a demand standard deviation; without one (or
/// under [`SafetyStockPolicy::SimpleOnly`]) the criticality percentage of
/// lead-time demand is used. Both paths share the seasonality and rotation
/// factors so switching formulas never flips those corrections.
fn safety_stock(item: &Item, domanda_lt: f64, days: f64, options: &EngineOptions) -> f64 {
    let seasonal = seasonality_factor(item.stagionale);
    let rotation = rotation_factor(item.indice_rotazione);
    let deviation = match options.safety_stock {
        SafetyStockPolicy::Auto => item.deviazione_standard,
        SafetyStockPolicy::SimpleOnly => None,
    };
    match deviation {
        Some(deviazione_standard) => {
            let sigma_daily = deviazione_standard / days.sqrt();
            let sqrt_lt = item.lead_time_giorni.sqrt();
            let ss_base = z_score(item.livello_servizio) * sigma_daily * sqrt_lt;
            (ss_base * seasonal * rotation * criticality_factor(item.criticita)).max(0.0)
        }
        None => domanda_lt * simple_base_pct(item.criticita) * seasonal * rotation,
    }
}

/// Risk classification, first match wins.
fn classify_risk(stock_attuale: f64, domanda_lt: f64, punto_riordino: u64) -> StockoutRisk {
    if stock_attuale < domanda_lt {
        StockoutRisk::Alto
    } else if stock_attuale < punto_riordino as f64 {
        StockoutRisk::Medio
    } else {
        StockoutRisk::Basso
    }
}

/// Stable priority order: riskiest first, highest unit value first within
/// equal risk.
fn sort_by_priority(signals: &mut [ReorderSignal]) {
    signals.sort_by(|a, b| {
        a.rischio_stockout
            .sort_order()
            .cmp(&b.rischio_stockout.sort_order())
            .then_with(|| b.item.valore_unitario.total_cmp(&a.item.valore_unitario))
    });
}

/// Aggregate indicators over a full result set.
pub fn compute_kpis(signals: &[ReorderSignal]) -> Kpis {
    Kpis {
        items: signals.len(),
        high_risk_items: signals
            .iter()
            .filter(|signal| signal.rischio_stockout == StockoutRisk::Alto)
            .count(),
        capitale_immobilizzato_totale: round2(
            signals.iter().map(|signal| signal.capitale_immobilizzato).sum(),
        ),
        valore_ordine_totale: round2(
            signals
                .iter()
                .map(|signal| signal.valore_ordine_suggerito)
                .sum(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_factor_thresholds() {
        assert_eq!(rotation_factor(Some(12.0)), 1.10);
        assert_eq!(rotation_factor(Some(11.9)), 1.00);
        assert_eq!(rotation_factor(Some(6.0)), 1.00);
        assert_eq!(rotation_factor(Some(5.9)), 0.90);
        assert_eq!(rotation_factor(None), 1.00);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.505), 10.51);
        assert_eq!(round2(10.504), 10.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_classify_risk_precedence() {
        // Below lead-time demand wins even when below the reorder point too
        assert_eq!(classify_risk(10.0, 45.0, 68), StockoutRisk::Alto);
        assert_eq!(classify_risk(50.0, 45.0, 68), StockoutRisk::Medio);
        assert_eq!(classify_risk(68.0, 45.0, 68), StockoutRisk::Basso);
        assert_eq!(classify_risk(70.0, 45.0, 68), StockoutRisk::Basso);
    }
}
