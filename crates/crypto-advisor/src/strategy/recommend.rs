//! Recommendation Scoring
//!
//! Sustainability-max, profitability-max and the balanced weighted score.

use crate::model::{CoinRecord, CoinTable, PriceTrend};

/// Share of the balanced score given to profit potential
const PROFIT_WEIGHT: f64 = 0.6;
/// Share of the balanced score given to sustainability
const SUSTAINABILITY_WEIGHT: f64 = 0.4;
/// Within profit potential: price trend vs market cap
const TREND_WEIGHT: f64 = 0.6;
const CAP_WEIGHT: f64 = 0.4;

/// First record (in iteration order) with the strictly greatest key
fn first_max_by<'a, K, F>(records: impl Iterator<Item = &'a CoinRecord>, key: F) -> Option<&'a CoinRecord>
where
    K: PartialOrd,
    F: Fn(&CoinRecord) -> K,
{
    let mut best: Option<(&CoinRecord, K)> = None;
    for record in records {
        let k = key(record);
        if best.as_ref().is_none_or(|(_, best_key)| k > *best_key) {
            best = Some((record, k));
        }
    }
    best.map(|(record, _)| record)
}

/// Greenest coin. `None` only for an empty table.
pub fn sustainable_pick(table: &CoinTable) -> Option<&CoinRecord> {
    first_max_by(table.iter(), |r| r.sustainability_score)
}

/// Largest-cap coin among those trending up. `None` when nothing is rising.
pub fn profitable_pick(table: &CoinTable) -> Option<&CoinRecord> {
    first_max_by(
        table.iter().filter(|r| r.price_trend == PriceTrend::Rising),
        |r| r.market_cap.priority(),
    )
}

/// Weighted mix of profit potential and sustainability
pub fn balanced_score(record: &CoinRecord) -> f64 {
    let profit = record.price_trend.score() * TREND_WEIGHT + record.market_cap.score() * CAP_WEIGHT;
    profit * PROFIT_WEIGHT + record.sustainability_score * SUSTAINABILITY_WEIGHT
}

/// Best balanced score. `None` only for an empty table.
pub fn balanced_pick(table: &CoinTable) -> Option<&CoinRecord> {
    first_max_by(table.iter(), balanced_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataSource, MarketCapTier};
    use crate::provider::static_table;

    fn record(name: &str, trend: PriceTrend, cap: MarketCapTier, score: f64) -> CoinRecord {
        CoinRecord::new(name, trend, cap, "low", score)
    }

    fn table(records: Vec<CoinRecord>) -> CoinTable {
        CoinTable::new(records, DataSource::Static)
    }

    #[test]
    fn test_sustainable_pick() {
        let t = table(vec![
            record("A", PriceTrend::Stable, MarketCapTier::Low, 0.9),
            record("B", PriceTrend::Rising, MarketCapTier::High, 0.3),
        ]);
        assert_eq!(sustainable_pick(&t).unwrap().name, "A");
        assert_eq!(sustainable_pick(&static_table()).unwrap().name, "Algorand");
    }

    #[test]
    fn test_sustainable_tie_goes_to_first_name() {
        let t = table(vec![
            record("Zeta", PriceTrend::Stable, MarketCapTier::Low, 0.8),
            record("Alpha", PriceTrend::Stable, MarketCapTier::Low, 0.8),
            record("Mid", PriceTrend::Stable, MarketCapTier::Low, 0.2),
        ]);
        assert_eq!(sustainable_pick(&t).unwrap().name, "Alpha");
    }

    #[test]
    fn test_profitable_pick_prefers_larger_cap() {
        let t = table(vec![
            record("A", PriceTrend::Rising, MarketCapTier::High, 0.1),
            record("B", PriceTrend::Rising, MarketCapTier::Low, 0.9),
        ]);
        assert_eq!(profitable_pick(&t).unwrap().name, "A");
        assert_eq!(profitable_pick(&static_table()).unwrap().name, "Bitcoin");
    }

    #[test]
    fn test_profitable_ignores_non_rising() {
        let t = table(vec![
            record("A", PriceTrend::Stable, MarketCapTier::High, 0.5),
            record("B", PriceTrend::Falling, MarketCapTier::High, 0.5),
            record("C", PriceTrend::Rising, MarketCapTier::Low, 0.5),
        ]);
        assert_eq!(profitable_pick(&t).unwrap().name, "C");
    }

    #[test]
    fn test_profitable_none_when_nothing_rises() {
        let t = table(vec![
            record("A", PriceTrend::Stable, MarketCapTier::High, 0.5),
            record("B", PriceTrend::Falling, MarketCapTier::Medium, 0.5),
        ]);
        assert!(profitable_pick(&t).is_none());
    }

    #[test]
    fn test_profitable_tie_goes_to_first_name() {
        let t = table(vec![
            record("Solana", PriceTrend::Rising, MarketCapTier::Medium, 0.75),
            record("Cardano", PriceTrend::Rising, MarketCapTier::Medium, 0.8),
        ]);
        assert_eq!(profitable_pick(&t).unwrap().name, "Cardano");
    }

    #[test]
    fn test_balanced_score_formula() {
        let r = record("X", PriceTrend::Rising, MarketCapTier::Medium, 0.8);
        // 0.6 * (0.6*2 + 0.4*1) + 0.4 * 0.8 = 0.96 + 0.32
        assert!((balanced_score(&r) - 1.28).abs() < 1e-9);

        let r = record("Y", PriceTrend::Falling, MarketCapTier::Low, 0.0);
        // 0.6 * (0 + 0.4*0.5)
        assert!((balanced_score(&r) - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_pick_on_static_table() {
        // Bitcoin: 0.6*(1.2+0.8)+0.12 = 1.32, Cardano: 1.28, Solana: 1.26
        let t = static_table();
        assert_eq!(balanced_pick(&t).unwrap().name, "Bitcoin");
        assert_eq!(balanced_pick(&t), balanced_pick(&t));
    }

    #[test]
    fn test_empty_table_has_no_picks() {
        let t = table(Vec::new());
        assert!(sustainable_pick(&t).is_none());
        assert!(profitable_pick(&t).is_none());
        assert!(balanced_pick(&t).is_none());
    }
}
