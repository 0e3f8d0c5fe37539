//! Query Intent Classification
//!
//! Maps free text to an [`Intent`] by case-insensitive keyword containment.
//! Categories are tested in a fixed order and the first match wins.

use crate::model::CoinTable;

pub const REFRESH_KEYWORDS: &[&str] = &["refresh", "update", "reload", "live data", "latest data"];
pub const SUSTAINABILITY_KEYWORDS: &[&str] = &["sustainable", "green", "eco", "environment"];
pub const PROFITABILITY_KEYWORDS: &[&str] =
    &["profit", "money", "gain", "return", "trending", "rising"];
pub const PRICE_KEYWORDS: &[&str] = &["price"];
pub const ADVICE_KEYWORDS: &[&str] =
    &["recommend", "suggestion", "advice", "best", "should", "buy"];
pub const HELP_KEYWORDS: &[&str] = &["help", "guide", "how", "what can you"];

/// What the user is asking for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    Sustainability,
    Profitability,
    /// Details for the named coin (key in the current table)
    CoinInfo(String),
    PriceListing,
    Balanced,
    Help,
    Unknown,
}

fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| query.contains(k))
}

/// Coin whose name appears in the (lowercased) query.
///
/// Longest name wins so "Bitcoin Cash" is not read as "Bitcoin"; equal lengths
/// fall back to name order.
fn mentioned_coin(query: &str, table: &CoinTable) -> Option<String> {
    let mut best: Option<&str> = None;
    for name in table.names() {
        if !query.contains(&name.to_lowercase()) {
            continue;
        }
        if best.is_none_or(|b| name.len() > b.len()) {
            best = Some(name);
        }
    }
    best.map(str::to_string)
}

/// Resolve the intent of `query` against the coins in `table`
pub fn classify(query: &str, table: &CoinTable) -> Intent {
    let query = query.to_lowercase();

    if contains_any(&query, REFRESH_KEYWORDS) {
        Intent::Refresh
    } else if contains_any(&query, SUSTAINABILITY_KEYWORDS) {
        Intent::Sustainability
    } else if contains_any(&query, PROFITABILITY_KEYWORDS) {
        Intent::Profitability
    } else if let Some(name) = mentioned_coin(&query, table) {
        Intent::CoinInfo(name)
    } else if contains_any(&query, PRICE_KEYWORDS) {
        Intent::PriceListing
    } else if contains_any(&query, ADVICE_KEYWORDS) {
        Intent::Balanced
    } else if contains_any(&query, HELP_KEYWORDS) {
        Intent::Help
    } else {
        Intent::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoinRecord, DataSource, MarketCapTier, PriceTrend};
    use crate::provider::static_table;

    #[test]
    fn test_keyword_categories() {
        let table = static_table();
        assert_eq!(classify("Please REFRESH the data", &table), Intent::Refresh);
        assert_eq!(classify("What's the most sustainable coin?", &table), Intent::Sustainability);
        assert_eq!(classify("Which crypto is trending up?", &table), Intent::Profitability);
        assert_eq!(classify("Tell me about Cardano", &table), Intent::CoinInfo("Cardano".into()));
        assert_eq!(classify("show me prices", &table), Intent::PriceListing);
        assert_eq!(classify("What should I invest in?", &table), Intent::Balanced);
        assert_eq!(classify("help", &table), Intent::Help);
        assert_eq!(classify("asdf qwerty", &table), Intent::Unknown);
    }

    #[test]
    fn test_first_match_wins() {
        let table = static_table();
        // sustainability beats profitability
        assert_eq!(classify("green coins that make money", &table), Intent::Sustainability);
        // refresh beats everything
        assert_eq!(classify("update the green bitcoin price", &table), Intent::Refresh);
        // coin mention beats price
        assert_eq!(
            classify("what is the price of ethereum", &table),
            Intent::CoinInfo("Ethereum".into())
        );
        // profitability beats coin mention
        assert_eq!(classify("is bitcoin rising", &table), Intent::Profitability);
    }

    #[test]
    fn test_longest_coin_name_wins() {
        let table = CoinTable::new(
            vec![
                CoinRecord::new("Bitcoin", PriceTrend::Rising, MarketCapTier::High, "high", 0.3),
                CoinRecord::new("Bitcoin Cash", PriceTrend::Stable, MarketCapTier::Low, "high", 0.3),
            ],
            DataSource::Live,
        );
        assert_eq!(
            classify("tell me about bitcoin cash", &table),
            Intent::CoinInfo("Bitcoin Cash".into())
        );
        assert_eq!(classify("tell me about bitcoin", &table), Intent::CoinInfo("Bitcoin".into()));
    }

    #[test]
    fn test_coin_mention_uses_current_table() {
        let table = CoinTable::new(Vec::new(), DataSource::Live);
        assert_eq!(classify("tell me about cardano", &table), Intent::Unknown);
    }
}
