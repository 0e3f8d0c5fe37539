//! Coin Reports
//!
//! Info lookup and price listing. Missing live fields render as
//! "not available" instead of failing the whole report.

use std::cmp::Ordering;
use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{CoinRecord, CoinTable, DataSource};

pub const NOT_AVAILABLE: &str = "not available";

/// "very low" -> "Very low"
fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// USD price; sub-dollar coins keep four decimals
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) if p.abs() < Decimal::ONE => format!("${:.4}", p.round_dp(4)),
        Some(p) => format!("${:.2}", p.round_dp(2)),
        None => NOT_AVAILABLE.into(),
    }
}

/// Signed 24h change with a direction marker, e.g. "▲ +2.50%"
pub fn format_change(change: Option<Decimal>) -> String {
    let Some(c) = change else {
        return NOT_AVAILABLE.into();
    };
    let marker = match c.cmp(&Decimal::ZERO) {
        Ordering::Greater => '▲',
        Ordering::Less => '▼',
        Ordering::Equal => '■',
    };
    format!("{marker} {:+.2}%", c.round_dp(2))
}

/// Abbreviated USD market cap, e.g. "$1.93T"
pub fn format_market_cap(market_cap: Option<Decimal>) -> String {
    const UNITS: [(Decimal, &str); 3] = [
        (dec!(1_000_000_000_000), "T"),
        (dec!(1_000_000_000), "B"),
        (dec!(1_000_000), "M"),
    ];

    let Some(m) = market_cap else {
        return NOT_AVAILABLE.into();
    };
    UNITS
        .iter()
        .find(|(unit, _)| m.abs() >= *unit)
        .map_or_else(
            || format!("${:.0}", m.round_dp(0)),
            |(unit, suffix)| format!("${:.2}{suffix}", (m / unit).round_dp(2)),
        )
}

/// Multi-line details for one coin
pub fn coin_info(record: &CoinRecord) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{} Info:", record.name);
    let _ = writeln!(s, "📈 Price Trend: {}", capitalize(record.price_trend.as_str()));
    let _ = writeln!(s, "💰 Market Cap: {}", capitalize(record.market_cap.as_str()));
    let _ = writeln!(s, "⚡ Energy Use: {}", capitalize(&record.energy_use));
    let _ = writeln!(s, "🌱 Sustainability Score: {:.1}/10", record.sustainability_out_of_ten());
    let _ = writeln!(s, "💵 Price: {}", format_price(record.current_price));
    let _ = writeln!(s, "📊 24h Change: {}", format_change(record.price_change_24h));
    let _ = write!(s, "🏦 Market Cap Value: {}", format_market_cap(record.market_cap_value));
    s
}

/// Descending market cap; coins without one go last, then name order
fn by_market_cap_desc(a: &CoinRecord, b: &CoinRecord) -> Ordering {
    match (a.market_cap_value, b.market_cap_value) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.name.cmp(&b.name))
}

/// Every coin with price and 24h change, biggest first
pub fn price_listing(table: &CoinTable) -> String {
    let mut records: Vec<&CoinRecord> = table.iter().collect();
    records.sort_by(|a, b| by_market_cap_desc(a, b));

    let mut s = match (table.source, table.refreshed_at) {
        (DataSource::Live, Some(at)) => {
            format!("Current Prices (live, updated {} UTC):\n", at.format("%Y-%m-%d %H:%M"))
        }
        (DataSource::Live, None) => "Current Prices (live):\n".to_string(),
        (DataSource::Static, _) => {
            "Current Prices (built-in data, say 'refresh' for live prices):\n".to_string()
        }
    };

    for record in records {
        let _ = writeln!(
            s,
            "  {}: {} ({} 24h)",
            record.name,
            format_price(record.current_price),
            format_change(record.price_change_24h),
        );
    }

    s.trim_end().to_string()
}
