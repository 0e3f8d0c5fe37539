//! Recommendation Strategies
//!
//! Pure scoring and rendering functions over a [`CoinTable`](crate::model::CoinTable).
//! Every argmax keeps the first record in name order on ties.

mod recommend;
mod report;

pub use recommend::{balanced_pick, balanced_score, profitable_pick, sustainable_pick};
pub use report::{coin_info, format_change, format_market_cap, format_price, price_listing};
