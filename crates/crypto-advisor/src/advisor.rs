//! Conversational Advisor
//!
//! Turns one line of user text into one response. Holds the data provider
//! and the phrase picker; keeps no conversation state between calls.

use tracing::debug;

use crate::intent::{Intent, classify};
use crate::model::CoinTable;
use crate::phrasing::{PhrasePicker, SeededPicker, choose};
use crate::provider::CoinDataProvider;
use crate::strategy::{balanced_pick, coin_info, price_listing, profitable_pick, sustainable_pick};

pub const NO_RISING_MESSAGE: &str =
    "None of the cryptocurrencies are currently showing a rising trend.";

pub const NO_DATA_MESSAGE: &str =
    "I don't have any coin data right now. Try 'refresh' to load market data.";

pub const FALLBACK_MESSAGE: &str = "I'm not sure what you're asking about. Try asking about \
    sustainable cryptocurrencies, profitable options, or specific coins like Bitcoin!";

pub const HELP_MESSAGE: &str = "Here's how you can interact with me:
- Ask about sustainable or eco-friendly cryptocurrencies
- Ask which crypto is trending up or best for profits
- Request information about specific coins like Bitcoin or Ethereum
- Ask for current prices
- Ask for general recommendations
- Say 'refresh' to pull live market data

Example questions:
\"What's the most sustainable cryptocurrency?\"
\"Which crypto is trending up?\"
\"Tell me about Cardano\"
\"Show me the prices\"
\"What should I invest in?\"";

/// Sentinels that end a chat session
pub const EXIT_WORDS: &[&str] = &["exit", "quit", "bye"];

/// Whether `input` asks to leave the session
pub fn is_exit(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_WORDS.contains(&input.as_str())
}

pub struct Advisor {
    name: String,
    provider: CoinDataProvider,
    picker: Box<dyn PhrasePicker>,
}

impl Advisor {
    pub fn new(name: impl Into<String>, provider: CoinDataProvider) -> Self {
        Self::with_picker(name, provider, Box::new(SeededPicker::from_entropy()))
    }

    pub fn with_picker(
        name: impl Into<String>,
        provider: CoinDataProvider,
        picker: Box<dyn PhrasePicker>,
    ) -> Self {
        Self {
            name: name.into(),
            provider,
            picker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot the next answer will be computed from
    pub fn table(&self) -> std::sync::Arc<CoinTable> {
        self.provider.load()
    }

    pub fn greet(&mut self) -> String {
        let name = &self.name;
        choose(
            self.picker.as_mut(),
            vec![
                format!("Hey there! I'm {name}, your eco-friendly crypto guide! 🌱"),
                format!("Welcome! {name} at your service for sustainable crypto advice! ♻️"),
                format!("Hi! Ready to explore green crypto options with {name}? 🚀"),
            ],
        )
    }

    pub fn farewell(&self) -> String {
        "Thanks for chatting! Stay green in your crypto journey! 🌿".to_string()
    }

    /// Answer one query
    pub async fn respond(&mut self, query: &str) -> String {
        let table = self.provider.load();
        let intent = classify(query, &table);
        debug!(?intent, "Classified query");

        match intent {
            Intent::Refresh => self.refresh_reply().await,
            Intent::Sustainability => self.sustainable_recommendation(&table),
            Intent::Profitability => self.profitable_recommendation(&table),
            Intent::CoinInfo(name) => table
                .get(&name)
                .map_or_else(|| FALLBACK_MESSAGE.to_string(), coin_info),
            Intent::PriceListing => price_listing(&table),
            Intent::Balanced => Self::balanced_recommendation(&table),
            Intent::Help => HELP_MESSAGE.to_string(),
            Intent::Unknown => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Pull live market data; `false` means the built-in table is in use
    pub async fn refresh_data(&mut self) -> bool {
        self.provider.refresh().await
    }

    async fn refresh_reply(&mut self) -> String {
        if self.refresh_data().await {
            format!(
                "Market data refreshed from {}: {} coins loaded. 🔄",
                self.provider.source_name(),
                self.provider.load().len()
            )
        } else {
            "I couldn't reach the market data feed, so I'm using my built-in data for now."
                .to_string()
        }
    }

    fn sustainable_recommendation(&mut self, table: &CoinTable) -> String {
        let Some(pick) = sustainable_pick(table) else {
            return NO_DATA_MESSAGE.to_string();
        };
        let name = &pick.name;
        let score = pick.sustainability_out_of_ten();

        choose(
            self.picker.as_mut(),
            vec![
                format!("Looking for eco-friendly crypto? {name} is your best bet with a sustainability score of {score:.1}/10! 🌱"),
                format!("For sustainability-focused investors, I recommend {name}. It scores {score:.1}/10 on our green scale! 🌍"),
                format!("{name} leads the pack in sustainability with a score of {score:.1}/10. It's the green choice! ♻️"),
            ],
        )
    }

    fn profitable_recommendation(&mut self, table: &CoinTable) -> String {
        if table.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }
        let Some(pick) = profitable_pick(table) else {
            return NO_RISING_MESSAGE.to_string();
        };
        let name = &pick.name;
        let cap = pick.market_cap;

        choose(
            self.picker.as_mut(),
            vec![
                format!("For profit potential, check out {name}! It's trending upward with a {cap} market cap. 📈"),
                format!("{name} is showing a rising trend with {cap} market capitalization - looking promising! 🚀"),
                format!("My profit-focused pick is {name}. It's on an upward trend in the {cap} market cap category. 💰"),
            ],
        )
    }

    fn balanced_recommendation(table: &CoinTable) -> String {
        balanced_pick(table).map_or_else(
            || NO_DATA_MESSAGE.to_string(),
            |pick| {
                format!(
                    "Based on both profitability and sustainability, I recommend {}. \
                     It has a {} price trend, {} market cap, and a sustainability score of {:.1}/10! 🌟",
                    pick.name,
                    pick.price_trend,
                    pick.market_cap,
                    pick.sustainability_out_of_ten()
                )
            },
        )
    }
}
