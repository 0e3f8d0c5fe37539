//! eco-advisor terminal shell
//!
//! Reads one question per line from stdin and prints the advisor's answer.
//! `exit`, `quit`, `bye` or end of input close the session.
//!
//! Usage: `eco-advisor [DISPLAY_NAME]`

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crypto_advisor::{AdvisorConfig, DISCLAIMER, is_exit};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the chat on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AdvisorConfig::from_env()?;
    if let Some(name) = std::env::args().nth(1) {
        config = config.with_name(name);
    }
    tracing::info!(source = ?config.source, coins = config.coin_ids.len(), "Starting advisor");

    let mut advisor = config.build()?;

    if config.refresh_on_start && !advisor.refresh_data().await {
        tracing::warn!("Live market data unavailable, starting with built-in data");
    }

    println!("\n{}", advisor.greet());
    println!("Type 'exit' to quit.\n");
    println!("{DISCLAIMER}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if is_exit(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let response = advisor.respond(&line).await;
        println!("\n{}: {}", advisor.name(), response);
    }

    println!("\n{}: {}", advisor.name(), advisor.farewell());
    Ok(())
}
