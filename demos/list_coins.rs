//! Fetch the coin catalog, then print it after an optional search or filter.
//!
//! ```bash
//! cargo run --example list_coins --features native -- --search btc
//! cargo run --example list_coins --features native -- --active true --type token
//! ```

use clap::Parser;
use coinlist::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "List coins from the catalog endpoint")]
struct Args {
    /// Case-insensitive substring of name or symbol.
    #[arg(long, conflicts_with_all = ["active", "new", "coin_type"])]
    search: Option<String>,

    #[arg(long)]
    active: Option<bool>,

    #[arg(long)]
    new: Option<bool>,

    #[arg(long = "type")]
    coin_type: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let client = CoinsClientBuilder::from_env()?.build()?;
    let mut list = CoinList::new(HttpCoinSource::new(client));
    list.on_change(|| tracing::info!("coin list changed"));

    if let FetchOutcome::Failed(e) = list.fetch().await {
        return Err(e);
    }

    if let Some(query) = args.search.as_deref() {
        list.search(query);
    } else {
        list.apply_filters(CoinFilter {
            is_active: args.active,
            is_new: args.new,
            coin_type: args.coin_type,
        });
    }

    for coin in list.visible() {
        println!(
            "{:<20} {:<8} {:<6} {}{}",
            coin.name,
            coin.symbol,
            coin.coin_type,
            if coin.is_active { "active" } else { "inactive" },
            if coin.is_new { " new" } else { "" },
        );
    }
    println!("{} of {} coins", list.visible().len(), list.all().len());

    Ok(())
}
