//! Bitcoin Price Checker
//!
//! One button, one GET: fetch the current price index and print the USD
//! rate. Press Enter to check, q to quit.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p price-checker -- [url]
//! ```

use std::io::{self, BufRead};

use getkit_core::{Driver, Fetcher, Outcome};
use getkit_transports::ClientTransport;

const DEFAULT_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice.json";

fn render(outcome: Outcome) {
    match outcome {
        Outcome::Success(ok) => {
            let usd = &ok.body["bpi"]["USD"];
            println!(
                "${} {}",
                usd["rate"].as_str().unwrap_or("?"),
                usd["code"].as_str().unwrap_or("USD"),
            );
        }
        Outcome::Failure(err) => println!("price unavailable: {err}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    println!("price checker — {url}");
    println!("press Enter to check the price, q to quit");

    let mut driver = Driver::new(Fetcher::new(ClientTransport::new()), url, render);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.map_or(true, |l| l.trim() == "q") {
            break;
        }
        driver.activate().await;
    }
}
