//! Random Dog Generator
//!
//! Fetches a random dog image URL via the one-call shortcut strategy and
//! prints it. Press Enter for another dog, q to quit.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p random-dog -- [url]
//! ```

use std::io::{self, BufRead};

use getkit_core::{Driver, Fetcher, Outcome};
use getkit_transports::SimpleTransport;

const DEFAULT_URL: &str = "https://dog.ceo/api/breeds/image/random";

fn render(outcome: Outcome) {
    match outcome {
        Outcome::Success(ok) => {
            println!("{}", ok.body["message"].as_str().unwrap_or("(no image url)"));
        }
        Outcome::Failure(err) => println!("no dog: {err}"),
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

    println!("random dog — {url}");
    println!("press Enter for a dog, q to quit");

    let mut driver = Driver::new(Fetcher::new(SimpleTransport::new()), url, render);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.map_or(true, |l| l.trim() == "q") {
            break;
        }
        driver.activate().await;
    }
}
