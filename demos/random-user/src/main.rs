//! Random User Profile
//!
//! Fetches one generated user and prints a small profile card. Press Enter
//! for another user, q to quit.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p random-user -- [url]
//! ```

use std::io::{self, BufRead};

use getkit_core::{Driver, Fetcher, Outcome};
use getkit_transports::ClientTransport;

const DEFAULT_URL: &str = "https://randomuser.me/api/";

fn render(outcome: Outcome) {
    match outcome {
        Outcome::Success(ok) => {
            let user = &ok.body["results"][0];
            println!(
                "{} {}",
                user["name"]["first"].as_str().unwrap_or("?"),
                user["name"]["last"].as_str().unwrap_or("?"),
            );
            println!("  username: {}", user["login"]["username"].as_str().unwrap_or("?"));
            println!("  email:    {}", user["email"].as_str().unwrap_or("?"));
            println!("  city:     {}", user["location"]["city"].as_str().unwrap_or("?"));
        }
        Outcome::Failure(err) => println!("no user: {err}"),
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

    println!("random user — {url}");
    println!("press Enter for a user, q to quit");

    let mut driver = Driver::new(Fetcher::new(ClientTransport::new()), url, render);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.map_or(true, |l| l.trim() == "q") {
            break;
        }
        driver.activate().await;
    }
}
