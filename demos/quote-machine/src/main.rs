//! Ron Swanson Quote Machine
//!
//! The "four buttons" demo: one quotes API, four transport strategies,
//! selected by the first argument. Press Enter for a fresh quote.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p quote-machine -- [tcp|simple|client|conn] [url]
//! ```
//!
//! The `tcp` and `conn` strategies speak plain `http` only; point them at
//! an `http://` URL override (the default endpoint is `https`). A refused
//! scheme is reported like any other outcome, it never crashes the demo.

use std::io::{self, BufRead, Write};

use getkit_core::{Driver, Fetcher, Outcome};
use getkit_transports::{ClientTransport, ConnTransport, SimpleTransport, TcpTransport};

const DEFAULT_URL: &str = "https://ron-swanson-quotes.herokuapp.com/v2/quotes";

fn fetcher_for(strategy: &str) -> Option<Fetcher> {
    Some(match strategy {
        "tcp" => Fetcher::new(TcpTransport::new()),
        "simple" => Fetcher::new(SimpleTransport::new()),
        "client" => Fetcher::new(ClientTransport::new()),
        "conn" => Fetcher::new(ConnTransport::new()),
        _ => return None,
    })
}

fn render(outcome: Outcome) {
    match outcome {
        Outcome::Success(ok) => {
            // The API answers with an array of one quote.
            println!("\"{}\"", ok.body[0].as_str().unwrap_or("(no quote in response)"));
        }
        Outcome::Failure(err) => println!("no quote today: {err}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let strategy = args.next().unwrap_or_else(|| "client".to_string());
    let url = args.next().unwrap_or_else(|| DEFAULT_URL.to_string());

    let Some(fetcher) = fetcher_for(&strategy) else {
        eprintln!("unknown strategy `{strategy}` (expected tcp|simple|client|conn)");
        std::process::exit(2);
    };

    println!("quote machine — {} strategy, {url}", fetcher.transport_name());
    println!("press Enter for a quote, q to quit");

    let mut driver = Driver::new(fetcher, url, render);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.map_or(true, |l| l.trim() == "q") {
            break;
        }
        driver.activate().await;
        print!("> ");
        let _ = io::stdout().flush();
    }
}
