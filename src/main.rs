//! Animal Shelter - Binary Entry Point
//!
//! Runs one allocation round and prints the `{ list, error }` response.
//!
//! ```bash
//! animal-shelter RATO,BOLA RATO,NOVELO Rex,Fofo
//! ```
//!
//! Lists are split on plain commas: no trimming, and an empty list is a
//! single empty token. Without arguments a sample round is used.

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use animal_shelter::{AllocationResponse, Allocator};

const SAMPLE_ROUND: [&str; 3] = ["RATO,BOLA", "RATO,NOVELO", "Rex,Fofo"];

/// Split a comma list exactly as given
fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').collect()
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [toys_a, toys_b, order] = match args.as_slice() {
        [] => SAMPLE_ROUND,
        [a, b, c] => [a.as_str(), b.as_str(), c.as_str()],
        _ => bail!("usage: animal-shelter <toys-1> <toys-2> <animals> (comma-separated, no spaces)"),
    };

    let result =
        Allocator::new().allocate(&split_list(toys_a), &split_list(toys_b), &split_list(order));

    match &result {
        Ok(list) => info!(animals = list.len(), "allocation succeeded"),
        Err(error) => info!(token = error.token(), %error, "allocation rejected"),
    }

    let response = AllocationResponse::from(result);
    let json = serde_json::to_string_pretty(&response).context("serializing response")?;
    println!("{json}");

    Ok(())
}
