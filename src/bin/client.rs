//! A simple HTTP client to exercise the API
//!
//! Sends a lookup request followed by a full stat line and prints both
//! responses. Usage: `cargo run --bin client` against a running server
//! (override the target with `HOOPCAST_URL`).

use anyhow::{bail, Context};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url =
        std::env::var("HOOPCAST_URL").unwrap_or_else(|_| "http://localhost:8000/".to_string());
    let client = reqwest::Client::new();

    println!("Sending just a name:");
    send_request(&client, &url, json!({ "name": "Malik Sealy" })).await?;

    println!("Sending stats to get a prediction");
    // "Name" (capitalized) is not a recognized field and is ignored by
    // the server, so this body runs in prediction mode.
    send_request(
        &client,
        &url,
        json!({
            "Name": "Malik Sealy",
            "GP": 58,
            "MIN": 11.6,
            "PTS": 5.7,
            "FGM": 2.3,
            "FGA": 5.5,
            "FTM": 0.9,
            "FTA": 1.3,
            "OREB": 1.0,
            "DREB": 0.9,
            "REB": 1.9,
            "AST": 0.8,
            "STL": 0.6,
            "BLK": 0.1,
            "TOV": 1.0
        }),
    )
    .await?;

    Ok(())
}

async fn send_request(
    client: &reqwest::Client,
    url: &str,
    body: serde_json::Value,
) -> anyhow::Result<()> {
    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .with_context(|| format!("posting to {url}"))?;

    if response.status() != reqwest::StatusCode::OK {
        bail!("unexpected status {}", response.status());
    }
    println!("{}", response.text().await?);
    Ok(())
}
