//! Examples for using the zipfold Server API

use reqwest::Client;
use serde_json::json;
use server::error::ErrorResponse;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Reduce ranges from a query parameter
    println!("2. Reduce via Query Parameter:");
    let resp = client
        .get(format!("{SERVER_URL}/api/v1/ranges"))
        .query(&[("ranges", "94133,94133|94200,94299|94226,94399")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Reduce ranges from a path segment (pipe URL-encoded as %7C)
    println!("3. Reduce via Path Segment:");
    let resp = client
        .get(format!(
            "{SERVER_URL}/api/v1/ranges/94000,94133%7C94133,94299"
        ))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Reduce ranges from a structured JSON body
    println!("4. Reduce via JSON Body:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/ranges"))
        .json(&json!({
            "ranges": [
                { "bounds": ["94001", "94134"] },
                { "bounds": ["94000", "94133"] },
                { "bounds": ["94600", "94699"] }
            ]
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Invalid input comes back as a structured error
    println!("5. Invalid Input:");
    let resp = client
        .get(format!("{SERVER_URL}/api/v1/ranges"))
        .query(&[("ranges", "not-a-zip,94299")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let err: ErrorResponse = resp.json().await?;
    println!("Code: {}", err.error.code);
    println!("Message: {}", err.error.message);
    println!();

    println!("All examples completed!");
    Ok(())
}
