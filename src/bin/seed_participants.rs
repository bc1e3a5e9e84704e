use std::fs;

use dotenvy::dotenv;
use serde_json::Value;

use leaderboard::config::Config;
use leaderboard::database::{self, participants_repo};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("seed failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let seed_file = std::env::var("SEED_FILE")
        .unwrap_or_else(|_| "data/participants.sample.json".to_string());

    let raw = fs::read_to_string(&seed_file)?;
    let documents: Vec<Value> = serde_json::from_str(&raw)?;

    let pool = database::connect(&config).await?;

    let mut written = 0usize;
    let mut skipped = 0usize;
    for doc in &documents {
        let has_email = doc
            .get("User Email")
            .and_then(Value::as_str)
            .is_some_and(|e| !e.trim().is_empty());
        if !has_email {
            skipped += 1;
            continue;
        }
        participants_repo::replace_document(&pool, doc).await?;
        written += 1;
    }

    let total = participants_repo::count_documents(&pool).await?;
    pool.close().await;

    println!(
        "seed {}: read={}, written={}, skipped={}, collection_total={}",
        seed_file,
        documents.len(),
        written,
        skipped,
        total
    );
    Ok(())
}
