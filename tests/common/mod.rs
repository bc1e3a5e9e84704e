#![allow(dead_code)]

use axum::{body::Body, http::Request, http::StatusCode, Router};
use http_body_util::BodyExt;
use leaderboard::database::{self, participants_repo};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub fn participant(name: &str, email: &str, badges: i64) -> Value {
    json!({
        "User Name": name,
        "User Email": email,
        "Google Cloud Skills Boost Profile URL": "https://www.cloudskillsboost.google/",
        "Profile URL Status": "All Good",
        "Access Code Redemption Status": "Yes",
        "All Skill Badges & Games Completed": "No",
        "# of Skill Badges Completed": badges,
        "# of Arcade Games Completed": 0
    })
}

pub fn fixture_participants() -> Vec<Value> {
    vec![
        participant("Raghavendra", "raghave999gskb@gmail.com", 0),
        participant("Alen Alexander", "alenalexander001@gmail.com", 8),
        participant("Gandi Komali", "gandikomali0410@gmail.com", 3),
        participant("DUDDU RAVI KUMAR", "ravikumar@gmail.com", 1),
    ]
}

pub async fn seeded_pool(documents: &[Value]) -> SqlitePool {
    let pool = database::connect_in_memory().await.expect("in-memory store");
    for doc in documents {
        participants_repo::replace_document(&pool, doc)
            .await
            .expect("seed document");
    }
    pool
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).expect("json body"))
}
