use std::time::{SystemTime, UNIX_EPOCH};

// Stamps the binary with its build time; `main` logs it at startup.
fn main() {
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=LEADERBOARD_BUILD_ID={build_id}");
}
