use sqlx::SqlitePool;

use crate::database::participants_repo;
use crate::error::AppError;
use crate::models::{ParticipantDocument, ParticipantRecord};

const PROFILE_STATUS_OK: &str = "All Good";
const ACCESS_CODE_REDEEMED: &str = "Yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    High,
    Started,
    NotStarted,
}

impl BadgeTier {
    pub fn for_count(count: i64) -> Self {
        if count >= 5 {
            BadgeTier::High
        } else if count >= 1 {
            BadgeTier::Started
        } else {
            BadgeTier::NotStarted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::High => "high",
            BadgeTier::Started => "some",
            BadgeTier::NotStarted => "none",
        }
    }
}

pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub profile_url: String,
    pub skill_badge_count: i64,
    pub badge_tier: BadgeTier,
    pub profile_status: String,
    pub profile_status_ok: bool,
    pub access_code_redeemed: bool,
    pub arcade_game_count: i64,
    pub all_badges_completed: String,
    pub skill_badges: Vec<String>,
    pub arcade_games: Vec<String>,
}

impl ProfileView {
    pub fn access_code_label(&self) -> &'static str {
        if self.access_code_redeemed {
            "Redeemed"
        } else {
            "Not Redeemed"
        }
    }
}

pub async fn load_profile_view(pool: &SqlitePool, email: &str) -> Result<ProfileView, AppError> {
    if email.is_empty() {
        return Err(AppError::BadRequest("Invalid email address provided"));
    }

    let document = participants_repo::find_document_by_email(pool, email)
        .await
        .map_err(AppError::store("Failed to fetch data"))?
        .ok_or(AppError::NotFound("Student not found"))?;

    let document = serde_json::from_value::<ParticipantDocument>(document)
        .map_err(|e| AppError::store("Failed to fetch data")(sqlx::Error::Decode(Box::new(e))))?;

    Ok(build_profile_view(ParticipantRecord::from(document)))
}

pub fn build_profile_view(record: ParticipantRecord) -> ProfileView {
    ProfileView {
        skill_badges: split_names(&record.skill_badge_names),
        arcade_games: split_names(&record.arcade_game_names),
        badge_tier: BadgeTier::for_count(record.skill_badge_count),
        profile_status_ok: record.profile_status == PROFILE_STATUS_OK,
        access_code_redeemed: record.access_code_redeemed == ACCESS_CODE_REDEEMED,
        name: record.name,
        email: record.email,
        profile_url: record.profile_url,
        skill_badge_count: record.skill_badge_count,
        profile_status: record.profile_status,
        arcade_game_count: record.arcade_game_count,
        all_badges_completed: record.all_badges_completed,
    }
}

/// Splits a `|`-separated list of completed items.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
