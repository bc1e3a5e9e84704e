use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::warn;

use crate::error::AppError;
use crate::models::{ParticipantDocument, ParticipantRecord};
use crate::services::participants_service;

#[derive(Debug, Deserialize, Default)]
pub struct LeaderboardQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Podium::Gold),
            1 => Some(Podium::Silver),
            2 => Some(Podium::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Podium::Gold => "gold",
            Podium::Silver => "silver",
            Podium::Bronze => "bronze",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardRowView {
    pub rank: usize,
    pub name: String,
    pub email: String,
    pub skill_badge_count: i64,
    pub podium: Option<Podium>,
}

impl LeaderboardRowView {
    pub fn podium_class(&self) -> &'static str {
        self.podium.as_ref().map(Podium::as_str).unwrap_or("")
    }
}

pub struct LeaderboardPageData {
    pub rows: Vec<LeaderboardRowView>,
    pub search_query: String,
    pub total_participants: usize,
}

pub async fn build_leaderboard_page(
    pool: &SqlitePool,
    query: &LeaderboardQuery,
) -> Result<LeaderboardPageData, AppError> {
    let documents = participants_service::list_participants(pool).await?;
    let records = records_from_documents(documents);
    let total_participants = records.len();

    let search_query = query.q.as_deref().unwrap_or("").trim().to_string();
    let ranked = filter_and_rank(records, &search_query);

    Ok(LeaderboardPageData {
        rows: build_rows(ranked, !search_query.is_empty()),
        search_query,
        total_participants,
    })
}

/// Reshapes raw documents, dropping the ones whose fields have the wrong
/// types.
pub fn records_from_documents(documents: Vec<Value>) -> Vec<ParticipantRecord> {
    documents
        .into_iter()
        .filter_map(|doc| match serde_json::from_value::<ParticipantDocument>(doc) {
            Ok(doc) => Some(ParticipantRecord::from(doc)),
            Err(e) => {
                warn!("Skipping unreadable participant document: {}", e);
                None
            }
        })
        .collect()
}

/// Keeps records whose name or email contains `term` (case-insensitive) and
/// orders them by skill badge count, highest first. Ties keep their input
/// order.
pub fn filter_and_rank(records: Vec<ParticipantRecord>, term: &str) -> Vec<ParticipantRecord> {
    let needle = term.to_lowercase();

    let mut kept: Vec<ParticipantRecord> = records
        .into_iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
        })
        .collect();

    kept.sort_by(|a, b| b.skill_badge_count.cmp(&a.skill_badge_count));
    kept
}

pub fn build_rows(ranked: Vec<ParticipantRecord>, searching: bool) -> Vec<LeaderboardRowView> {
    ranked
        .into_iter()
        .enumerate()
        .map(|(index, record)| LeaderboardRowView {
            rank: index + 1,
            podium: if searching {
                None
            } else {
                Podium::for_index(index)
            },
            name: record.name,
            email: record.email,
            skill_badge_count: record.skill_badge_count,
        })
        .collect()
}
