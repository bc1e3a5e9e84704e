pub mod leaderboard_service;
pub mod participants_service;
pub mod profile_service;
