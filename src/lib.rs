//! Leaderboard and profile pages for the Google Cloud Study Jams program.
//!
//! Participant progress lives as JSON documents in the `Studyjams`
//! collection. The service only reads it: a small JSON API proxies the
//! documents as stored, and two server-rendered pages reshape them into a
//! ranked leaderboard and per-participant profiles.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
