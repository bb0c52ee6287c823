//! Bosun - a technician workspace state manager.
//!
//! This library provides the core functionality for the `bsn` CLI tool:
//! an in-memory store of the workspace's mutable collections (cases, team
//! board, coordination calendar, checklists, approvals, report queue,
//! journey islands) plus the pure derivations computed over it: filtered
//! views, progress aggregation, dashboard metrics, and report exports.
//!
//! There is deliberately no persistence layer: the workspace is seeded
//! from embedded demo records and lives for the process lifetime, exactly
//! like the session-scoped state of the dashboard it models.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod workspace;

/// Library-level error type for workspace operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for workspace operations.
pub type Result<T> = std::result::Result<T, Error>;
