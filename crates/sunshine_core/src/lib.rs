//! Core domain logic for Daily Sunshine.
//! This crate is the single source of truth for journal and compliment
//! behavior; frontends render state, they never own it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::COMPLIMENTS;
pub use model::note::{GratitudeNote, NoteValidationError};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, RepoError, RepoResult, SqliteKeyValueStore,
};
pub use service::compliment_service::{Clock, ComplimentService, SystemClock, VISIBLE_DURATION};
pub use service::journal_service::{
    AddOutcome, DeleteOutcome, JournalError, JournalService, JOURNAL_RECORD_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
