//! Gratitude journal use-case service.
//!
//! # Responsibility
//! - Own the in-memory journal sequence and its durable mirror.
//! - Enforce the trim/non-blank add contract and positional delete semantics.
//!
//! # Invariants
//! - Every successful mutation persists the full journal snapshot before
//!   returning to the caller.
//! - The in-memory sequence equals the decoded stored record after `load`
//!   and after every successful mutation.
//! - Blank input and out-of-range deletes leave memory and storage untouched.
//!
//! # See also
//! - docs/architecture/storage.md

use crate::model::note::GratitudeNote;
use crate::repo::kv_store::{KeyValueStore, RepoError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the single journal record.
pub const JOURNAL_RECORD_KEY: &str = "gratitudeNotes";

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Stored record cannot be decoded into a valid note sequence.
    Corrupt { details: String },
    /// In-memory sequence cannot be encoded for persistence.
    Encode(serde_json::Error),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Corrupt { details } => write!(f, "corrupt journal record: {details}"),
            Self::Encode(err) => write!(f, "failed to encode journal record: {err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Corrupt { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for JournalError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Outcome of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Note appended and persisted.
    Added,
    /// Input was blank after trimming; nothing changed.
    IgnoredBlank,
}

/// Outcome of a positional delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Note removed and the remaining sequence persisted.
    Deleted(GratitudeNote),
    /// Index was not valid for the current sequence; nothing changed.
    IgnoredOutOfRange,
}

/// Journal service over a durable key-value store.
#[derive(Debug)]
pub struct JournalService<S: KeyValueStore> {
    store: S,
    notes: Vec<GratitudeNote>,
}

impl<S: KeyValueStore> JournalService<S> {
    /// Rehydrates the journal from durable storage.
    ///
    /// An absent record yields an empty journal. A record that cannot be
    /// decoded into valid notes is rejected, not repaired.
    pub fn load(store: S) -> Result<Self, JournalError> {
        let notes = match store.read(JOURNAL_RECORD_KEY)? {
            None => Vec::new(),
            Some(raw) => match decode_record(&raw) {
                Ok(notes) => notes,
                Err(err) => {
                    error!(
                        "event=journal_load module=journal status=error error_code=corrupt_record"
                    );
                    return Err(err);
                }
            },
        };

        info!(
            "event=journal_load module=journal status=ok count={}",
            notes.len()
        );
        Ok(Self { store, notes })
    }

    /// Creates an empty journal over `store` without touching storage.
    ///
    /// Lets frontends continue past a corrupt record: the stored value is
    /// left as-is until the first successful mutation overwrites it with a
    /// valid snapshot.
    pub fn empty(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
        }
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[GratitudeNote] {
        &self.notes
    }

    /// Current journal length.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the journal holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Trims `raw` and appends it to the journal.
    ///
    /// # Contract
    /// - Blank input after trimming is a no-op and writes nothing.
    /// - On success the full snapshot is persisted before returning.
    pub fn add(&mut self, raw: &str) -> Result<AddOutcome, JournalError> {
        let Some(note) = GratitudeNote::new(raw) else {
            info!("event=journal_add module=journal status=noop reason=blank_input");
            return Ok(AddOutcome::IgnoredBlank);
        };

        self.notes.push(note);
        if let Err(err) = self.persist() {
            self.notes.pop();
            return Err(err);
        }

        info!(
            "event=journal_add module=journal status=ok count={}",
            self.notes.len()
        );
        Ok(AddOutcome::Added)
    }

    /// Removes the note at 0-based `index`.
    ///
    /// # Contract
    /// - Out-of-range indices are a no-op and write nothing.
    /// - On success the full snapshot is persisted before returning.
    pub fn delete_at(&mut self, index: usize) -> Result<DeleteOutcome, JournalError> {
        if index >= self.notes.len() {
            info!(
                "event=journal_delete module=journal status=noop reason=out_of_range index={index} count={}",
                self.notes.len()
            );
            return Ok(DeleteOutcome::IgnoredOutOfRange);
        }

        let removed = self.notes.remove(index);
        if let Err(err) = self.persist() {
            self.notes.insert(index, removed);
            return Err(err);
        }

        info!(
            "event=journal_delete module=journal status=ok index={index} count={}",
            self.notes.len()
        );
        Ok(DeleteOutcome::Deleted(removed))
    }

    fn persist(&mut self) -> Result<(), JournalError> {
        let encoded = encode_record(&self.notes)?;
        self.store.write(JOURNAL_RECORD_KEY, &encoded)?;
        Ok(())
    }
}

fn encode_record(notes: &[GratitudeNote]) -> Result<String, JournalError> {
    serde_json::to_string(notes).map_err(JournalError::Encode)
}

fn decode_record(raw: &str) -> Result<Vec<GratitudeNote>, JournalError> {
    serde_json::from_str(raw).map_err(|err| JournalError::Corrupt {
        details: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_record, encode_record, JournalError};
    use crate::model::note::GratitudeNote;

    #[test]
    fn record_encodes_as_json_string_array() {
        let notes = vec![
            GratitudeNote::new("coffee").unwrap(),
            GratitudeNote::new("rain on the window").unwrap(),
        ];
        assert_eq!(
            encode_record(&notes).unwrap(),
            r#"["coffee","rain on the window"]"#
        );
    }

    #[test]
    fn empty_record_round_trips() {
        let encoded = encode_record(&[]).unwrap();
        assert_eq!(encoded, "[]");
        assert!(decode_record(&encoded).unwrap().is_empty());
    }

    #[test]
    fn non_array_record_is_corrupt() {
        let err = decode_record(r#"{"oops": 1}"#).unwrap_err();
        assert!(matches!(err, JournalError::Corrupt { .. }));
    }

    #[test]
    fn blank_entry_makes_record_corrupt() {
        let err = decode_record(r#"["fine", "   "]"#).unwrap_err();
        assert!(matches!(err, JournalError::Corrupt { .. }));
    }
}
