//! Gratitude note domain model.
//!
//! # Responsibility
//! - Define the single value type stored in the gratitude journal.
//! - Enforce the trimmed/non-blank contract on input and decode paths.
//!
//! # Invariants
//! - A `GratitudeNote` is never empty after trimming.
//! - A `GratitudeNote` never carries leading or trailing whitespace.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One user-submitted line of gratitude text.
///
/// Construction goes through [`GratitudeNote::new`] on the input path, which
/// trims and rejects blank input, or through `TryFrom<String>` on the decode
/// path, which rejects values violating the stored contract instead of
/// repairing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GratitudeNote(String);

/// Validation failure for persisted note values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Value is empty after trimming.
    Blank,
    /// Value carries leading or trailing whitespace.
    UntrimmedWhitespace,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "note text is blank"),
            Self::UntrimmedWhitespace => {
                write!(f, "note text carries leading or trailing whitespace")
            }
        }
    }
}

impl Error for NoteValidationError {}

impl GratitudeNote {
    /// Trims `raw` and builds a note, or `None` when nothing remains.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Note text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GratitudeNote {
    type Error = NoteValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(NoteValidationError::Blank);
        }
        if trimmed.len() != value.len() {
            return Err(NoteValidationError::UntrimmedWhitespace);
        }
        Ok(Self(value))
    }
}

impl From<GratitudeNote> for String {
    fn from(value: GratitudeNote) -> Self {
        value.0
    }
}

impl Display for GratitudeNote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{GratitudeNote, NoteValidationError};

    #[test]
    fn new_trims_surrounding_whitespace() {
        let note = GratitudeNote::new("  morning coffee \n").expect("non-blank input");
        assert_eq!(note.as_str(), "morning coffee");
    }

    #[test]
    fn new_rejects_blank_input() {
        assert!(GratitudeNote::new("").is_none());
        assert!(GratitudeNote::new("   \t ").is_none());
    }

    #[test]
    fn try_from_accepts_trimmed_text() {
        let note = GratitudeNote::try_from("a quiet evening".to_string()).unwrap();
        assert_eq!(note.as_str(), "a quiet evening");
    }

    #[test]
    fn try_from_rejects_blank_value() {
        let err = GratitudeNote::try_from("  ".to_string()).unwrap_err();
        assert_eq!(err, NoteValidationError::Blank);
    }

    #[test]
    fn try_from_rejects_untrimmed_value() {
        let err = GratitudeNote::try_from(" padded".to_string()).unwrap_err();
        assert_eq!(err, NoteValidationError::UntrimmedWhitespace);
    }

    #[test]
    fn serializes_as_bare_json_string() {
        let note = GratitudeNote::new("tea").unwrap();
        assert_eq!(serde_json::to_string(&note).unwrap(), "\"tea\"");
    }
}
