//! Data structures for the game world
//!
//! Defines the mansion map, the sorted clue index and the suspect ledger.

pub mod clues;
pub mod ledger;
pub mod mansion;

pub use clues::*;
pub use ledger::*;
pub use mansion::*;

use crate::GameError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length, in characters, of any room name, clue text or suspect
/// name. Longer labels are rejected at construction.
pub const MAX_LABEL: usize = 49;

/// Validate a label against [`MAX_LABEL`] and return it as an owned string.
pub fn validated_label(label: &str) -> Result<String, GameError> {
    if label.chars().count() > MAX_LABEL {
        return Err(GameError::LabelTooLong {
            label: label.to_string(),
            limit: MAX_LABEL,
        });
    }
    Ok(label.to_string())
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_up_to_the_limit_pass() {
        let label = "x".repeat(MAX_LABEL);
        assert_eq!(validated_label(&label).unwrap(), label);
    }

    #[test]
    fn overlong_labels_are_rejected() {
        let label = "x".repeat(MAX_LABEL + 1);
        match validated_label(&label) {
            Err(GameError::LabelTooLong { limit, .. }) => assert_eq!(limit, MAX_LABEL),
            other => panic!("expected LabelTooLong, got {other:?}"),
        }
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // "ã" is two bytes but one character
        let label = "ã".repeat(MAX_LABEL);
        assert!(validated_label(&label).is_ok());
    }
}
