use serde::{Deserialize, Serialize};

use crate::slot::SlotType;

/// One draggable answer fragment in a round's pool.
///
/// Immutable for the lifetime of a round. `id` is unique within a pool (an
/// external-collaborator contract, not validated here); `text` need not be —
/// two stems may render the same characters in different contexts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleOption {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
}

impl PuzzleOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, slot_type: SlotType) -> Self {
        PuzzleOption {
            id: id.into(),
            text: text.into(),
            slot_type,
        }
    }
}
