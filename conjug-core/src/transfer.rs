use thiserror::Error;

use crate::slot::{SlotType, UnknownTag};

/// Plain-text entry carrying the piece's display text.
pub const TEXT_KEY: &str = "text/plain";
/// Typed entry carrying the piece's type tag.
pub const TYPE_KEY: &str = "application/x-puzzle-type";
/// Drags copy: the source piece stays available in its pool.
pub const DRAG_EFFECT: &str = "copy";

/// The message a drag source sends across the drop boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub text: String,
    pub slot_type: SlotType,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("drag payload has no `{TEXT_KEY}` entry")]
    MissingText,
    #[error("drag payload has no `{TYPE_KEY}` entry")]
    MissingType,
    #[error(transparent)]
    UnknownType(#[from] UnknownTag),
}

impl DragPayload {
    pub fn new(text: impl Into<String>, slot_type: SlotType) -> Self {
        DragPayload {
            text: text.into(),
            slot_type,
        }
    }

    /// Entries the drag source writes onto the transfer, in write order.
    /// Both are written together; a disabled piece writes none and cancels
    /// the native drag instead.
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            (TEXT_KEY, self.text.as_str()),
            (TYPE_KEY, self.slot_type.tag()),
        ]
    }

    /// Rebuild the payload on the drop side.
    ///
    /// Fails closed: a missing entry or an unknown tag rejects the drop
    /// rather than guessing. An empty string counts as missing, matching the
    /// DOM `getData` contract for absent formats.
    pub fn decode(text: Option<String>, tag: Option<String>) -> Result<Self, TransferError> {
        let text = text
            .filter(|t| !t.is_empty())
            .ok_or(TransferError::MissingText)?;
        let tag = tag
            .filter(|t| !t.is_empty())
            .ok_or(TransferError::MissingType)?;
        Ok(DragPayload {
            text,
            slot_type: SlotType::from_tag(&tag)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_carry_exactly_text_and_tag() {
        let payload = DragPayload::new("parl", SlotType::STEM_MAIN);
        assert_eq!(
            payload.entries(),
            [("text/plain", "parl"), ("application/x-puzzle-type", "stem")]
        );
    }

    #[test]
    fn decode_round_trips_the_entries() {
        let payload = DragPayload::new("ez", SlotType::ENDING_AUX);
        let [(_, text), (_, tag)] = payload.entries();
        let back = DragPayload::decode(Some(text.to_string()), Some(tag.to_string())).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn decode_fails_closed_on_missing_entries() {
        assert_eq!(
            DragPayload::decode(None, Some("stem".into())),
            Err(TransferError::MissingText)
        );
        assert_eq!(
            DragPayload::decode(Some("parl".into()), None),
            Err(TransferError::MissingType)
        );
        // getData yields "" for absent formats
        assert_eq!(
            DragPayload::decode(Some("parl".into()), Some(String::new())),
            Err(TransferError::MissingType)
        );
    }

    #[test]
    fn decode_rejects_unknown_tags() {
        let err = DragPayload::decode(Some("parl".into()), Some("verb".into())).unwrap_err();
        assert!(matches!(err, TransferError::UnknownType(_)));
    }
}
