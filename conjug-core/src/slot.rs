use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which edge of the assembled word a piece occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Stem,
    Ending,
}

/// Whether a piece belongs to the main verb or to a helper verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Main,
    Auxiliary,
}

/// Piece type: exactly one position and one role, always both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotType {
    pub position: Position,
    pub role: Role,
}

/// A tag outside the closed piece-type vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown piece type tag `{0}`")]
pub struct UnknownTag(pub String);

/// The two classification axes a consumer branches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub is_stem: bool,
    pub is_auxiliary: bool,
}

impl SlotType {
    pub const STEM_MAIN: SlotType = SlotType::new(Position::Stem, Role::Main);
    pub const STEM_AUX: SlotType = SlotType::new(Position::Stem, Role::Auxiliary);
    pub const ENDING_MAIN: SlotType = SlotType::new(Position::Ending, Role::Main);
    pub const ENDING_AUX: SlotType = SlotType::new(Position::Ending, Role::Auxiliary);

    pub const fn new(position: Position, role: Role) -> Self {
        SlotType { position, role }
    }

    pub const fn classify(self) -> Classification {
        Classification {
            is_stem: matches!(self.position, Position::Stem),
            is_auxiliary: matches!(self.role, Role::Auxiliary),
        }
    }

    pub const fn is_stem(self) -> bool {
        self.classify().is_stem
    }

    pub const fn is_auxiliary(self) -> bool {
        self.classify().is_auxiliary
    }

    /// Wire tag carried by round files and the drag payload.
    pub const fn tag(self) -> &'static str {
        match (self.position, self.role) {
            (Position::Stem, Role::Main) => "stem",
            (Position::Stem, Role::Auxiliary) => "stem-aux",
            (Position::Ending, Role::Main) => "ending",
            (Position::Ending, Role::Auxiliary) => "ending-aux",
        }
    }

    /// Strict tag parse for the drop boundary. Fails closed.
    pub fn from_tag(tag: &str) -> Result<Self, UnknownTag> {
        match tag {
            "stem" => Ok(Self::STEM_MAIN),
            "stem-aux" => Ok(Self::STEM_AUX),
            "ending" => Ok(Self::ENDING_MAIN),
            "ending-aux" => Ok(Self::ENDING_AUX),
            other => Err(UnknownTag(other.to_string())),
        }
    }

    /// Lossy parse for render paths: a malformed tag falls back to the
    /// stem-main base type so the piece still paints.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(Self::STEM_MAIN)
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<String> for SlotType {
    type Error = UnknownTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SlotType::from_tag(&value)
    }
}

impl From<SlotType> for String {
    fn from(value: SlotType) -> Self {
        value.tag().to_string()
    }
}
