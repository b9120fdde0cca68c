use conjug_core::PuzzleOption;
use serde::{Deserialize, Serialize};

/// One accepted stem/ending pairing, by option id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPair {
    pub stem: String,
    pub ending: String,
}

/// A practice round: the option pool plus the accepted pairings.
///
/// Built by the round author and never mutated afterwards; loading a new
/// round replaces the whole value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Round {
    pub title: Option<String>,
    #[serde(default)]
    pub options: Vec<PuzzleOption>,
    #[serde(default)]
    pub answers: Vec<AnswerPair>,
    // Optional per-round notes in two languages
    pub note_en: Option<String>,
    pub note_fr: Option<String>,
}

impl Round {
    /// Piece-level validator: is this stem/ending pairing accepted?
    pub fn is_answer(&self, stem_id: &str, ending_id: &str) -> bool {
        self.answers
            .iter()
            .any(|a| a.stem == stem_id && a.ending == ending_id)
    }

    /// Note in the requested language, falling back to the other one.
    pub fn note(&self, lang: &str) -> Option<&str> {
        let (first, second) = if lang == "fr" {
            (&self.note_fr, &self.note_en)
        } else {
            (&self.note_en, &self.note_fr)
        };
        first.as_deref().or(second.as_deref())
    }
}
