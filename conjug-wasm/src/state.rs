use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use conjug_core::PuzzleOption;

use crate::models::Round;

/// A piece sitting in one side of the assembly slot.
///
/// `correctness` stays `None` until the round controller runs a check; pool
/// pieces never carry a correctness value at all.
#[derive(Clone, Debug)]
pub struct PlacedPiece {
    pub option: PuzzleOption,
    pub correctness: Option<bool>,
}

impl PlacedPiece {
    pub fn new(option: PuzzleOption) -> Self {
        PlacedPiece {
            option,
            correctness: None,
        }
    }
}

/// Runtime state shared across the WASM callbacks.
pub struct State {
    pub document: Document,
    pub data: Round,
    pub stem_slot: Option<PlacedPiece>,
    pub ending_slot: Option<PlacedPiece>,
    /// Pool pieces render disabled after a correct check, until reset.
    pub locked: bool,
    /// UI language: "en" or "fr"
    pub lang: String,
}

thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
