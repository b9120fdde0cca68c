//! Piece semantics for the conjugation jigsaw: type classification,
//! presentation derivation and the drag transfer contract.
//!
//! Everything in this crate is pure and host-testable. DOM construction and
//! event wiring live in `conjug-wasm`.

pub mod piece;
pub mod slot;
pub mod theme;
pub mod transfer;

pub use piece::PuzzleOption;
pub use slot::{Classification, Position, Role, SlotType};
pub use theme::{Connector, Presentation, Theme, derive_presentation};
pub use transfer::{DragPayload, TransferError};
