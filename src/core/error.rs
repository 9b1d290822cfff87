//! Engine error type.
//!
//! Rule violations are not errors for the validator (it answers `false`),
//! but `place_card` reports them as [`EngineError::IllegalMove`] so callers
//! can tell a rejected move from a successful one. Every error leaves the
//! piles untouched.

use std::fmt;

use super::config::PileId;
use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A deal was attempted with the wrong number of cards.
    DeckSize { expected: usize, found: usize },
    /// The same card appears twice where each card must be unique.
    DuplicateCard(Card),
    /// The card is not in any pile.
    CardNotFound(Card),
    /// The pile id is out of range for its kind.
    UnknownPile(PileId),
    /// The move breaks a placement rule.
    IllegalMove { card: Card, to: PileId },
    /// The configuration cannot be used.
    InvalidConfig(String),
    /// A pile layout violates a structural invariant.
    Invariant(String),
    /// A snapshot could not be encoded or decoded.
    Codec(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DeckSize { expected, found } => {
                write!(f, "deal needs {} cards, got {}", expected, found)
            }
            EngineError::DuplicateCard(card) => write!(f, "card {} appears more than once", card),
            EngineError::CardNotFound(card) => write!(f, "card {} is not in any pile", card),
            EngineError::UnknownPile(pile) => write!(f, "no such pile {}", pile),
            EngineError::IllegalMove { card, to } => write!(f, "cannot place {} on {}", card, to),
            EngineError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            EngineError::Invariant(msg) => write!(f, "pile invariant violated: {}", msg),
            EngineError::Codec(msg) => write!(f, "snapshot codec error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Codec(err.to_string())
    }
}
