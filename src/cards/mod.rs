//! Card system: identity and deck building.
//!
//! ## Key Types
//!
//! - `Card`: Immutable suit + rank, parsed from tokens like `"H7"`
//! - `Suit`, `Rank`, `Color`: Card components
//! - `ShuffledDeck`: 52 cards in deal order plus the seed that produced them

pub mod card;
pub mod deck;

pub use card::{Card, Color, ParseCardError, Rank, Suit};
pub use deck::{shuffle_with, shuffled_deck, standard_deck, ShuffledDeck, DECK_SIZE};
