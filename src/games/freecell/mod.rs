//! FreeCell solitaire.
//!
//! - 52 cards dealt face up onto 8 tableau piles (7,7,7,7,6,6,6,6)
//! - 4 foundations built up by suit from Ace to King
//! - 4 freecells holding one card each
//! - Tableau runs alternate color and descend by one rank
//!
//! The game is won when every foundation holds 13 cards.

mod game;
mod snapshot;

pub use game::{FreecellGame, FreecellGameBuilder};
pub use snapshot::Snapshot;
