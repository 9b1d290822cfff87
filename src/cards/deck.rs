//! Deck construction and shuffling.
//!
//! ```
//! use freecell_engine::cards::{shuffled_deck, DECK_SIZE};
//!
//! let a = shuffled_deck(Some(7));
//! let b = shuffled_deck(Some(7));
//! assert_eq!(a.cards.len(), DECK_SIZE);
//! assert_eq!(a, b);
//! ```

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The 52 cards in suit order C, D, H, S and rank order A..K.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// A shuffled deck together with the seed that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffledDeck {
    /// Seed used for the shuffle; feed it back in to replay the deal.
    pub seed: u64,
    /// Cards in deal order (index 0 is dealt first).
    pub cards: Vec<Card>,
}

/// Build a standard deck and shuffle it.
///
/// With `Some(seed)` the order is fully determined by the seed. With `None` a
/// fresh seed is drawn and reported in [`ShuffledDeck::seed`].
#[must_use]
pub fn shuffled_deck(seed: Option<u64>) -> ShuffledDeck {
    match seed {
        Some(seed) => deck_from_seed(seed),
        None => shuffle_with(&mut GameRng::from_entropy()),
    }
}

/// Shuffle a fresh standard deck with a seed drawn from `rng`.
///
/// The reported seed replays this deal through [`shuffled_deck`], however
/// many decks `rng` has shuffled before.
#[must_use]
pub fn shuffle_with(rng: &mut GameRng) -> ShuffledDeck {
    deck_from_seed(rng.next_seed())
}

fn deck_from_seed(seed: u64) -> ShuffledDeck {
    let mut cards = standard_deck();
    GameRng::new(seed).shuffle(&mut cards);
    log::debug!("shuffled deck with seed {}", seed);
    ShuffledDeck { seed, cards }
}
