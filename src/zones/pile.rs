//! A single pile of cards.
//!
//! Index 0 is the bottom card; the last card is the top (tail) card, the
//! only one that can be picked up on its own.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::{PileId, PileKind};

/// Cards moved together in one placement. A run never exceeds 13 cards
/// (King down to Ace), so it stays inline.
pub type Run = SmallVec<[Card; 13]>;

/// Ordered stack of cards belonging to one pile.
///
/// Backed by `im::Vector` so snapshots of the table clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    pub id: PileId,
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vector::new(),
        }
    }

    /// Build a pile from cards listed bottom to top.
    #[must_use]
    pub fn with_cards(id: PileId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.id.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The tail card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Cards bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.index_of(&card)
    }

    /// Copy of the cards from `index` to the top.
    #[must_use]
    pub fn tail_from(&self, index: usize) -> Run {
        self.cards.iter().skip(index).copied().collect()
    }

    /// Start index of the movable run: the longest tail in which every card
    /// is one rank lower than, and the opposite color of, the card beneath.
    ///
    /// Returns `len()` for an empty pile. Only tableau piles build runs; for
    /// other kinds this is the index of the top card.
    #[must_use]
    pub fn run_start(&self) -> usize {
        let len = self.cards.len();
        if len == 0 {
            return 0;
        }
        if self.kind() != PileKind::Tableau {
            return len - 1;
        }

        let mut start = len - 1;
        while start > 0 {
            let (below, above) = (self.cards[start - 1], self.cards[start]);
            if !above.stacks_on(below) {
                break;
            }
            start -= 1;
        }
        start
    }

    /// The movable run as cards, bottom to top.
    #[must_use]
    pub fn movable_run(&self) -> Run {
        self.tail_from(self.run_start())
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Detach every card from `index` upward.
    pub(crate) fn split_off(&mut self, index: usize) -> Run {
        self.cards.split_off(index).into_iter().collect()
    }
}
