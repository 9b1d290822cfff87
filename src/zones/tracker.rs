//! Top-card tracking.
//!
//! Exactly one card per non-empty pile is interactive: its tail card. The
//! tracker caches that answer and is refreshed after every mutation of the
//! `PileManager`.

use super::manager::PileManager;
use crate::cards::Card;
use crate::core::config::{PileId, PILE_COUNT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopCardTracker {
    tops: [Option<Card>; PILE_COUNT],
}

impl TopCardTracker {
    /// Build a tracker already in sync with `piles`.
    #[must_use]
    pub fn from_piles(piles: &PileManager) -> Self {
        let mut tracker = Self::default();
        tracker.refresh(piles);
        tracker
    }

    /// Clear every flag, then flag the tail card of each non-empty pile.
    pub fn refresh(&mut self, piles: &PileManager) {
        self.tops = [None; PILE_COUNT];
        for pile in piles.piles() {
            self.tops[pile.id.slot()] = pile.top();
        }
    }

    /// The interactive card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<Card> {
        if pile.is_valid() {
            self.tops[pile.slot()]
        } else {
            None
        }
    }

    /// True if the card is the tail card of its pile.
    #[must_use]
    pub fn is_top_card(&self, card: Card) -> bool {
        self.tops.contains(&Some(card))
    }

    /// All interactive cards, in pile slot order.
    pub fn interactive_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.tops.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn test_flags_only_tail_cards() {
        let mut piles = PileManager::new();
        piles.add(card("C4"), PileId::tableau(0)).unwrap();
        piles.add(card("H9"), PileId::tableau(0)).unwrap();
        piles.add(card("SQ"), PileId::freecell(2)).unwrap();

        let tracker = TopCardTracker::from_piles(&piles);

        assert!(tracker.is_top_card(card("H9")));
        assert!(!tracker.is_top_card(card("C4")));
        assert!(tracker.is_top_card(card("SQ")));
        assert_eq!(tracker.top_card(PileId::freecell(2)), Some(card("SQ")));
        assert_eq!(tracker.top_card(PileId::tableau(1)), None);
        assert_eq!(tracker.interactive_cards().count(), 2);
    }

    #[test]
    fn test_refresh_after_move() {
        let mut piles = PileManager::new();
        piles.add(card("C4"), PileId::tableau(0)).unwrap();
        piles.add(card("H9"), PileId::tableau(0)).unwrap();
        let mut tracker = TopCardTracker::from_piles(&piles);

        piles.move_tail(PileId::tableau(0), 1, PileId::freecell(0)).unwrap();
        tracker.refresh(&piles);

        assert!(tracker.is_top_card(card("C4")));
        assert!(tracker.is_top_card(card("H9")));
        assert_eq!(tracker.top_card(PileId::tableau(0)), Some(card("C4")));
        assert_eq!(tracker.top_card(PileId::freecell(0)), Some(card("H9")));
    }
}
