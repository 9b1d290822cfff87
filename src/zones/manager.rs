//! Pile manager for card locations and movement.
//!
//! The `PileManager` owns every pile on the table and an index from card to
//! pile. It supports:
//! - Adding a card to the tail of a pile
//! - Moving a contiguous tail run from one pile to another
//! - Card lookup by identity
//! - Whole-table invariant checks
//!
//! It does not judge whether a move is legal; that belongs to
//! `rules::validator`. It only keeps membership exclusive and exhaustive.

use rustc_hash::FxHashMap;

use super::pile::{Pile, Run};
use crate::cards::{Card, Rank, Suit, DECK_SIZE};
use crate::core::config::{PileId, PileKind, FOUNDATION_COUNT, PILE_COUNT};
use crate::core::error::EngineError;

/// Owns all piles and tracks where each card is.
///
/// ## Usage
///
/// ```
/// use freecell_engine::cards::Card;
/// use freecell_engine::core::PileId;
/// use freecell_engine::zones::PileManager;
///
/// let mut manager = PileManager::new();
/// let king: Card = "SK".parse().unwrap();
/// let queen: Card = "HQ".parse().unwrap();
///
/// manager.add(king, PileId::tableau(0)).unwrap();
/// manager.add(queen, PileId::tableau(0)).unwrap();
///
/// let moved = manager.move_tail(PileId::tableau(0), 0, PileId::tableau(1)).unwrap();
/// assert_eq!(moved.as_slice(), &[king, queen]);
/// assert_eq!(manager.location(queen), Some(PileId::tableau(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileManager {
    /// One pile per slot, see `PileId::slot`.
    piles: Vec<Pile>,

    /// Card locations: card -> pile
    locations: FxHashMap<Card, PileId>,
}

impl Default for PileManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PileManager {
    /// Create a table with every pile empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: PileId::all().map(Pile::new).collect(),
            locations: FxHashMap::default(),
        }
    }

    /// Rebuild a manager from piles, e.g. a restored snapshot.
    ///
    /// Piles may come in any order but every pile id must appear exactly
    /// once. Fails on an unknown or repeated pile and on duplicated cards.
    /// Does not require a full deck; see [`PileManager::check_invariants`].
    pub fn from_piles(piles: impl IntoIterator<Item = Pile>) -> Result<Self, EngineError> {
        let mut slots: Vec<Option<Pile>> = vec![None; PILE_COUNT];

        for pile in piles {
            if !pile.id.is_valid() {
                return Err(EngineError::UnknownPile(pile.id));
            }
            let slot = &mut slots[pile.id.slot()];
            if slot.is_some() {
                return Err(EngineError::Invariant(format!("pile {} listed twice", pile.id)));
            }
            *slot = Some(pile);
        }

        let mut manager = Self::new();
        for (slot, pile) in slots.into_iter().enumerate() {
            let Some(pile) = pile else { continue };
            for card in pile.iter() {
                if manager.locations.insert(card, pile.id).is_some() {
                    return Err(EngineError::DuplicateCard(card));
                }
            }
            manager.piles[slot] = pile;
        }

        Ok(manager)
    }

    /// Append a card to the tail of a pile.
    ///
    /// Fails if the card is already on the table or the pile is unknown.
    pub fn add(&mut self, card: Card, pile: PileId) -> Result<(), EngineError> {
        if !pile.is_valid() {
            return Err(EngineError::UnknownPile(pile));
        }
        if self.locations.contains_key(&card) {
            return Err(EngineError::DuplicateCard(card));
        }

        self.locations.insert(card, pile);
        self.piles[pile.slot()].push(card);
        Ok(())
    }

    /// Move every card from `index` upward in `from` onto the tail of `to`,
    /// keeping their relative order.
    ///
    /// Returns the moved cards. Moving onto the same pile or with an index
    /// past the top is a no-op returning an empty run.
    pub fn move_tail(
        &mut self,
        from: PileId,
        index: usize,
        to: PileId,
    ) -> Result<Run, EngineError> {
        for pile in [from, to] {
            if !pile.is_valid() {
                return Err(EngineError::UnknownPile(pile));
            }
        }
        if from == to || index >= self.piles[from.slot()].len() {
            return Ok(Run::new());
        }

        let run = self.piles[from.slot()].split_off(index);
        let dest = &mut self.piles[to.slot()];
        for &card in &run {
            dest.push(card);
            self.locations.insert(card, to);
        }

        Ok(run)
    }

    /// Get a pile by id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        if id.is_valid() {
            self.piles.get(id.slot())
        } else {
            None
        }
    }

    /// All piles in slot order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter()
    }

    /// All piles of one kind, in index order.
    pub fn piles_of(&self, kind: PileKind) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter().filter(move |p| p.kind() == kind)
    }

    /// Get the pile a card is in.
    #[must_use]
    pub fn location(&self, card: Card) -> Option<PileId> {
        self.locations.get(&card).copied()
    }

    /// Pile and index of a card.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<(PileId, usize)> {
        let pile = self.location(card)?;
        let index = self.piles[pile.slot()].position(card)?;
        Some((pile, index))
    }

    /// Get the top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<Card> {
        self.pile(pile)?.top()
    }

    /// Number of cards in a pile (0 for unknown piles).
    #[must_use]
    pub fn pile_size(&self, pile: PileId) -> usize {
        self.pile(pile).map_or(0, Pile::len)
    }

    /// Get total number of cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Count empty piles of a kind.
    #[must_use]
    pub fn empty_count(&self, kind: PileKind) -> usize {
        self.piles_of(kind).filter(|p| p.is_empty()).count()
    }

    /// Verify the structural invariants of a complete table:
    ///
    /// - all 52 cards present, each exactly once, and the location index
    ///   agrees with pile contents
    /// - foundation `i` holds only `foundation_suits[i]`, ascending from Ace
    /// - no freecell holds more than one card
    pub fn check_invariants(
        &self,
        foundation_suits: &[Suit; FOUNDATION_COUNT],
    ) -> Result<(), EngineError> {
        let mut seen: FxHashMap<Card, PileId> = FxHashMap::default();
        for pile in &self.piles {
            for card in pile.iter() {
                if let Some(other) = seen.insert(card, pile.id) {
                    return Err(EngineError::Invariant(format!(
                        "card {} found in both {} and {}",
                        card, other, pile.id
                    )));
                }
            }
        }

        if seen.len() != DECK_SIZE {
            return Err(EngineError::Invariant(format!(
                "table holds {} cards, expected {}",
                seen.len(),
                DECK_SIZE
            )));
        }
        if seen != self.locations {
            return Err(EngineError::Invariant("location index out of sync with piles".into()));
        }

        for pile in self.piles_of(PileKind::Foundation) {
            let suit = foundation_suits[usize::from(pile.id.index)];
            for (i, card) in pile.iter().enumerate() {
                if card.suit != suit || Some(card.rank) != Rank::from_value(i as u8 + 1) {
                    return Err(EngineError::Invariant(format!(
                        "{} holds {} at depth {}",
                        pile.id, card, i
                    )));
                }
            }
        }

        if let Some(pile) = self.piles_of(PileKind::Freecell).find(|p| p.len() > 1) {
            return Err(EngineError::Invariant(format!(
                "{} holds {} cards",
                pile.id,
                pile.len()
            )));
        }

        Ok(())
    }
}
