//! Rules engine trait for the presentation layer.
//!
//! A front end programs against `RulesEngine`:
//! - Ask whether a drop is legal (`is_valid_move`)
//! - Perform it (`place_card`)
//! - Query interactive cards and the win flag
//!
//! The engine never renders, animates or plays sounds; a rejected move just
//! means the card belongs back where it was.

use crate::cards::Card;
use crate::core::action::{Move, Placement, Target};
use crate::core::config::{GameConfig, PileId, PileKind};
use crate::core::error::EngineError;
use crate::zones::PileManager;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_valid_move`: Must not mutate anything
/// - `place_card`: Must re-check legality and be all-or-nothing
/// - `is_won`: Reflects the state after the last placement
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the current table.
    fn piles(&self) -> &PileManager;

    /// Check whether `card` may be moved onto `target`.
    fn is_valid_move(&self, card: Card, target: impl Into<Target>) -> bool;

    /// Move `card` (and, for a tableau run, every card above it) onto
    /// `target`.
    fn place_card(
        &mut self,
        card: Card,
        target: impl Into<Target>,
    ) -> Result<Placement, EngineError>;

    /// The interactive card of a pile.
    fn top_card(&self, pile: PileId) -> Option<Card>;

    /// True once all foundations are complete.
    fn is_won(&self) -> bool;

    // === Convenience Methods ===

    /// Cards that can be picked up right now: the top card of every pile
    /// plus every card of each tableau's movable run.
    fn movable_cards(&self) -> Vec<Card> {
        let mut cards = Vec::new();
        for pile in self.piles().piles() {
            if pile.kind() == PileKind::Tableau {
                cards.extend(pile.movable_run());
            } else {
                cards.extend(pile.top());
            }
        }
        cards
    }

    /// Every pile `card` may legally move to.
    fn legal_destinations(&self, card: Card) -> Vec<PileId> {
        PileId::all()
            .filter(|&pile| self.is_valid_move(card, pile))
            .collect()
    }

    /// Enumerate all legal moves.
    ///
    /// Lists what is allowed; it does not rank or suggest anything.
    fn legal_moves(&self) -> Vec<Move> {
        self.movable_cards()
            .into_iter()
            .flat_map(|card| {
                self.legal_destinations(card)
                    .into_iter()
                    .map(move |to| Move::new(card, to))
            })
            .collect()
    }
}
