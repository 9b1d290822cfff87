//! Move legality.
//!
//! A `Validator` borrows the table and answers whether a card may go to a
//! target. It never mutates anything. The executor asks it for a
//! [`MovePlan`] and carries that plan out, so validation and execution
//! cannot disagree.
//!
//! Acceptance rules by destination kind:
//!
//! - **Freecell**: empty, and the card is the top card of its pile.
//! - **Foundation**: the card is a top card of the foundation's suit, and
//!   is an Ace on an empty foundation or one rank above its top card.
//! - **Tableau**: a King on an empty pile, otherwise opposite color and one
//!   rank below the top card. A card below the top of a tableau pile moves
//!   together with everything above it, which must be a legal run; the card
//!   itself is checked against the destination as above.

use crate::cards::{Card, Rank};
use crate::core::action::Target;
use crate::core::config::{GameConfig, PileId, PileKind, SequenceLimit};
use crate::core::error::EngineError;
use crate::zones::{PileManager, TopCardTracker};

/// A checked move: take every card from `index` up in `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePlan {
    pub from: PileId,
    pub index: usize,
    pub to: PileId,
    /// Number of cards that will move.
    pub len: usize,
}

/// Read-only rule checks over one table state.
#[derive(Clone, Copy)]
pub struct Validator<'a> {
    piles: &'a PileManager,
    tops: &'a TopCardTracker,
    config: &'a GameConfig,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(piles: &'a PileManager, tops: &'a TopCardTracker, config: &'a GameConfig) -> Self {
        Self { piles, tops, config }
    }

    /// Resolve a target to a pile: a card target means its containing pile.
    pub fn resolve(&self, target: Target) -> Result<PileId, EngineError> {
        match target {
            Target::Pile(pile) if pile.is_valid() => Ok(pile),
            Target::Pile(pile) => Err(EngineError::UnknownPile(pile)),
            Target::Card(card) => self.piles.location(card).ok_or(EngineError::CardNotFound(card)),
        }
    }

    /// True iff moving `card` to `target` is legal right now.
    #[must_use]
    pub fn is_valid_move(&self, card: Card, target: Target) -> bool {
        let verdict = self.plan(card, target);
        log::trace!("validate {} -> {:?}: {:?}", card, target, verdict);
        verdict.is_ok()
    }

    /// Check a move and describe exactly which cards it would transfer.
    pub fn plan(&self, card: Card, target: Target) -> Result<MovePlan, EngineError> {
        let to = self.resolve(target)?;
        let (from, index) = self.piles.position(card).ok_or(EngineError::CardNotFound(card))?;
        let illegal = EngineError::IllegalMove { card, to };

        if from == to {
            return Err(illegal);
        }

        let is_top = self.tops.is_top_card(card);
        let accepted = match to.kind {
            PileKind::Freecell => is_top && self.can_place_on_freecell(to),
            PileKind::Foundation => is_top && self.can_place_on_foundation(card, to),
            PileKind::Tableau if is_top => self.can_place_on_tableau(card, to),
            PileKind::Tableau => {
                self.can_move_run(from, index, to) && self.can_place_on_tableau(card, to)
            }
        };

        if !accepted {
            return Err(illegal);
        }

        let len = self.piles.pile_size(from) - index;
        Ok(MovePlan { from, index, to, len })
    }

    /// A freecell accepts a card only while empty.
    #[must_use]
    pub fn can_place_on_freecell(&self, cell: PileId) -> bool {
        cell.kind == PileKind::Freecell && self.piles.pile(cell).is_some_and(|p| p.is_empty())
    }

    /// Foundation rule for a single card.
    #[must_use]
    pub fn can_place_on_foundation(&self, card: Card, foundation: PileId) -> bool {
        if foundation.kind != PileKind::Foundation {
            return false;
        }
        if self.config.foundation_suit(usize::from(foundation.index)) != Some(card.suit) {
            return false;
        }

        match self.piles.top_card(foundation) {
            None => card.rank == Rank::Ace,
            Some(top) => card.suit == top.suit && card.value() == top.value() + 1,
        }
    }

    /// Tableau rule for a single card (or the bottom card of a run).
    #[must_use]
    pub fn can_place_on_tableau(&self, card: Card, tableau: PileId) -> bool {
        if tableau.kind != PileKind::Tableau || !tableau.is_valid() {
            return false;
        }

        match self.piles.top_card(tableau) {
            None => card.rank == Rank::King,
            Some(top) => card.stacks_on(top),
        }
    }

    /// True if the cards from `index` up in tableau `from` form a legal run
    /// that may travel to `to` under the configured limit.
    #[must_use]
    pub fn can_move_run(&self, from: PileId, index: usize, to: PileId) -> bool {
        if from.kind != PileKind::Tableau || to.kind != PileKind::Tableau {
            return false;
        }
        let Some(pile) = self.piles.pile(from) else {
            return false;
        };
        if index < pile.run_start() || index >= pile.len() {
            return false;
        }

        let len = pile.len() - index;
        len <= self.max_run_len(to)
    }

    /// Longest run that may move onto `to`.
    #[must_use]
    pub fn max_run_len(&self, to: PileId) -> usize {
        match self.config.sequence_limit {
            SequenceLimit::Unlimited => usize::MAX,
            SequenceLimit::FreeCapacity => {
                let free_cells = self.piles.empty_count(PileKind::Freecell);
                let mut empty_tableaus = self.piles.empty_count(PileKind::Tableau);
                let to_empty_tableau = to.kind == PileKind::Tableau
                    && self.piles.pile(to).is_some_and(|p| p.is_empty());
                if to_empty_tableau {
                    empty_tableaus -= 1;
                }
                (free_cells + 1) << empty_tableaus
            }
        }
    }
}
