//! Move representation: a card plus where it should go.
//!
//! The destination is a `Target`, either a pile or a card. Dropping a card
//! onto another card means "onto that card's pile", so card targets are
//! resolved to their containing pile before any rule is checked.

use serde::{Deserialize, Serialize};

use super::config::PileId;
use crate::cards::Card;
use crate::zones::{Pile, Run};

/// Destination of a move as the presentation layer names it.
///
/// ```
/// use freecell_engine::cards::Card;
/// use freecell_engine::core::{PileId, Target};
///
/// let on_pile: Target = PileId::tableau(2).into();
/// let on_card: Target = "D7".parse::<Card>().unwrap().into();
///
/// assert_eq!(on_pile, Target::Pile(PileId::tableau(2)));
/// assert!(matches!(on_card, Target::Card(_)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Pile(PileId),
    Card(Card),
}

impl From<PileId> for Target {
    fn from(pile: PileId) -> Self {
        Target::Pile(pile)
    }
}

impl From<Card> for Target {
    fn from(card: Card) -> Self {
        Target::Card(card)
    }
}

/// A resolved candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Card picked up. For a sequence move, the bottom card of the run.
    pub card: Card,
    pub to: PileId,
}

impl Move {
    #[must_use]
    pub const fn new(card: Card, to: PileId) -> Self {
        Self { card, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.card, self.to)
    }
}

/// Result of a successful placement.
///
/// Carries the piles touched by the move, as they are after it, so the
/// presentation layer can re-sync just those two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub from: PileId,
    pub to: PileId,
    /// Cards moved, bottom to top. More than one for a sequence move.
    pub cards: Run,
    pub source: Pile,
    pub destination: Pile,
    /// Win flag after the move.
    pub won: bool,
}

impl Placement {
    /// True if more than one card moved.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.cards.len() > 1
    }
}
