//! Table layout and game configuration.
//!
//! - `PileKind` / `PileId`: Names every pile on the table
//! - `SequenceLimit`: How long a tableau run may be moved as a unit
//! - `GameConfig`: Seed, foundation suit mapping and sequence limit
//!
//! The table shape itself (8 tableau, 4 foundations, 4 freecells) is fixed.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::cards::Suit;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 8;
/// Number of foundation piles, one per suit.
pub const FOUNDATION_COUNT: usize = 4;
/// Number of freecells.
pub const FREECELL_COUNT: usize = 4;
/// Total number of piles on the table.
pub const PILE_COUNT: usize = TABLEAU_COUNT + FOUNDATION_COUNT + FREECELL_COUNT;

/// The three pile kinds, each with its own acceptance rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Tableau,
    Foundation,
    Freecell,
}

impl PileKind {
    /// Number of piles of this kind on the table.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            PileKind::Tableau => TABLEAU_COUNT,
            PileKind::Foundation => FOUNDATION_COUNT,
            PileKind::Freecell => FREECELL_COUNT,
        }
    }

    const fn slot_base(self) -> usize {
        match self {
            PileKind::Tableau => 0,
            PileKind::Foundation => TABLEAU_COUNT,
            PileKind::Freecell => TABLEAU_COUNT + FOUNDATION_COUNT,
        }
    }
}

/// Identifies one pile: its kind plus an index within that kind.
///
/// Ids are not range-checked on construction; the game rejects unknown piles
/// with [`EngineError::UnknownPile`].
///
/// ```
/// use freecell_engine::core::{PileId, PileKind};
///
/// let pile = PileId::tableau(3);
/// assert_eq!(pile.kind, PileKind::Tableau);
/// assert!(pile.is_valid());
/// assert!(!PileId::freecell(4).is_valid());
/// assert_eq!(pile.to_string(), "Tableau(3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId {
    pub kind: PileKind,
    pub index: u8,
}

impl PileId {
    #[must_use]
    pub const fn new(kind: PileKind, index: u8) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub const fn tableau(index: u8) -> Self {
        Self::new(PileKind::Tableau, index)
    }

    #[must_use]
    pub const fn foundation(index: u8) -> Self {
        Self::new(PileKind::Foundation, index)
    }

    #[must_use]
    pub const fn freecell(index: u8) -> Self {
        Self::new(PileKind::Freecell, index)
    }

    /// True if the index is in range for the kind.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.index as usize) < self.kind.count()
    }

    /// Dense position in `0..PILE_COUNT`: tableau first, then foundations,
    /// then freecells. Only meaningful for valid ids.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.kind.slot_base() + self.index as usize
    }

    /// Inverse of [`PileId::slot`].
    #[must_use]
    pub fn from_slot(slot: usize) -> Option<Self> {
        [PileKind::Tableau, PileKind::Foundation, PileKind::Freecell]
            .into_iter()
            .find(|kind| (kind.slot_base()..kind.slot_base() + kind.count()).contains(&slot))
            .map(|kind| Self::new(kind, (slot - kind.slot_base()) as u8))
    }

    /// Every pile on the table, in slot order.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT).filter_map(Self::from_slot)
    }

    /// Every pile of one kind, in index order.
    pub fn all_of(kind: PileKind) -> impl Iterator<Item = PileId> {
        (0..kind.count() as u8).map(move |i| Self::new(kind, i))
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.index)
    }
}

/// Bound on how many cards a tableau-to-tableau sequence move may carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceLimit {
    /// Any legal run may move as a unit.
    #[default]
    Unlimited,
    /// Classic FreeCell bound: `(empty freecells + 1) * 2^(empty tableaus)`,
    /// not counting the destination if it is empty.
    FreeCapacity,
}

/// Foundation suit mapping used when none is configured.
///
/// Foundation `i` accepts only `DEFAULT_FOUNDATION_SUITS[i]`.
pub const DEFAULT_FOUNDATION_SUITS: [Suit; FOUNDATION_COUNT] =
    [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

/// Complete game configuration.
///
/// ```
/// use freecell_engine::cards::Suit;
/// use freecell_engine::core::{GameConfig, SequenceLimit};
///
/// let config = GameConfig::new()
///     .with_seed(42)
///     .with_foundation_suits(Suit::ALL)
///     .with_sequence_limit(SequenceLimit::FreeCapacity);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Deal seed. `None` draws a random one.
    pub seed: Option<u64>,

    /// Suit accepted by each foundation pile. Must be a permutation of the
    /// four suits.
    pub foundation_suits: [Suit; FOUNDATION_COUNT],

    /// Sequence move bound.
    pub sequence_limit: SequenceLimit,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            foundation_suits: DEFAULT_FOUNDATION_SUITS,
            sequence_limit: SequenceLimit::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_foundation_suits(mut self, suits: [Suit; FOUNDATION_COUNT]) -> Self {
        self.foundation_suits = suits;
        self
    }

    #[must_use]
    pub fn with_sequence_limit(mut self, limit: SequenceLimit) -> Self {
        self.sequence_limit = limit;
        self
    }

    /// Suit assigned to a foundation index.
    #[must_use]
    pub fn foundation_suit(&self, index: usize) -> Option<Suit> {
        self.foundation_suits.get(index).copied()
    }

    /// Foundation pile that collects `suit`.
    #[must_use]
    pub fn foundation_for(&self, suit: Suit) -> Option<PileId> {
        self.foundation_suits
            .iter()
            .position(|&s| s == suit)
            .map(|i| PileId::foundation(i as u8))
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen = [false; 4];
        for suit in self.foundation_suits {
            if std::mem::replace(&mut seen[suit.index()], true) {
                return Err(EngineError::InvalidConfig(format!(
                    "suit {} assigned to more than one foundation",
                    suit
                )));
            }
        }
        Ok(())
    }
}
