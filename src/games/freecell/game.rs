//! FreeCell game implementation.

use crate::cards::{shuffled_deck, Card, Suit};
use crate::core::{
    EngineError, GameConfig, PileId, Placement, SequenceLimit, Target, FOUNDATION_COUNT,
};
use crate::rules::{self, RulesEngine, Validator};
use crate::zones::{Pile, PileManager, TopCardTracker};

use super::snapshot::Snapshot;

/// One FreeCell deal in progress.
///
/// Owns the whole table. Every mutation goes through `&mut self`, so only one
/// move can be validated and executed at a time.
#[derive(Clone, Debug)]
pub struct FreecellGame {
    config: GameConfig,
    seed: Option<u64>,
    piles: PileManager,
    tops: TopCardTracker,
    won: bool,
    move_count: u32,
}

/// Builder for creating a FreecellGame.
///
/// ```
/// use freecell_engine::games::freecell::FreecellGameBuilder;
/// use freecell_engine::core::PileId;
/// use freecell_engine::RulesEngine;
///
/// let game = FreecellGameBuilder::new().seed(42).build().unwrap();
///
/// assert_eq!(game.seed(), Some(42));
/// assert_eq!(game.piles().pile_size(PileId::tableau(0)), 7);
/// assert!(!game.is_won());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FreecellGameBuilder {
    config: GameConfig,
}

impl FreecellGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn foundation_suits(mut self, suits: [Suit; FOUNDATION_COUNT]) -> Self {
        self.config.foundation_suits = suits;
        self
    }

    pub fn sequence_limit(mut self, limit: SequenceLimit) -> Self {
        self.config.sequence_limit = limit;
        self
    }

    /// Shuffle a deck (seeded if configured) and deal it.
    pub fn build(self) -> Result<FreecellGame, EngineError> {
        self.config.validate()?;
        let deck = shuffled_deck(self.config.seed);
        let mut game = FreecellGame::from_table(self.config, rules::deal(&deck.cards)?)?;
        game.seed = Some(deck.seed);
        Ok(game)
    }

    /// Deal a caller-supplied deck instead of shuffling.
    ///
    /// The configured seed is ignored; [`FreecellGame::seed`] reports `None`.
    pub fn build_with_deck(self, deck: &[Card]) -> Result<FreecellGame, EngineError> {
        self.config.validate()?;
        FreecellGame::from_table(self.config, rules::deal(deck)?)
    }
}

impl FreecellGame {
    /// Wrap an already laid-out table. The table must pass the invariant
    /// checks for `config`.
    pub fn from_table(config: GameConfig, piles: PileManager) -> Result<Self, EngineError> {
        config.validate()?;
        piles.check_invariants(&config.foundation_suits)?;

        let tops = TopCardTracker::from_piles(&piles);
        let won = rules::is_won(&piles);
        log::debug!("table ready with {} cards, won={}", piles.total_cards(), won);

        Ok(Self {
            config,
            seed: None,
            piles,
            tops,
            won,
            move_count: 0,
        })
    }

    /// Deal seed, if the deck was shuffled by the engine.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of successful placements so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Get a pile by id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.pile(id)
    }

    /// True if the card is the interactive card of its pile.
    #[must_use]
    pub fn is_top_card(&self, card: Card) -> bool {
        self.tops.is_top_card(card)
    }

    /// Borrow a validator over the current table.
    #[must_use]
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.piles, &self.tops, &self.config)
    }

    /// Capture the full table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            seed: self.seed,
            move_count: self.move_count,
            piles: self.piles.piles().cloned().collect(),
        }
    }

    /// Rebuild a game from a snapshot, re-checking every invariant.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, EngineError> {
        let piles = PileManager::from_piles(snapshot.piles)?;
        let mut game = Self::from_table(snapshot.config, piles)?;
        game.seed = snapshot.seed;
        game.move_count = snapshot.move_count;
        Ok(game)
    }

    fn snapshot_pile(&self, id: PileId) -> Pile {
        self.piles.pile(id).cloned().unwrap_or_else(|| Pile::new(id))
    }

    /// Check the table invariants.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        self.piles.check_invariants(&self.config.foundation_suits)
    }
}

impl RulesEngine for FreecellGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn piles(&self) -> &PileManager {
        &self.piles
    }

    fn is_valid_move(&self, card: Card, target: impl Into<Target>) -> bool {
        self.validator().is_valid_move(card, target.into())
    }

    fn place_card(
        &mut self,
        card: Card,
        target: impl Into<Target>,
    ) -> Result<Placement, EngineError> {
        let target = target.into();
        let plan = match self.validator().plan(card, target) {
            Ok(plan) => plan,
            Err(err) => {
                log::warn!("rejected {} -> {:?}: {}", card, target, err);
                return Err(err);
            }
        };

        let cards = self.piles.move_tail(plan.from, plan.index, plan.to)?;
        debug_assert_eq!(cards.len(), plan.len);
        self.tops.refresh(&self.piles);
        self.won = rules::is_won(&self.piles);
        self.move_count += 1;

        debug_assert!(self.check_invariants().is_ok(), "placement broke table invariants");
        log::debug!("placed {} card(s) from {} to {}", plan.len, plan.from, plan.to);
        if self.won {
            log::info!("all foundations complete after {} moves", self.move_count);
        }

        Ok(Placement {
            from: plan.from,
            to: plan.to,
            cards,
            source: self.snapshot_pile(plan.from),
            destination: self.snapshot_pile(plan.to),
            won: self.won,
        })
    }

    fn top_card(&self, pile: PileId) -> Option<Card> {
        self.tops.top_card(pile)
    }

    fn is_won(&self) -> bool {
        self.won
    }
}
