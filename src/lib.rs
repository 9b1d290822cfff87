//! # freecell-engine
//!
//! A rules engine for FreeCell solitaire.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, input, audio or themes. A presentation
//!    layer calls in with (card, destination) and renders the result.
//!
//! 2. **Explicit Ownership**: The game owns plain pile data. Front ends keep
//!    their own card → sprite mapping and re-sync from `Placement` results.
//!
//! 3. **All-or-Nothing Moves**: A placement is validated again before it
//!    runs; a rejected move leaves every pile untouched.
//!
//! ## Architecture
//!
//! - **Exclusive Mutation**: Moves take `&mut self`, so validate-then-execute
//!   can never interleave.
//!
//! - **Persistent Data Structures**: Piles use `im-rs` so snapshots clone in
//!   O(1).
//!
//! - **Deterministic Deals**: Seeded ChaCha8 shuffles reproduce a deal
//!   exactly.
//!
//! ## Modules
//!
//! - `core`: Pile ids, configuration, moves, errors, RNG
//! - `cards`: Card identity and deck building
//! - `zones`: Piles, card locations and top-card tracking
//! - `rules`: Deal, move validation, win detection, `RulesEngine` trait
//! - `games`: The FreeCell game itself
//!
//! ## Example
//!
//! ```
//! use freecell_engine::{FreecellGameBuilder, PileId, RulesEngine};
//!
//! let mut game = FreecellGameBuilder::new().seed(1).build().unwrap();
//! let card = game.top_card(PileId::tableau(0)).unwrap();
//!
//! assert!(game.is_valid_move(card, PileId::freecell(0)));
//! let placement = game.place_card(card, PileId::freecell(0)).unwrap();
//! assert_eq!(placement.to, PileId::freecell(0));
//! assert!(!game.is_valid_move(card, PileId::freecell(0)));
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameConfig, GameRng, Move, PileId, PileKind, Placement, SequenceLimit, Target,
};

pub use crate::cards::{
    shuffled_deck, standard_deck, Card, Color, ParseCardError, Rank, ShuffledDeck, Suit,
};

pub use crate::zones::{Pile, PileManager, TopCardTracker};

pub use crate::rules::{deal, is_won, RulesEngine, Validator};

pub use crate::games::freecell::{FreecellGame, FreecellGameBuilder, Snapshot};
