//! Core engine types: pile ids, configuration, moves, errors, RNG.
//!
//! This module contains the building blocks shared by the pile model, the
//! rules and the game itself.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{Move, Placement, Target};
pub use config::{
    GameConfig, PileId, PileKind, SequenceLimit, DEFAULT_FOUNDATION_SUITS, FOUNDATION_COUNT,
    FREECELL_COUNT, PILE_COUNT, TABLEAU_COUNT,
};
pub use error::EngineError;
pub use rng::GameRng;
