//! Serializable capture of a whole game.
//!
//! Piles are `im::Vector` backed, so taking a snapshot is cheap. Restoring
//! goes through `FreecellGame::from_snapshot`, which re-runs every table
//! invariant check, so a tampered or truncated snapshot is rejected rather
//! than producing an inconsistent table.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameConfig};
use crate::zones::Pile;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    /// Deal seed, when the engine shuffled the deck.
    pub seed: Option<u64>,
    pub move_count: u32,
    /// Every pile, in slot order.
    pub piles: Vec<Pile>,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`Snapshot::to_bytes`].
    ///
    /// Only checks the encoding; table invariants are checked on restore.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
