//! Win detection.

use crate::core::config::PileKind;
use crate::zones::PileManager;

/// Cards in a complete foundation.
pub const FOUNDATION_SIZE: usize = 13;

/// True iff every foundation holds all 13 cards of its suit.
#[must_use]
pub fn is_won(piles: &PileManager) -> bool {
    piles
        .piles_of(PileKind::Foundation)
        .all(|p| p.len() == FOUNDATION_SIZE)
}
