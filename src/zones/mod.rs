//! Pile system for card locations.
//!
//! The table is fixed: 8 tableau piles, 4 foundations, 4 freecells.
//!
//! ## Key Types
//!
//! - `PileId`: Pile identifier (from `core::config`)
//! - `Pile`: Ordered cards of one pile, bottom to top
//! - `PileManager`: Card location tracking and movement
//! - `TopCardTracker`: Which card of each pile is interactive

pub mod manager;
pub mod pile;
pub mod tracker;

pub use manager::PileManager;
pub use pile::{Pile, Run};
pub use tracker::TopCardTracker;

// Re-export pile ids from core for convenience
pub use crate::core::config::{PileId, PileKind};
