//! Game rules: deal, move legality, win detection.
//!
//! - `deal`: Lays a 52-card deck onto the tableau
//! - `Validator`: Decides whether a move is legal and what it would move
//! - `is_won`: Checks the foundations
//! - `RulesEngine`: The surface a presentation layer calls into

pub mod deal;
pub mod engine;
pub mod validator;
pub mod win;

pub use deal::{deal, DEAL_PATTERN};
pub use engine::RulesEngine;
pub use validator::{MovePlan, Validator};
pub use win::{is_won, FOUNDATION_SIZE};
