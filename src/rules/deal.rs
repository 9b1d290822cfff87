//! Initial layout.
//!
//! All 52 cards go to the tableau, face up, consumed from the front of the
//! deck: tableau 0-3 take 7 cards each, tableau 4-7 take 6 each. Nothing is
//! left in stock.

use crate::cards::{Card, DECK_SIZE};
use crate::core::config::{PileId, TABLEAU_COUNT};
use crate::core::error::EngineError;
use crate::zones::PileManager;

/// Cards dealt to each tableau pile, in pile order.
pub const DEAL_PATTERN: [usize; TABLEAU_COUNT] = [7, 7, 7, 7, 6, 6, 6, 6];

/// Deal a full deck onto an empty table.
///
/// Fails without producing a layout if the deck does not hold exactly 52
/// cards or repeats a card.
///
/// ```
/// use freecell_engine::cards::shuffled_deck;
/// use freecell_engine::core::PileId;
/// use freecell_engine::rules::deal;
///
/// let deck = shuffled_deck(Some(3));
/// let table = deal(&deck.cards).unwrap();
///
/// assert_eq!(table.pile_size(PileId::tableau(0)), 7);
/// assert_eq!(table.pile_size(PileId::tableau(7)), 6);
/// assert_eq!(table.top_card(PileId::tableau(0)), Some(deck.cards[6]));
/// ```
pub fn deal(deck: &[Card]) -> Result<PileManager, EngineError> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::DeckSize {
            expected: DECK_SIZE,
            found: deck.len(),
        });
    }

    let mut table = PileManager::new();
    let mut cards = deck.iter().copied();

    for (index, &count) in DEAL_PATTERN.iter().enumerate() {
        let pile = PileId::tableau(index as u8);
        for card in cards.by_ref().take(count) {
            table.add(card, pile)?;
        }
    }

    log::debug!("dealt {} cards onto {} tableau piles", table.total_cards(), TABLEAU_COUNT);
    Ok(table)
}
