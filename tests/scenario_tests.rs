//! Gameplay scenario tests.
//!
//! These tests drive the engine through its public surface the way a
//! presentation layer would: build a table, ask about drops, place cards.

use freecell_engine::cards::{standard_deck, Card, Suit};
use freecell_engine::core::{EngineError, GameConfig, PileId, PileKind, SequenceLimit};
use freecell_engine::games::freecell::{FreecellGame, FreecellGameBuilder};
use freecell_engine::rules::{RulesEngine, DEAL_PATTERN};
use freecell_engine::zones::{Pile, PileManager};

fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

/// Build a game from explicit piles; every unlisted card goes on tableau 7.
fn game_with(config: GameConfig, explicit: &[(PileId, &[&str])]) -> FreecellGame {
    let mut piles = Vec::new();
    let mut used = Vec::new();
    for (id, tokens) in explicit {
        let cards: Vec<Card> = tokens.iter().map(|t| card(t)).collect();
        used.extend(cards.iter().copied());
        piles.push(Pile::with_cards(*id, cards));
    }
    let rest: Vec<Card> = standard_deck().into_iter().filter(|c| !used.contains(c)).collect();
    piles.push(Pile::with_cards(PileId::tableau(7), rest));

    let table = PileManager::from_piles(piles).expect("distinct cards");
    FreecellGame::from_table(config, table).expect("consistent table")
}

// =============================================================================
// Deal
// =============================================================================

/// Test the 7,7,7,7,6,6,6,6 layout and that the deal uses the whole deck.
#[test]
fn test_deal_layout() {
    let game = FreecellGameBuilder::new().seed(2024).build().unwrap();

    for (i, &expected) in DEAL_PATTERN.iter().enumerate() {
        assert_eq!(game.piles().pile_size(PileId::tableau(i as u8)), expected);
    }
    for kind in [PileKind::Foundation, PileKind::Freecell] {
        assert_eq!(game.piles().empty_count(kind), 4);
    }

    let mut dealt: Vec<Card> = game
        .piles()
        .piles_of(PileKind::Tableau)
        .flat_map(|p| p.iter().collect::<Vec<_>>())
        .collect();
    dealt.sort();
    let mut deck = standard_deck();
    deck.sort();
    assert_eq!(dealt, deck);
}

/// Test that every dealt pile exposes exactly its tail card.
#[test]
fn test_deal_top_cards() {
    let game = FreecellGameBuilder::new().seed(8).build().unwrap();

    for pile in game.piles().piles() {
        for (i, c) in pile.iter().enumerate() {
            assert_eq!(game.is_top_card(c), i + 1 == pile.len(), "{} in {}", c, pile.id);
        }
    }
}

/// Test that a short deck is refused instead of dealing partial piles.
#[test]
fn test_short_deck_refused() {
    let deck = standard_deck();
    let result = FreecellGameBuilder::new().build_with_deck(&deck[..50]);

    assert_eq!(result.unwrap_err(), EngineError::DeckSize { expected: 52, found: 50 });
}

// =============================================================================
// Validator scenarios
// =============================================================================

/// Test that an empty tableau accepts only a King.
#[test]
fn test_empty_tableau_accepts_king_only() {
    let game = game_with(
        GameConfig::default(),
        &[(PileId::tableau(0), &["SK"]), (PileId::tableau(1), &["S5"])],
    );

    assert!(game.is_valid_move(card("SK"), PileId::tableau(2)));
    assert!(!game.is_valid_move(card("S5"), PileId::tableau(2)));
}

/// Test placing the Ace of Hearts, then refusing the Three.
#[test]
fn test_hearts_foundation() {
    let mut game = game_with(
        GameConfig::default(),
        &[(PileId::tableau(0), &["HA"]), (PileId::tableau(1), &["H3"])],
    );
    let hearts = game.config().foundation_for(Suit::Hearts).unwrap();

    let placement = game.place_card(card("HA"), hearts).unwrap();
    assert_eq!(placement.destination.top(), Some(card("HA")));

    assert!(!game.is_valid_move(card("H3"), hearts));
}

/// Test black-on-red and red-on-red against a red Seven.
#[test]
fn test_alternating_colors() {
    let game = game_with(
        GameConfig::default(),
        &[
            (PileId::tableau(0), &["D7"]),
            (PileId::tableau(1), &["S6"]),
            (PileId::tableau(2), &["H6"]),
        ],
    );

    assert!(game.is_valid_move(card("S6"), PileId::tableau(0)));
    assert!(!game.is_valid_move(card("H6"), PileId::tableau(0)));
}

/// Test that an occupied freecell refuses every card on the table.
#[test]
fn test_occupied_freecell_refuses_all() {
    let game = game_with(GameConfig::default(), &[(PileId::freecell(0), &["C9"])]);

    for c in standard_deck() {
        assert!(!game.is_valid_move(c, PileId::freecell(0)), "{} accepted", c);
    }
}

// =============================================================================
// Executor
// =============================================================================

/// Test a full sequence move and the tops it leaves behind.
#[test]
fn test_sequence_move() {
    let mut game = game_with(
        GameConfig::default(),
        &[
            (PileId::tableau(0), &["C2", "SQ", "HJ", "C10", "D9"]),
            (PileId::tableau(1), &["DK"]),
        ],
    );

    let placement = game.place_card(card("SQ"), PileId::tableau(1)).unwrap();

    assert_eq!(placement.cards.len(), 4);
    assert_eq!(game.top_card(PileId::tableau(0)), Some(card("C2")));
    assert_eq!(game.top_card(PileId::tableau(1)), Some(card("D9")));
    assert!(!game.is_top_card(card("SQ")));
    assert!(game.check_invariants().is_ok());
}

/// Test moving a King-based run onto an empty tableau.
#[test]
fn test_king_run_onto_empty_tableau() {
    let mut game = game_with(
        GameConfig::default(),
        &[(PileId::tableau(0), &["C2", "SK", "HQ", "CJ"])],
    );

    // A Queen-based run cannot open an empty column
    assert!(!game.is_valid_move(card("HQ"), PileId::tableau(2)));

    let placement = game.place_card(card("SK"), PileId::tableau(2)).unwrap();

    assert!(placement.is_sequence());
    assert_eq!(placement.cards.as_slice(), &[card("SK"), card("HQ"), card("CJ")]);
    let moved: Vec<Card> = game.pile(PileId::tableau(2)).unwrap().iter().collect();
    assert_eq!(moved, vec![card("SK"), card("HQ"), card("CJ")]);
    assert_eq!(game.top_card(PileId::tableau(0)), Some(card("C2")));
    assert_eq!(game.top_card(PileId::tableau(2)), Some(card("CJ")));
    assert!(game.check_invariants().is_ok());
}

/// Test that a run stuck under a broken sequence cannot move.
#[test]
fn test_broken_run_not_movable() {
    let game = game_with(
        GameConfig::default(),
        &[
            (PileId::tableau(0), &["SQ", "HJ", "H10", "C9"]),
            (PileId::tableau(1), &["DK"]),
        ],
    );

    assert!(!game.is_valid_move(card("SQ"), PileId::tableau(1)));
    assert!(!game.movable_cards().contains(&card("HJ")));
    assert!(game.movable_cards().contains(&card("H10")));
}

/// Test that the capacity limit blocks long runs when cells are full.
#[test]
fn test_sequence_limit() {
    let explicit: &[(PileId, &[&str])] = &[
        (PileId::tableau(0), &["SQ", "HJ", "C10"]),
        (PileId::tableau(1), &["DK"]),
        (PileId::tableau(2), &["C2"]),
        (PileId::tableau(3), &["C3"]),
        (PileId::tableau(4), &["C4"]),
        (PileId::tableau(5), &["C5"]),
        (PileId::tableau(6), &["C6"]),
        (PileId::freecell(0), &["H2"]),
        (PileId::freecell(1), &["H3"]),
        (PileId::freecell(2), &["H4"]),
    ];
    let mut limited = game_with(
        GameConfig::new().with_sequence_limit(SequenceLimit::FreeCapacity),
        explicit,
    );
    let unlimited = game_with(GameConfig::default(), explicit);

    // (1 free cell + 1) * 2^0 = 2 cards
    assert!(!limited.is_valid_move(card("SQ"), PileId::tableau(1)));
    assert!(unlimited.is_valid_move(card("SQ"), PileId::tableau(1)));

    // tableau 6 empties, cells fill: (0 + 1) * 2^1 = 2 cards
    limited.place_card(card("C6"), PileId::freecell(3)).unwrap();
    assert!(!limited.is_valid_move(card("SQ"), PileId::tableau(1)));

    assert!(limited.is_valid_move(card("HJ"), PileId::tableau(1)));
}

/// Test that illegal placements return an error and leave the table alone.
#[test]
fn test_illegal_place_is_atomic() {
    let mut game = FreecellGameBuilder::new().seed(31).build().unwrap();
    let before = game.snapshot();

    let buried = game.pile(PileId::tableau(0)).unwrap().get(0).unwrap();
    let result = game.place_card(buried, PileId::freecell(0));

    assert!(matches!(result, Err(EngineError::IllegalMove { .. })));
    assert_eq!(game.snapshot(), before);
}

// =============================================================================
// Win detection
// =============================================================================

/// Test three full foundations plus one short is not a win.
#[test]
fn test_three_and_a_half_foundations() {
    let config = GameConfig::default();
    let mut explicit: Vec<(PileId, Vec<String>)> = Vec::new();
    for (i, &suit) in config.foundation_suits.iter().enumerate() {
        let tokens = standard_deck()
            .into_iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.to_string())
            .collect();
        explicit.push((PileId::foundation(i as u8), tokens));
    }
    // Spades foundation stops at the Queen
    explicit[3].1.pop();

    let piles: Vec<Pile> = explicit
        .iter()
        .map(|(id, tokens)| Pile::with_cards(*id, tokens.iter().map(|t| card(t))))
        .chain([Pile::with_cards(PileId::tableau(0), [card("SK")])])
        .collect();
    let table = PileManager::from_piles(piles).unwrap();
    let mut game = FreecellGame::from_table(config, table).unwrap();

    assert!(!game.is_won());

    game.place_card(card("SK"), PileId::foundation(3)).unwrap();
    assert!(game.is_won());
}

/// Test a fresh deal is never won.
#[test]
fn test_fresh_deal_not_won() {
    for seed in 0..20 {
        let game = FreecellGameBuilder::new().seed(seed).build().unwrap();
        assert!(!game.is_won());
    }
}
