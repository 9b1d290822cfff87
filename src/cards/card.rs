//! Card identity: suit, rank and derived value/color.
//!
//! A `Card` is created once, when the deck is built, and never changes.
//! Only its pile membership does. Cards cross the engine boundary as short
//! tokens (`"H7"`, `"SA"`, `"C10"`), parsed exactly once into a `Card`.
//!
//! ```
//! use freecell_engine::cards::{Card, Color, Rank, Suit};
//!
//! let card: Card = "D7".parse().unwrap();
//! assert_eq!(card.suit, Suit::Diamonds);
//! assert_eq!(card.rank, Rank::Seven);
//! assert_eq!(card.value(), 7);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.to_string(), "D7");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Red for Diamonds and Hearts, black for Clubs and Spades.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter token used in card identifiers.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Suit> {
        match letter {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Position of this suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in `1..=13`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Token used in card identifiers (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_token(token: &str) -> Option<Rank> {
        let rank = match token {
            "A" => Rank::Ace,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "T" => Rank::Ten,
            digits => {
                // Reject "+7", "07" and friends that u8::from_str would accept.
                if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                return digits.parse().ok().and_then(Rank::from_value).filter(|r| {
                    !matches!(r, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King)
                });
            }
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A playing card.
///
/// Serializes as its token string, suit letter first (`"SQ"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Numeric rank value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_opposite_color(self, other: Card) -> bool {
        self.color() != other.color()
    }

    /// True if `self` may sit directly on `below` in a tableau run:
    /// opposite color and exactly one rank lower.
    #[must_use]
    pub fn stacks_on(self, below: Card) -> bool {
        self.is_opposite_color(below) && self.value() + 1 == below.value()
    }

    /// Dense index in `0..52`, suit-major.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * 13 + (self.rank.value() as usize - 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Error returned when a card token cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError {
    token: String,
}

impl ParseCardError {
    /// The rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed card token {:?}", self.token)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError { token: s.to_string() };

        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_letter).ok_or_else(err)?;
        let rank = Rank::from_token(chars.as_str()).ok_or_else(err)?;

        Ok(Card::new(suit, rank))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(card("SA"), Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(card("H7"), Card::new(Suit::Hearts, Rank::Seven));
        assert_eq!(card("DK"), Card::new(Suit::Diamonds, Rank::King));
        assert_eq!(card("C10"), Card::new(Suit::Clubs, Rank::Ten));
        assert_eq!(card("CT"), Card::new(Suit::Clubs, Rank::Ten));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "S", "X7", "s7", "S1", "S11", "S0", "S07", "S+7", "7S", "SAA", "S13"] {
            let err = bad.parse::<Card>().unwrap_err();
            assert_eq!(err.token(), bad);
        }
    }

    #[test]
    fn test_display_roundtrips_all_cards() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let c = Card::new(suit, rank);
                assert_eq!(card(&c.to_string()), c);
            }
        }
    }

    #[test]
    fn test_values_and_colors() {
        assert_eq!(card("HA").value(), 1);
        assert_eq!(card("SK").value(), 13);
        assert_eq!(card("D5").color(), Color::Red);
        assert_eq!(card("C5").color(), Color::Black);
        assert!(card("D5").is_opposite_color(card("S9")));
        assert!(!card("D5").is_opposite_color(card("H9")));
    }

    #[test]
    fn test_stacks_on() {
        assert!(card("S6").stacks_on(card("D7")));
        assert!(!card("H6").stacks_on(card("D7")));
        assert!(!card("S5").stacks_on(card("D7")));
        assert!(!card("S8").stacks_on(card("D7")));
    }

    #[test]
    fn test_rank_from_value() {
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(13), Some(Rank::King));
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_index_is_dense() {
        let mut seen = [false; 52];
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let i = Card::new(suit, rank).index();
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_serde_uses_token() {
        let json = serde_json::to_string(&card("H10")).unwrap();
        assert_eq!(json, "\"H10\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card("H10"));

        assert!(serde_json::from_str::<Card>("\"Z9\"").is_err());
    }
}
