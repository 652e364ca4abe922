use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CardFromStrErr;

/// Number of distinct faces in a standard deck.
pub const FACES: usize = 13;
/// Number of suits in a standard deck. Suits are never tracked.
pub const SUITS: usize = 4;

/// A playing card in War, where only the face value matters.
///
/// Cards are ordered by face, from [`Card::Two`] (face 0) up to
/// [`Card::Ace`] (face 12).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "0")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Card {
    /// All faces, lowest first.
    pub const ALL: [Card; FACES] = [
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Jack,
        Card::Queen,
        Card::King,
        Card::Ace,
    ];

    /// The card with the given face value, if it is below [`FACES`].
    pub fn from_face(face: u8) -> Option<Card> {
        Card::ALL.get(usize::from(face)).copied()
    }

    pub fn face(self) -> u8 {
        self as u8
    }

    /// The single character used when rendering decks.
    ///
    /// Note that ten is rendered as `0`.
    pub fn glyph(self) -> char {
        match self {
            Card::Two => '2',
            Card::Three => '3',
            Card::Four => '4',
            Card::Five => '5',
            Card::Six => '6',
            Card::Seven => '7',
            Card::Eight => '8',
            Card::Nine => '9',
            Card::Ten => '0',
            Card::Jack => 'J',
            Card::Queen => 'Q',
            Card::King => 'K',
            Card::Ace => 'A',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Card> {
        let card = match glyph {
            '2' => Card::Two,
            '3' => Card::Three,
            '4' => Card::Four,
            '5' => Card::Five,
            '6' => Card::Six,
            '7' => Card::Seven,
            '8' => Card::Eight,
            '9' => Card::Nine,
            '0' => Card::Ten,
            'J' => Card::Jack,
            'Q' => Card::Queen,
            'K' => Card::King,
            'A' => Card::Ace,
            _ => return None,
        };
        Some(card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let glyph = chars.next().ok_or(CardFromStrErr::Empty)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::MoreThanOneChar);
        }
        Card::from_glyph(glyph).ok_or(CardFromStrErr::InvalidGlyph(glyph))
    }
}
