/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Card`](crate::Card).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    Empty,
    MoreThanOneChar,
    InvalidGlyph(char),
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::Empty => write!(f, "Expected a card glyph, got an empty string"),
            CardFromStrErr::MoreThanOneChar => {
                write!(f, "A card is written as exactly one glyph")
            }
            CardFromStrErr::InvalidGlyph(glyph) => write!(
                f,
                "'{}' is not a card glyph, expected one of 2-9, 0, J, Q, K, A",
                glyph
            ),
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Deck`](crate::Deck).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckFromStrErr {
    TooManyCards { num_cards: usize },
    InvalidCard { card_idx: usize, err: CardFromStrErr },
}

impl std::error::Error for DeckFromStrErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckFromStrErr::InvalidCard { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeckFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckFromStrErr::TooManyCards { num_cards } => write!(
                f,
                "A deck holds at most {} cards, but {} were given",
                crate::CAPACITY,
                num_cards
            ),
            DeckFromStrErr::InvalidCard { card_idx, .. } => {
                write!(f, "Could not parse card number {} from the top", card_idx + 1)
            }
        }
    }
}
