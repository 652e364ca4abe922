use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BoundedRand, Card, DeckFromStrErr, FACES, SUITS};

/// The most cards a single deck can ever hold.
///
/// Cards are only ever moved between decks, so no deck exceeds a full set.
pub const CAPACITY: usize = SUITS * FACES;

/// An ordered pile of cards with a fixed capacity of [`CAPACITY`].
///
/// The card at index `len() - 1` is the top, i.e. the next one to be drawn.
/// Storage is inline and never reallocated.
#[derive(Clone)]
pub struct Deck {
    len: usize,
    cards: [Card; CAPACITY],
}

impl Deck {
    /// Creates an empty deck.
    pub fn new() -> Self {
        Self {
            len: 0,
            cards: [Card::Two; CAPACITY],
        }
    }

    /// Creates an unshuffled deck containing every card of a standard set.
    ///
    /// The bottom holds the four twos, the top the four aces.
    pub fn new_full() -> Self {
        let mut deck = Self::new();
        for card in Card::ALL {
            for _ in 0..SUITS {
                deck.push(card);
            }
        }
        deck
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// The cards from bottom to top.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards[..self.len]
    }

    /// Iterates from the top card down to the bottom card.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.as_slice().iter().rev().copied()
    }

    pub fn top(&self) -> Option<Card> {
        self.as_slice().last().copied()
    }

    /// Puts a card on top.
    ///
    /// Panics if the deck is full.
    pub fn push(&mut self, card: Card) {
        assert!(
            self.len < CAPACITY,
            "Tried to push onto a deck that already holds {} cards",
            CAPACITY
        );
        self.cards[self.len] = card;
        self.len += 1;
    }

    /// Takes the top card.
    pub fn pop(&mut self) -> Option<Card> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.cards[self.len])
        }
    }

    /// Shuffles the deck in place with Fisher–Yates.
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let mut n = self.len;
        while n > 1 {
            // n <= CAPACITY, so this always fits
            let k = rng.bounded(n as u32) as usize;
            n -= 1;
            self.cards.swap(n, k);
        }
    }

    /// Splits into the bottom `at` cards and the remaining top cards.
    ///
    /// Relative order is kept within both halves. Panics if `at > len()`.
    pub fn split(&self, at: usize) -> (Deck, Deck) {
        assert!(
            at <= self.len,
            "Split index {} is out of range for a deck of {} cards",
            at,
            self.len
        );
        (
            Deck::from_slice(&self.cards[..at]),
            Deck::from_slice(&self.cards[at..self.len]),
        )
    }

    /// Like [`split`](Deck::split), but keeps the bottom `at` cards in `self`
    /// and returns the top part.
    pub fn split_off(&mut self, at: usize) -> Deck {
        let len = self.len;
        assert!(
            at <= len,
            "Split index {} is out of range for a deck of {} cards",
            at,
            len
        );
        let rest = Deck::from_slice(&self.cards[at..len]);
        self.len = at;
        rest
    }

    /// Sorts the deck so that the highest card is on top.
    ///
    /// Popping repeatedly then yields the cards in descending order.
    pub fn sort_descending(&mut self) {
        let len = self.len;
        self.cards[..len].sort_unstable();
    }

    /// How many cards of each face the deck contains, indexed by face.
    pub fn face_counts(&self) -> [usize; FACES] {
        let mut counts = [0; FACES];
        for card in self.as_slice() {
            counts[usize::from(card.face())] += 1;
        }
        counts
    }

    fn from_slice(cards: &[Card]) -> Deck {
        let mut deck = Deck::new();
        deck.cards[..cards.len()].copy_from_slice(cards);
        deck.len = cards.len();
        deck
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Deck {}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Deck").field(&self.to_string()).finish()
    }
}

/// Renders the glyphs of all cards from top to bottom.
impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in self.iter() {
            write!(f, "{}", card.glyph())?;
        }
        Ok(())
    }
}

/// Parses glyphs listed from top to bottom, the inverse of [`Display`](std::fmt::Display).
impl FromStr for Deck {
    type Err = DeckFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let num_cards = s.chars().count();
        if num_cards > CAPACITY {
            return Err(DeckFromStrErr::TooManyCards { num_cards });
        }
        let mut deck = Deck::new();
        for (card_idx, glyph) in s.chars().rev().enumerate() {
            let card = Card::from_glyph(glyph).ok_or(DeckFromStrErr::InvalidCard {
                card_idx: num_cards - 1 - card_idx,
                err: crate::CardFromStrErr::InvalidGlyph(glyph),
            })?;
            deck.push(card);
        }
        Ok(deck)
    }
}

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rendered = String::deserialize(deserializer)?;
        rendered.parse().map_err(serde::de::Error::custom)
    }
}

/// Shorthand for creating decks from their rendered form, top card first.
///
/// This macro is just calling the [`FromStr`] instance of [`Deck`].
/// ```
/// # use war::{deck, Card};
/// let mut d = deck!("A02");
/// assert_eq!(d.pop(), Some(Card::Ace));
/// assert_eq!(d.pop(), Some(Card::Ten));
/// ```
#[macro_export]
macro_rules! deck {
    ($rendered:literal) => {
        <$crate::Deck as std::str::FromStr>::from_str($rendered)
            .expect("Invalid deck given to deck! macro")
    };
}
