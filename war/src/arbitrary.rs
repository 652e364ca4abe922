use quickcheck::{Arbitrary, Gen};

use crate::{Card, Deck, CAPACITY};

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Card::ALL).unwrap()
    }
}

impl Arbitrary for Deck {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (CAPACITY + 1);
        let mut deck = Deck::new();
        for _ in 0..len {
            deck.push(Card::arbitrary(g));
        }
        deck
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrink by dropping cards from the top
        let deck = self.clone();
        Box::new((0..deck.len()).rev().map(move |len| deck.split(len).0))
    }
}
