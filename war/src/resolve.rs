use serde::{Deserialize, Serialize};

use crate::Deck;

/// Who takes the spoils of a war, and by how many unconsumed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "winner", rename_all = "snake_case")]
pub enum WarOutcome {
    First { margin: usize },
    Second { margin: usize },
    Tie,
}

impl WarOutcome {
    /// Index of the winning side, or `None` on a tie.
    pub fn winner_idx(self) -> Option<usize> {
        match self {
            WarOutcome::First { .. } => Some(0),
            WarOutcome::Second { .. } => Some(1),
            WarOutcome::Tie => None,
        }
    }
}

/// Decides a war between two spoils piles.
///
/// Both decks are sorted with the highest card on top, then compared from
/// the top down. Whichever current card is lower (or both, if equal) is
/// eliminated, until one side has nothing left. The side with cards
/// remaining wins by that many.
///
/// Both decks keep all their cards, only their order changes. Moving the
/// spoils is up to the caller.
pub fn resolve(a: &mut Deck, b: &mut Deck) -> WarOutcome {
    a.sort_descending();
    b.sort_descending();

    let (cards_a, cards_b) = (a.as_slice(), b.as_slice());
    let (mut remaining_a, mut remaining_b) = (cards_a.len(), cards_b.len());
    while remaining_a > 0 && remaining_b > 0 {
        let card_a = cards_a[remaining_a - 1];
        let card_b = cards_b[remaining_b - 1];
        if card_a >= card_b {
            remaining_b -= 1;
        }
        if card_b >= card_a {
            remaining_a -= 1;
        }
    }

    // At most one side has cards left
    if remaining_a > 0 {
        WarOutcome::First {
            margin: remaining_a,
        }
    } else if remaining_b > 0 {
        WarOutcome::Second {
            margin: remaining_b,
        }
    } else {
        WarOutcome::Tie
    }
}
