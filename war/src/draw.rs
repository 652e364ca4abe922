use rand::RngCore;

use crate::{Card, Deck};

/// Draws the next card for a player.
///
/// Takes the top of the `play` pile. If that is empty and a non-empty
/// `discard` pile is given, the discard pile is shuffled and becomes the new
/// play pile first. Returns `None` when no card is available, which is how a
/// player runs out, not an error.
///
/// Passing `None` for `discard` only ever takes from `play`, which is how
/// spoils piles are drained.
pub fn draw_next<R: RngCore + ?Sized>(
    rng: &mut R,
    play: &mut Deck,
    discard: Option<&mut Deck>,
) -> Option<Card> {
    if let Some(card) = play.pop() {
        return Some(card);
    }

    match discard {
        Some(discard) if !discard.is_empty() => {
            discard.shuffle(rng);
            let (all, rest) = discard.split(discard.len());
            *play = all;
            *discard = rest;
            play.pop()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::deck;

    quickcheck! {
        fn recycling_keeps_cards(play: Deck, discard: Deck, seed: u64) -> bool {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut counts_before = play.face_counts();
            for (count, extra) in counts_before.iter_mut().zip(discard.face_counts()) {
                *count += extra;
            }
            let (mut play, mut discard) = (play, discard);
            let mut counts_after = [0; crate::FACES];
            while let Some(card) = draw_next(&mut rng, &mut play, Some(&mut discard)) {
                counts_after[usize::from(card.face())] += 1;
            }
            play.is_empty() && discard.is_empty() && counts_before == counts_after
        }
    }

    #[test]
    fn takes_from_play_pile_first() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut play = deck!("K2");
        let mut discard = deck!("AAA");
        assert_eq!(draw_next(&mut rng, &mut play, Some(&mut discard)), Some(Card::King));
        assert_eq!(play, deck!("2"));
        assert_eq!(discard, deck!("AAA"));
    }

    #[test]
    fn recycles_discard_pile() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut play = Deck::new();
        let mut discard = deck!("777");
        assert_eq!(draw_next(&mut rng, &mut play, Some(&mut discard)), Some(Card::Seven));
        assert_eq!(play, deck!("77"));
        assert!(discard.is_empty());
    }

    #[test]
    fn exhausted_without_cards() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut play = Deck::new();
        let mut discard = Deck::new();
        assert_eq!(draw_next(&mut rng, &mut play, Some(&mut discard)), None);
    }

    #[test]
    fn without_discard_pile_only_drains_play() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut spoils = deck!("J3");
        assert_eq!(draw_next(&mut rng, &mut spoils, None), Some(Card::Jack));
        assert_eq!(draw_next(&mut rng, &mut spoils, None), Some(Card::Three));
        assert_eq!(draw_next(&mut rng, &mut spoils, None), None);
    }
}
