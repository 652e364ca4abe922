use std::cmp::Ordering;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::{draw_next, resolve, Card, Deck, WarOutcome, FACES};

/// The piles owned by one player for the whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerPiles {
    /// The pile the player draws from.
    pub play: Deck,
    /// Cards won by the player, shuffled into `play` once it runs out.
    pub discard: Deck,
}

impl PlayerPiles {
    pub fn new(play: Deck, discard: Deck) -> Self {
        Self { play, discard }
    }

    pub fn num_cards(&self) -> usize {
        self.play.len() + self.discard.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    /// Neither player could draw. Unreachable from a dealt game.
    Tie,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::WonByPlayer { player_idx } => write!(f, "player {} wins", player_idx + 1),
            GameResult::Tie => write!(f, "tie"),
        }
    }
}

/// Where a [`Game`] currently is between rounds.
///
/// A war is escalated and resolved within a single round, see
/// [`RoundOutcome::War`] for how far it got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished(GameResult),
}

/// Summarizes what happened in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The higher card took both cards.
    Won { player_idx: usize, cards: [Card; 2] },
    /// The cards tied and a war decided where they went.
    War {
        cards: [Card; 2],
        /// How many spoils each player managed to commit.
        committed: [usize; 2],
        outcome: WarOutcome,
    },
    /// A player could not draw, so no round was played.
    Finished(GameResult),
}

/// A snapshot of all piles after a round, in output order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub play: [Deck; 2],
    pub discard: [Deck; 2],
}

/// Formats as the four rendered piles, comma-separated: both play piles,
/// then both discard piles.
impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.play[0], self.play[1], self.discard[0], self.discard[1]
        )
    }
}

/// A two-player game of War.
#[derive(Clone, Debug)]
pub struct Game {
    warcards: usize,
    players: [PlayerPiles; 2],
    // Only non-empty while a war is being escalated
    spoils: [Deck; 2],
    phase: Phase,
    rounds_played: usize,
}

impl Game {
    /// Shuffles a full deck and deals the bottom half to player 1 and the top
    /// half to player 2.
    pub fn new<R: RngCore + ?Sized>(rng: &mut R, warcards: usize) -> Self {
        let mut deck = Deck::new_full();
        deck.shuffle(rng);
        let top_half = deck.split_off(deck.len() / 2);
        Self::from_piles(
            warcards,
            [
                PlayerPiles::new(deck, Deck::new()),
                PlayerPiles::new(top_half, Deck::new()),
            ],
        )
    }

    /// Starts a game from arbitrary piles.
    pub fn from_piles(warcards: usize, players: [PlayerPiles; 2]) -> Self {
        Self {
            warcards,
            players,
            spoils: [Deck::new(), Deck::new()],
            phase: Phase::Playing,
            rounds_played: 0,
        }
    }

    pub fn warcards(&self) -> usize {
        self.warcards
    }

    pub fn players(&self) -> &[PlayerPiles; 2] {
        &self.players
    }

    pub fn spoils(&self) -> &[Deck; 2] {
        &self.spoils
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed rounds.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn record(&self) -> RoundRecord {
        RoundRecord {
            play: [self.players[0].play.clone(), self.players[1].play.clone()],
            discard: [
                self.players[0].discard.clone(),
                self.players[1].discard.clone(),
            ],
        }
    }

    /// How many cards of each face are in the game, over all piles.
    pub fn face_counts(&self) -> [usize; FACES] {
        let mut counts = [0; FACES];
        let decks = self
            .players
            .iter()
            .flat_map(|p| [&p.play, &p.discard])
            .chain(&self.spoils);
        for deck in decks {
            for (count, n) in counts.iter_mut().zip(deck.face_counts()) {
                *count += n;
            }
        }
        counts
    }

    /// Plays one round.
    ///
    /// Once a player cannot draw, the game is finished and every further
    /// call returns the same [`RoundOutcome::Finished`].
    pub fn play_round<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> RoundOutcome {
        if let Phase::Finished(result) = self.phase {
            return RoundOutcome::Finished(result);
        }

        let Some(card_1) = self.draw(rng, 0) else {
            let result = if self.players[1].num_cards() > 0 {
                GameResult::WonByPlayer { player_idx: 1 }
            } else {
                GameResult::Tie
            };
            return self.finish(result);
        };
        let Some(card_2) = self.draw(rng, 1) else {
            // Keep the card in the game
            self.players[0].play.push(card_1);
            return self.finish(GameResult::WonByPlayer { player_idx: 0 });
        };
        let cards = [card_1, card_2];

        let outcome = match card_1.cmp(&card_2) {
            Ordering::Greater => self.take_cards(0, cards),
            Ordering::Less => self.take_cards(1, cards),
            Ordering::Equal => self.war(rng, cards),
        };
        self.rounds_played += 1;
        outcome
    }

    fn draw<R: RngCore + ?Sized>(&mut self, rng: &mut R, player_idx: usize) -> Option<Card> {
        let player = &mut self.players[player_idx];
        draw_next(rng, &mut player.play, Some(&mut player.discard))
    }

    fn finish(&mut self, result: GameResult) -> RoundOutcome {
        self.phase = Phase::Finished(result);
        RoundOutcome::Finished(result)
    }

    fn take_cards(&mut self, player_idx: usize, cards: [Card; 2]) -> RoundOutcome {
        let discard = &mut self.players[player_idx].discard;
        discard.push(cards[0]);
        discard.push(cards[1]);
        RoundOutcome::Won { player_idx, cards }
    }

    fn war<R: RngCore + ?Sized>(&mut self, rng: &mut R, cards: [Card; 2]) -> RoundOutcome {
        // Player 1 commits all their spoils before player 2 draws any
        let mut committed = [0; 2];
        for player_idx in 0..2 {
            while committed[player_idx] < self.warcards {
                let Some(card) = self.draw(rng, player_idx) else {
                    // Out of cards: the war is fought with what was committed
                    break;
                };
                self.spoils[player_idx].push(card);
                committed[player_idx] += 1;
            }
        }

        let [spoils_1, spoils_2] = &mut self.spoils;
        let outcome = resolve(spoils_1, spoils_2);

        let [player_1, player_2] = &mut self.players;
        match outcome.winner_idx() {
            Some(winner_idx) => {
                let discard = if winner_idx == 0 {
                    &mut player_1.discard
                } else {
                    &mut player_2.discard
                };
                discard.push(cards[0]);
                discard.push(cards[1]);
                drain_into(rng, spoils_1, discard);
                drain_into(rng, spoils_2, discard);
            }
            None => {
                player_1.discard.push(cards[0]);
                drain_into(rng, spoils_1, &mut player_1.discard);
                player_2.discard.push(cards[1]);
                drain_into(rng, spoils_2, &mut player_2.discard);
            }
        }

        RoundOutcome::War {
            cards,
            committed,
            outcome,
        }
    }
}

/// Moves every card of `spoils` onto `discard`, top card first.
fn drain_into<R: RngCore + ?Sized>(rng: &mut R, spoils: &mut Deck, discard: &mut Deck) {
    while let Some(card) = draw_next(rng, spoils, None) {
        discard.push(card);
    }
}
