use std::io::Write;

use tracing::{debug, info, trace, warn};
use war::{Game, GameResult, RoundOutcome};

use crate::recording::Recorder;
use crate::{rng_for_seed_sequence, Config};

/// What happened over a whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// `None` if the round limit was hit first.
    pub result: Option<GameResult>,
    pub rounds: usize,
    pub wars: usize,
}

/// Plays one game, writing the piles after every round to `out`.
///
/// Returns an error only when writing fails.
pub fn play_game<W: Write>(
    config: &Config,
    out: &mut W,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameSummary> {
    let mut rng = rng_for_seed_sequence(config.seed_sequence);
    let mut game = Game::new(&mut rng, config.warcards);
    let mut wars = 0;

    let result = loop {
        if config.max_rounds.is_some_and(|max| game.rounds_played() >= max) {
            warn!(rounds = game.rounds_played(), "Round limit reached without a winner");
            break None;
        }
        let round_idx = game.rounds_played();
        match game.play_round(&mut rng) {
            RoundOutcome::Won { player_idx, cards } => {
                trace!(
                    round_idx,
                    card_1 = %cards[0],
                    card_2 = %cards[1],
                    winner = player_idx + 1
                );
            }
            RoundOutcome::War {
                cards,
                committed,
                outcome,
            } => {
                wars += 1;
                debug!(
                    round_idx,
                    tied = %cards[0],
                    committed_1 = committed[0],
                    committed_2 = committed[1],
                    ?outcome,
                    "War"
                );
            }
            RoundOutcome::Finished(result) => {
                break Some(result);
            }
        }

        let record = game.record();
        writeln!(out, "{}", record)?;
        if let Some(rec) = recorder {
            rec.store_round(record);
        }
    };

    let summary = GameSummary {
        result,
        rounds: game.rounds_played(),
        wars,
    };
    if let Some(result) = result {
        info!(rounds = summary.rounds, wars, "Game over, {}", result);
    }

    if let Some(rec) = recorder {
        let path = rec.write_game_recording(config, &summary)?;
        debug!(path = %path.display(), "Wrote game recording");
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &Config) -> (GameSummary, String) {
        let mut out = Vec::new();
        let summary = play_game(config, &mut out, &mut None).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    fn config(warcards: usize, seed_sequence: i64) -> Config {
        Config {
            warcards,
            seed_sequence,
            max_rounds: None,
        }
    }

    #[test]
    fn default_game_finishes() {
        let (summary, output) = run(&config(4, 0));
        assert!(matches!(
            summary.result,
            Some(GameResult::WonByPlayer { .. })
        ));
        assert!(summary.rounds > 0);
        assert_eq!(output.lines().count(), summary.rounds);
    }

    #[test]
    fn default_game_matches_reference_output() {
        let (summary, output) = run(&config(4, 0));
        assert_eq!(output.lines().count(), 406);
        assert_eq!(summary.rounds, 406);
        assert_eq!(
            output.lines().next(),
            Some("Q863K968958372KA4Q0K6Q72J,J8JA000A555942KA363QJ4479,27,")
        );
    }

    #[test]
    fn negative_seed_sequence_plays_a_game() {
        let (summary, output) = run(&config(4, -1));
        assert!(summary.result.is_some());
        assert_eq!(output.lines().count(), summary.rounds);
        assert_ne!(output, run(&config(4, 0)).1);
        assert_eq!(output, run(&config(4, -1)).1);
    }

    #[test]
    fn output_is_reproducible() {
        for seed_sequence in [0, 1, 42] {
            let (_, first) = run(&config(4, seed_sequence));
            let (_, second) = run(&config(4, seed_sequence));
            assert_eq!(first, second);
        }
        assert_ne!(run(&config(4, 0)).1, run(&config(4, 1)).1);
        assert_ne!(run(&config(4, 0)).1, run(&config(2, 0)).1);
    }

    #[test]
    fn every_line_shows_all_cards() {
        let (_, output) = run(&config(3, 7));
        for line in output.lines() {
            let piles: Vec<&str> = line.split(',').collect();
            assert_eq!(piles.len(), 4);
            let num_cards: usize = piles.iter().map(|p| p.chars().count()).sum();
            assert_eq!(num_cards, war::CAPACITY);
        }
    }

    #[test]
    fn round_limit_stops_early() {
        let config = Config {
            max_rounds: Some(3),
            ..config(4, 0)
        };
        let (summary, output) = run(&config);
        assert_eq!(summary.result, None);
        assert_eq!(summary.rounds, 3);
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn first_round_uses_dealt_top_cards() {
        let mut rng = rng_for_seed_sequence(0);
        let game = Game::new(&mut rng, 4);
        let top_1 = game.players()[0].play.top().unwrap();
        let top_2 = game.players()[1].play.top().unwrap();

        let (_, output) = run(&config(4, 0));
        let first_line = output.lines().next().unwrap();
        let piles: Vec<&str> = first_line.split(',').collect();
        if top_1 != top_2 {
            let winner_discard = if top_1 > top_2 { piles[2] } else { piles[3] };
            let loser_discard = if top_1 > top_2 { piles[3] } else { piles[2] };
            assert_eq!(winner_discard, format!("{}{}", top_2, top_1));
            assert!(loser_discard.is_empty());
        }
    }
}
