use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use war::{GameResult, RoundRecord};

use crate::{Config, GameSummary};

/// Collects the rounds of a game and writes them out as JSON.
pub struct Recorder {
    directory: PathBuf,
    rounds: Vec<RoundRecord>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            directory,
            rounds: Vec::new(),
        })
    }

    pub fn store_round(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    /// Writes all stored rounds to a file named after the game's settings,
    /// and returns its path.
    pub fn write_game_recording(
        &mut self,
        config: &Config,
        summary: &GameSummary,
    ) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!(
            "game_{:06}_{}.json",
            config.seed_sequence, config.warcards
        ));
        let recording = GameRecording {
            warcards: config.warcards,
            seed_sequence: config.seed_sequence,
            result: summary.result,
            rounds: std::mem::take(&mut self.rounds),
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writer.flush()?;
        Ok(filepath)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub warcards: usize,
    pub seed_sequence: i64,
    /// `null` when the game was stopped by the round limit.
    pub result: Option<GameResult>,
    pub rounds: Vec<RoundRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play_game;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("referee-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = std::env::temp_dir().join("referee-this-directory-does-not-exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn recording_matches_output() {
        let dir = scratch_dir("recording");
        let config = Config {
            warcards: 4,
            seed_sequence: 12,
            max_rounds: Some(50),
        };
        let mut recorder = Some(Recorder::new(dir.clone()).unwrap());
        let mut out = Vec::new();
        let summary = play_game(&config, &mut out, &mut recorder).unwrap();

        let file = File::open(dir.join("game_000012_4.json")).unwrap();
        let recording: GameRecording = serde_json::from_reader(file).unwrap();
        assert_eq!(recording.warcards, 4);
        assert_eq!(recording.seed_sequence, 12);
        assert_eq!(recording.result, summary.result);
        assert_eq!(recording.rounds.len(), summary.rounds);

        let lines: Vec<String> = recording.rounds.iter().map(|r| r.to_string()).collect();
        assert_eq!(lines.join("\n") + "\n", String::from_utf8(out).unwrap());

        std::fs::remove_dir_all(dir).unwrap();
    }
}
