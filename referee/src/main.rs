use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use referee::{play_game, Config, Recorder};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays a game of War and prints the piles after every round.
#[derive(Parser)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// How many cards each player commits to a war
    #[arg(default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    warcards: u32,

    /// Selects one of many independent, reproducible random streams
    #[arg(default_value_t = 0)]
    seed_sequence: i64,

    /// Stop after this many rounds, even if nobody has won yet
    #[arg(short, long)]
    max_rounds: Option<usize>,

    /// Record the game's rounds as a JSON file into this directory
    #[arg(short, long)]
    record_game_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        warcards: usize::try_from(args.warcards)?,
        seed_sequence: args.seed_sequence,
        max_rounds: args.max_rounds,
    };
    info!(
        warcards = config.warcards,
        seed_sequence = config.seed_sequence,
        "Starting game"
    );

    let mut recorder = if let Some(dir_path) = args.record_game_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    // Stdout only carries the rounds, logs go to stderr
    let mut out = BufWriter::new(std::io::stdout().lock());
    play_game(&config, &mut out, &mut recorder)?;
    out.flush()?;

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
