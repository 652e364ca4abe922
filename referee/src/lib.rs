mod game;
mod recording;
pub use game::*;
pub use recording::*;

use rand_pcg::Pcg32;

/// The initial PCG32 state shared by every seed sequence.
pub const BASE_STATE: u64 = 0x853c49e6748fea9b;
/// The PCG32 stream selected by seed sequence 0.
pub const BASE_STREAM: u64 = 0xda3e39cb94b95bdb;

pub struct Config {
    /// How many cards each player commits to a war.
    pub warcards: usize,
    /// Selects the random stream, and with it the whole game.
    pub seed_sequence: i64,
    /// Stop after this many rounds, even without a winner.
    pub max_rounds: Option<usize>,
}

/// The generator for one seed sequence. Equal sequences give equal games.
///
/// Negative sequences wrap around, so `-1` selects stream `BASE_STREAM - 1`.
pub fn rng_for_seed_sequence(seed_sequence: i64) -> Pcg32 {
    Pcg32::new(BASE_STATE, BASE_STREAM.wrapping_add(seed_sequence as u64))
}
