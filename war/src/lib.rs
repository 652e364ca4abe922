pub use cards::*;
pub use deck::*;
pub use draw::*;
pub use errors::*;
pub use game::*;
pub use random::*;
pub use resolve::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod deck;
mod draw;
mod errors;
mod game;
mod random;
mod resolve;
