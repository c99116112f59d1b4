//! Rules adapters that plug each game crate into the shared machine.

mod numbers;
mod snake;
mod wordle;

pub use numbers::{NumbersRound, NumbersRules};
pub use snake::{SnakeRound, SnakeRules};
pub use wordle::{WordleRound, WordleRules};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded generator, or one from entropy when no seed is configured.
fn game_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
