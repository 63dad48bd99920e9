//! Dice rolls

use std::ops::RangeInclusive;

use rand::Rng;

/// Faces of a six-sided die
pub const FACES: RangeInclusive<u8> = 1..=6;

/// Roll a die using the thread-local generator
pub fn roll() -> u8 {
    roll_with(&mut rand::thread_rng())
}

/// Roll a die with the given generator, uniform over [`FACES`]
pub fn roll_with<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(FACES)
}
