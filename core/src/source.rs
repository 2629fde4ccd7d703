use crate::Color;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Drawing strategy for the colors appended during the reveal phase.
///
/// The engine never owns a random number generator; the source is the seam
/// that lets frontends pick their seeding and tests script exact sequences.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Uniform independent draws over the 4-color domain. Repeats are allowed,
/// including the same color twice in a row.
#[derive(Clone, Debug)]
pub struct RandomColorSource {
    rng: SmallRng,
}

impl RandomColorSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> Color {
        Color::ALL[self.rng.random_range(0..Color::COUNT)]
    }
}

/// Deterministic playback of a fixed script, cycling from the start once
/// exhausted. Used by tests and scripted demos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedColorSource {
    script: Vec<Color>,
    next: usize,
}

impl ScriptedColorSource {
    /// `script` must be non-empty.
    pub fn new(script: impl IntoIterator<Item = Color>) -> Self {
        let script: Vec<Color> = script.into_iter().collect();
        assert!(!script.is_empty(), "color script must not be empty");
        Self { script, next: 0 }
    }
}

impl ColorSource for ScriptedColorSource {
    fn next_color(&mut self) -> Color {
        let color = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        color
    }
}
