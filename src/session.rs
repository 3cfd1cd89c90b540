//! Caller-side seed bookkeeping.
//!
//! The synthesis core never sees this state. A front end keeps one
//! [`SessionState`] per user and asks it which seed the next pattern uses.

use crate::params::RANDOM_SEED_LIMIT;
use rand::Rng;

/// How the next seed is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Draw a fresh seed on every regenerate.
    Random,
    /// Always use this seed.
    Fixed(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_seed: Option<u32>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_seed(&self) -> Option<u32> {
        self.current_seed
    }

    /// The "generate new pattern" action: pick a seed according to `mode`
    /// and remember it.
    pub fn regenerate(&mut self, mode: SeedMode, rng: &mut impl Rng) -> u32 {
        let seed = match mode {
            SeedMode::Random => rng.gen_range(0..RANDOM_SEED_LIMIT),
            SeedMode::Fixed(seed) => seed,
        };
        self.current_seed = Some(seed);
        seed
    }

    /// Seed to render with: the remembered one, or a new one if the
    /// session has none yet.
    pub fn seed_or_init(&mut self, mode: SeedMode, rng: &mut impl Rng) -> u32 {
        match self.current_seed {
            Some(seed) => seed,
            None => self.regenerate(mode, rng),
        }
    }

    pub fn download_file_name(&self) -> Option<String> {
        self.current_seed.map(download_file_name)
    }
}

/// File name that embeds the seed, e.g. `kaleidoscope_42.png`.
pub fn download_file_name(seed: u32) -> String {
    format!("kaleidoscope_{}.png", seed)
}
