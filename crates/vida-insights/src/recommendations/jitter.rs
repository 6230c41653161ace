use super::config::JitterMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the small tie-break addend applied to every candidate score.
pub trait JitterSource {
    /// Returns a value in `[0, max)`; `max <= 0` yields zero.
    fn sample(&mut self, max: f64) -> f64;
}

/// Always zero; keeps ranking fully reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _max: f64) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample(&mut self, max: f64) -> f64 {
        scaled(&mut self.rng, max)
    }
}

/// Seeded from the operating system on construction.
#[derive(Debug, Clone)]
pub struct EntropyJitter {
    rng: StdRng,
}

impl EntropyJitter {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for EntropyJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for EntropyJitter {
    fn sample(&mut self, max: f64) -> f64 {
        scaled(&mut self.rng, max)
    }
}

fn scaled(rng: &mut StdRng, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    rng.random::<f64>() * max
}

pub(crate) fn source_for(mode: JitterMode) -> Box<dyn JitterSource> {
    match mode {
        JitterMode::Off => Box::new(NoJitter),
        JitterMode::Seeded { seed } => Box::new(SeededJitter::new(seed)),
        JitterMode::Entropy => Box::new(EntropyJitter::new()),
    }
}
