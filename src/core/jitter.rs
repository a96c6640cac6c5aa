use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of the random term applied to match scores
///
/// Implementations return a value in `[0, 1)`. They are shared across
/// request handlers, so draws go through `&self`.
pub trait JitterSource: Send + Sync + std::fmt::Debug {
    fn unit(&self) -> f64;
}

/// Draws from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible sequence from a fixed seed
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn unit(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen::<f64>(),
            // A poisoned lock still holds a usable RNG
            Err(poisoned) => poisoned.into_inner().gen::<f64>(),
        }
    }
}

/// Constant jitter value
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(f64);

impl FixedJitter {
    /// Largest value below 1.0, the top of the half-open range
    const MAX: f64 = 1.0 - f64::EPSILON;

    pub fn new(value: f64) -> Self {
        let value = if value.is_finite() { value.clamp(0.0, Self::MAX) } else { 0.0 };
        Self(value)
    }

    /// Jitter that leaves raw scores scaled by the minimum 0.8 multiplier
    pub fn none() -> Self {
        Self(0.0)
    }
}

impl JitterSource for FixedJitter {
    fn unit(&self) -> f64 {
        self.0
    }
}
