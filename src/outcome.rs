//! Randomized outcome port.
//!
//! The engine consumes only the trait contract: one value per call,
//! uniform over a finite discrete set, each call independent. That keeps
//! the door open for a provably-fair seeded generator later without
//! touching the wager orchestration.

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

pub trait OutcomeSource: Send + Sync {
    fn draw(&self) -> u8;
}

/// Fair die: uniform draw from `1..=sides`.
#[derive(Clone, Copy, Debug)]
pub struct UniformDie {
    sides: u8,
}

impl UniformDie {
    pub fn new(sides: u8) -> Self {
        assert!(sides >= 1, "die must have at least one side");
        Self { sides }
    }
}

impl Default for UniformDie {
    fn default() -> Self {
        Self::new(6)
    }
}

impl OutcomeSource for UniformDie {
    fn draw(&self) -> u8 {
        rand::thread_rng().gen_range(1..=self.sides)
    }
}

/// Scripted outcome sequence for deterministic tests; cycles when exhausted.
pub struct FixedOutcomes {
    values: Vec<u8>,
    next: AtomicUsize,
}

impl FixedOutcomes {
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "outcome script must not be empty");
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }

    pub fn always(value: u8) -> Self {
        Self::new(vec![value])
    }
}

impl OutcomeSource for FixedOutcomes {
    fn draw(&self) -> u8 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}
